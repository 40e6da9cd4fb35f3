// ==========================================
// 软包装报价系统 - 配置读取 Trait
// ==========================================
// 职责: 定义报价引擎所需的配置读取接口（不包含实现）
// 实现者: ConfigManager（JSON 文件 + 环境变量）
// ==========================================

use crate::config::error::ConfigError;
use crate::config::quote_config::{PressProfile, PrintTariff, PrintTier, QuoteConfig};

pub trait QuoteConfigReader: Send + Sync {
    // ===== 印刷机常量 =====

    /// 走纸方向可排长度（mm）,默认 740
    fn get_cycle_length_mm(&self) -> Result<f64, ConfigError>;

    /// 横向可排宽度（mm）,默认 1120
    fn get_web_width_mm(&self) -> Result<f64, ConfigError>;

    /// 材料计费幅宽（mm）,默认 760
    fn get_material_web_width_mm(&self) -> Result<f64, ConfigError>;

    // ===== 损耗常量 =====

    /// 固定上机损耗转数,默认 100
    fn get_base_loss_revs(&self) -> Result<f64, ConfigError>;

    /// 每款换版损耗基数,默认 600
    fn get_changeover_units(&self) -> Result<f64, ConfigError>;

    /// 空转折算基准米数,默认 1500
    fn get_idle_run_m(&self) -> Result<f64, ConfigError>;

    /// 每基准米数的空转米数,默认 50
    fn get_idle_allowance_m(&self) -> Result<f64, ConfigError>;

    // ===== 印刷价格 =====

    /// 印刷阶梯价,默认 500/1000/2000/5000 → 6/5/4.5/4.25
    fn get_print_tiers(&self) -> Result<Vec<PrintTier>, ConfigError>;

    /// 超出档位单价,默认 4
    fn get_print_base_price(&self) -> Result<f64, ConfigError>;

    /// 损耗转数单价,默认 4
    fn get_print_waste_price(&self) -> Result<f64, ConfigError>;

    // ===== 报价口径 =====

    /// 含税总价是否乘以款数,默认 false
    fn get_sku_multiplies_total(&self) -> Result<bool, ConfigError>;

    /// 文字说明语言,默认 zh-CN
    fn get_explain_locale(&self) -> Result<String, ConfigError>;

    /// 汇总为 QuoteConfig 并校验
    fn load_quote_config(&self) -> Result<QuoteConfig, ConfigError> {
        let config = QuoteConfig {
            press: PressProfile {
                cycle_length_mm: self.get_cycle_length_mm()?,
                web_width_mm: self.get_web_width_mm()?,
                material_web_width_mm: self.get_material_web_width_mm()?,
                base_loss_revs: self.get_base_loss_revs()?,
                changeover_units: self.get_changeover_units()?,
                idle_run_m: self.get_idle_run_m()?,
                idle_allowance_m: self.get_idle_allowance_m()?,
            },
            print: PrintTariff {
                tiers: self.get_print_tiers()?,
                base_price: self.get_print_base_price()?,
                waste_price: self.get_print_waste_price()?,
            },
            sku_multiplies_total: self.get_sku_multiplies_total()?,
            locale: self.get_explain_locale()?,
        };
        config.validate()?;
        Ok(config)
    }
}
