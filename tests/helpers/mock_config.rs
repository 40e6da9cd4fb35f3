// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use pouch_quote::config::{ConfigError, PrintTier, QuoteConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub cycle_length_mm: f64,
    pub web_width_mm: f64,
    pub material_web_width_mm: f64,
    pub base_loss_revs: f64,
    pub changeover_units: f64,
    pub idle_run_m: f64,
    pub idle_allowance_m: f64,
    pub print_tiers: Vec<PrintTier>,
    pub print_base_price: f64,
    pub print_waste_price: f64,
    pub sku_multiplies_total: bool,
    pub locale: String,
}

impl MockConfig {
    /// 创建默认配置（与出厂参数一致）
    pub fn default() -> Self {
        Self {
            cycle_length_mm: 740.0,
            web_width_mm: 1120.0,
            material_web_width_mm: 760.0,
            base_loss_revs: 100.0,
            changeover_units: 600.0,
            idle_run_m: 1500.0,
            idle_allowance_m: 50.0,
            print_tiers: vec![
                PrintTier { max_revs: 500.0, unit_price: 6.0 },
                PrintTier { max_revs: 1000.0, unit_price: 5.0 },
                PrintTier { max_revs: 2000.0, unit_price: 4.5 },
                PrintTier { max_revs: 5000.0, unit_price: 4.25 },
            ],
            print_base_price: 4.0,
            print_waste_price: 4.0,
            sku_multiplies_total: false,
            locale: "zh-CN".to_string(),
        }
    }

    /// 含税总价乘以款数
    pub fn sku_multiplied() -> Self {
        let mut config = Self::default();
        config.sku_multiplies_total = true;
        config
    }

    /// 英文说明
    pub fn english() -> Self {
        let mut config = Self::default();
        config.locale = "en".to_string();
        config
    }

    /// 更宽的印刷机
    pub fn wide_press(web_width_mm: f64) -> Self {
        let mut config = Self::default();
        config.web_width_mm = web_width_mm;
        config
    }
}

impl QuoteConfigReader for MockConfig {
    fn get_cycle_length_mm(&self) -> Result<f64, ConfigError> {
        Ok(self.cycle_length_mm)
    }

    fn get_web_width_mm(&self) -> Result<f64, ConfigError> {
        Ok(self.web_width_mm)
    }

    fn get_material_web_width_mm(&self) -> Result<f64, ConfigError> {
        Ok(self.material_web_width_mm)
    }

    fn get_base_loss_revs(&self) -> Result<f64, ConfigError> {
        Ok(self.base_loss_revs)
    }

    fn get_changeover_units(&self) -> Result<f64, ConfigError> {
        Ok(self.changeover_units)
    }

    fn get_idle_run_m(&self) -> Result<f64, ConfigError> {
        Ok(self.idle_run_m)
    }

    fn get_idle_allowance_m(&self) -> Result<f64, ConfigError> {
        Ok(self.idle_allowance_m)
    }

    fn get_print_tiers(&self) -> Result<Vec<PrintTier>, ConfigError> {
        Ok(self.print_tiers.clone())
    }

    fn get_print_base_price(&self) -> Result<f64, ConfigError> {
        Ok(self.print_base_price)
    }

    fn get_print_waste_price(&self) -> Result<f64, ConfigError> {
        Ok(self.print_waste_price)
    }

    fn get_sku_multiplies_total(&self) -> Result<bool, ConfigError> {
        Ok(self.sku_multiplies_total)
    }

    fn get_explain_locale(&self) -> Result<String, ConfigError> {
        Ok(self.locale.clone())
    }
}
