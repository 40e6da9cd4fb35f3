// ==========================================
// 软包装报价系统 - 报价参数
// ==========================================
// 印刷机/损耗/印刷档位常量,默认值即工厂核价标准
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

// ==========================================
// PressProfile - 印刷机与损耗常量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressProfile {
    /// 走纸方向可排长度（mm）
    pub cycle_length_mm: f64,

    /// 横向可排宽度（mm）
    pub web_width_mm: f64,

    /// 材料计费幅宽（mm）
    pub material_web_width_mm: f64,

    /// 固定上机损耗转数
    pub base_loss_revs: f64,

    /// 每款换版损耗基数（个）,损耗转数 = 款数 × 基数 / 每转个数
    pub changeover_units: f64,

    /// 空转折算基准米数
    pub idle_run_m: f64,

    /// 每个基准米数的空转米数
    pub idle_allowance_m: f64,
}

impl Default for PressProfile {
    fn default() -> Self {
        Self {
            cycle_length_mm: 740.0,
            web_width_mm: 1120.0,
            material_web_width_mm: 760.0,
            base_loss_revs: 100.0,
            changeover_units: 600.0,
            idle_run_m: 1500.0,
            idle_allowance_m: 50.0,
        }
    }
}

// ==========================================
// PrintTariff - 印刷阶梯价
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintTier {
    /// 正单转数上限（含）
    pub max_revs: f64,

    /// 单价（元/转）
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintTariff {
    /// 按 max_revs 升序
    pub tiers: Vec<PrintTier>,

    /// 超出全部档位时的单价
    pub base_price: f64,

    /// 损耗转数单价
    pub waste_price: f64,
}

impl Default for PrintTariff {
    fn default() -> Self {
        Self {
            tiers: vec![
                PrintTier { max_revs: 500.0, unit_price: 6.0 },
                PrintTier { max_revs: 1000.0, unit_price: 5.0 },
                PrintTier { max_revs: 2000.0, unit_price: 4.5 },
                PrintTier { max_revs: 5000.0, unit_price: 4.25 },
            ],
            base_price: 4.0,
            waste_price: 4.0,
        }
    }
}

impl PrintTariff {
    /// 按正单转数查档位单价
    pub fn unit_price_for(&self, order_revs: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| order_revs <= tier.max_revs)
            .map(|tier| tier.unit_price)
            .unwrap_or(self.base_price)
    }
}

// ==========================================
// QuoteConfig - 报价引擎配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub press: PressProfile,
    pub print: PrintTariff,

    /// 含税总价是否再乘以款数
    ///
    /// 两种历史口径不一致,待产品确认;默认不乘
    pub sku_multiplies_total: bool,

    /// 文字说明语言（zh-CN / en）
    pub locale: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            press: PressProfile::default(),
            print: PrintTariff::default(),
            sku_multiplies_total: false,
            locale: "zh-CN".to_string(),
        }
    }
}

impl QuoteConfig {
    /// 校验配置有效性
    ///
    /// # 验证规则
    /// 1. 印刷机尺寸、计费幅宽、空转基准必须为正
    /// 2. 损耗常量与单价不能为负
    /// 3. 印刷档位按转数严格升序
    /// 4. 语言仅支持 zh-CN / en
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.press;
        for (key, value) in [
            ("press.cycle_length_mm", p.cycle_length_mm),
            ("press.web_width_mm", p.web_width_mm),
            ("press.material_web_width_mm", p.material_web_width_mm),
            ("waste.idle_run_m", p.idle_run_m),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(key, value, "必须为正数"));
            }
        }

        for (key, value) in [
            ("waste.base_loss_revs", p.base_loss_revs),
            ("waste.changeover_units", p.changeover_units),
            ("waste.idle_allowance_m", p.idle_allowance_m),
            ("print.base_price", self.print.base_price),
            ("print.waste_price", self.print.waste_price),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(key, value, "不能为负数"));
            }
        }

        let mut prev = f64::NEG_INFINITY;
        for tier in &self.print.tiers {
            if !(tier.max_revs.is_finite() && tier.max_revs > prev) {
                return Err(ConfigError::invalid(
                    "print.tiers",
                    tier.max_revs,
                    "档位转数必须严格升序",
                ));
            }
            if !(tier.unit_price.is_finite() && tier.unit_price >= 0.0) {
                return Err(ConfigError::invalid("print.tiers", tier.unit_price, "单价不能为负数"));
            }
            prev = tier.max_revs;
        }

        if !crate::i18n::SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::ValueError {
                key: "explain.locale".to_string(),
                value: self.locale.clone(),
                message: "仅支持 zh-CN / en".to_string(),
            });
        }

        Ok(())
    }
}
