// ==========================================
// 软包装报价系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 扁平 key-value（JSON 文件）+ 环境变量覆写
// ==========================================

use crate::config::config_reader::QuoteConfigReader;
use crate::config::error::ConfigError;
use crate::config::quote_config::{PressProfile, PrintTariff, PrintTier};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "POUCH_QUOTE_CONFIG";

/// 环境变量覆写前缀（key 中的 '.' 替换为 '_' 并转大写）
pub const ENV_PREFIX: &str = "POUCH_QUOTE_";

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const CYCLE_LENGTH_MM: &str = "press.cycle_length_mm";
    pub const WEB_WIDTH_MM: &str = "press.web_width_mm";
    pub const MATERIAL_WEB_WIDTH_MM: &str = "press.material_web_width_mm";
    pub const BASE_LOSS_REVS: &str = "waste.base_loss_revs";
    pub const CHANGEOVER_UNITS: &str = "waste.changeover_units";
    pub const IDLE_RUN_M: &str = "waste.idle_run_m";
    pub const IDLE_ALLOWANCE_M: &str = "waste.idle_allowance_m";
    pub const PRINT_TIERS: &str = "print.tiers";
    pub const PRINT_BASE_PRICE: &str = "print.base_price";
    pub const PRINT_WASTE_PRICE: &str = "print.waste_price";
    pub const SKU_MULTIPLIES_TOTAL: &str = "pricing.sku_multiplies_total";
    pub const EXPLAIN_LOCALE: &str = "explain.locale";

    pub const ALL: [&str; 12] = [
        CYCLE_LENGTH_MM,
        WEB_WIDTH_MM,
        MATERIAL_WEB_WIDTH_MM,
        BASE_LOSS_REVS,
        CHANGEOVER_UNITS,
        IDLE_RUN_M,
        IDLE_ALLOWANCE_M,
        PRINT_TIERS,
        PRINT_BASE_PRICE,
        PRINT_WASTE_PRICE,
        SKU_MULTIPLIES_TOTAL,
        EXPLAIN_LOCALE,
    ];
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 空配置（全部取默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有键值创建
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 从 JSON 文件读取（顶层为扁平对象）
    ///
    /// 字符串值原样保存,其余值保存其 JSON 文本
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let parsed: HashMap<String, serde_json::Value> = serde_json::from_str(&raw)?;

        let values = parsed
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        debug!(path = %path.display(), "配置文件已加载");
        Ok(Self { values })
    }

    /// 按优先级加载配置
    ///
    /// # 顺序
    /// 1. 显式路径（必须存在）
    /// 2. 环境变量 POUCH_QUOTE_CONFIG 指定的路径（必须存在）
    /// 3. 用户配置目录下 pouch-quote/config.json（存在才读取）
    /// 4. 以上都没有 → 空配置
    ///
    /// 最后叠加 POUCH_QUOTE_<KEY> 环境变量覆写
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut manager = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var(CONFIG_PATH_ENV) {
                Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
                _ => match default_config_path() {
                    Some(path) if path.exists() => Self::from_file(path)?,
                    _ => Self::new(),
                },
            },
        };

        manager.apply_env_overrides();
        Ok(manager)
    }

    /// 叠加环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        for key in config_keys::ALL {
            if let Ok(value) = std::env::var(env_var_name(key)) {
                debug!(key, "环境变量覆写配置");
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// 单项覆写（命令行参数等）
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 读取原始配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        match self.get_config_value(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| ConfigError::ValueError {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// 默认配置文件路径: <config_dir>/pouch-quote/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pouch-quote").join("config.json"))
}

/// 配置键对应的环境变量名
pub fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.replace('.', "_").to_uppercase())
}

impl QuoteConfigReader for ConfigManager {
    fn get_cycle_length_mm(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::CYCLE_LENGTH_MM, PressProfile::default().cycle_length_mm)
    }

    fn get_web_width_mm(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::WEB_WIDTH_MM, PressProfile::default().web_width_mm)
    }

    fn get_material_web_width_mm(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(
            config_keys::MATERIAL_WEB_WIDTH_MM,
            PressProfile::default().material_web_width_mm,
        )
    }

    fn get_base_loss_revs(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::BASE_LOSS_REVS, PressProfile::default().base_loss_revs)
    }

    fn get_changeover_units(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::CHANGEOVER_UNITS, PressProfile::default().changeover_units)
    }

    fn get_idle_run_m(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::IDLE_RUN_M, PressProfile::default().idle_run_m)
    }

    fn get_idle_allowance_m(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::IDLE_ALLOWANCE_M, PressProfile::default().idle_allowance_m)
    }

    /// 配置格式为 JSON: [{"max_revs": 500, "unit_price": 6}, ...]
    fn get_print_tiers(&self) -> Result<Vec<PrintTier>, ConfigError> {
        match self.get_config_value(config_keys::PRINT_TIERS) {
            None => Ok(PrintTariff::default().tiers),
            Some(raw) => serde_json::from_str(raw).map_err(|e| ConfigError::ValueError {
                key: config_keys::PRINT_TIERS.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn get_print_base_price(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::PRINT_BASE_PRICE, PrintTariff::default().base_price)
    }

    fn get_print_waste_price(&self) -> Result<f64, ConfigError> {
        self.get_f64_or(config_keys::PRINT_WASTE_PRICE, PrintTariff::default().waste_price)
    }

    fn get_sku_multiplies_total(&self) -> Result<bool, ConfigError> {
        match self.get_config_value(config_keys::SKU_MULTIPLIES_TOTAL) {
            None => Ok(false),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "y" | "on" => Ok(true),
                "0" | "false" | "no" | "n" | "off" => Ok(false),
                _ => Err(ConfigError::ValueError {
                    key: config_keys::SKU_MULTIPLIES_TOTAL.to_string(),
                    value: raw.to_string(),
                    message: "期望布尔值".to_string(),
                }),
            },
        }
    }

    fn get_explain_locale(&self) -> Result<String, ConfigError> {
        Ok(self
            .get_config_value(config_keys::EXPLAIN_LOCALE)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "zh-CN".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manager_yields_defaults() {
        let config = ConfigManager::new().load_quote_config().unwrap();
        assert_eq!(config, crate::config::QuoteConfig::default());
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(
            env_var_name(config_keys::SKU_MULTIPLIES_TOTAL),
            "POUCH_QUOTE_PRICING_SKU_MULTIPLIES_TOTAL"
        );
    }

    #[test]
    fn test_bad_number_reports_key() {
        let mut manager = ConfigManager::new();
        manager.set(config_keys::WEB_WIDTH_MM, "wide");
        let err = manager.load_quote_config().unwrap_err();
        assert!(err.to_string().contains("press.web_width_mm"));
    }

    #[test]
    fn test_bool_parsing() {
        let mut manager = ConfigManager::new();
        manager.set(config_keys::SKU_MULTIPLIES_TOTAL, "on");
        assert!(manager.get_sku_multiplies_total().unwrap());
        manager.set(config_keys::SKU_MULTIPLIES_TOTAL, "maybe");
        assert!(manager.get_sku_multiplies_total().is_err());
    }
}
