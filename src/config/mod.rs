// ==========================================
// 软包装报价系统 - 配置层
// ==========================================
// 职责: 报价参数管理,支持文件 + 环境变量多级覆写
// ==========================================

pub mod config_manager;
pub mod config_reader;
pub mod error;
pub mod quote_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, default_config_path, env_var_name, ConfigManager};
pub use config_reader::QuoteConfigReader;
pub use error::ConfigError;
pub use quote_config::{PressProfile, PrintTariff, PrintTier, QuoteConfig};
