// ==========================================
// 软包装报价系统 - 配置错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件格式错误: {0}")]
    ParseError(String),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: f64, message: &str) -> Self {
        ConfigError::ValueError {
            key: key.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
