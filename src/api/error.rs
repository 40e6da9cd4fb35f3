// ==========================================
// 软包装报价系统 - API层错误类型
// ==========================================
// 职责: 汇总引擎/材料库/配置错误,提供稳定错误类别与进程退出码
// ==========================================

use crate::catalog::error::CatalogError;
use crate::config::error::ConfigError;
use crate::engine::error::QuoteError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("材料库错误: {0}")]
    Catalog(#[from] CatalogError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 请求体无法解析（含未知字段）
    #[error("请求解析失败: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl ApiError {
    /// 稳定的错误类别标识
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Quote(e) => e.kind(),
            ApiError::Catalog(_) => "CATALOG",
            ApiError::Config(_) => "CONFIG",
            ApiError::InvalidRequest(_) => "INVALID_INPUT",
        }
    }

    /// 进程退出码（按错误类别固定）
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            "INVALID_GEOMETRY" => 2,
            "INFEASIBLE_LAYOUT" => 3,
            "INVALID_QUANTITY" => 4,
            "INVALID_INPUT" => 5,
            "CATALOG" => 6,
            "CONFIG" => 7,
            _ => 1,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_error_kind_passes_through() {
        let err: ApiError = QuoteError::InvalidQuantity("Q=0".to_string()).into();
        assert_eq!(err.kind(), "INVALID_QUANTITY");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_catalog_and_config_kinds() {
        let err: ApiError = CatalogError::EmptyStack.into();
        assert_eq!(err.kind(), "CATALOG");
        assert_eq!(err.exit_code(), 6);

        let err: ApiError = ConfigError::FileNotFound("x.json".to_string()).into();
        assert_eq!(err.kind(), "CONFIG");
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_json_error_maps_to_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert_eq!(err.kind(), "INVALID_INPUT");
    }
}
