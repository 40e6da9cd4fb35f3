// ==========================================
// 软包装报价系统 - 引擎错误类型
// ==========================================
// 所有错误均为确定性错误: 相同输入必然复现,唯一恢复方式是修正输入
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// 标称尺寸或展开尺寸 ≤ 0
    #[error("尺寸无效: {field}={value}mm, {reason}")]
    InvalidGeometry {
        field: String,
        value: f64,
        reason: String,
    },

    /// 单个展开尺寸超过印刷机可排范围（每转个数为 0）
    #[error("排版不可行: 展开尺寸 {length_mm}×{width_mm}mm 超出印刷机可排范围 {cycle_length_mm}×{web_width_mm}mm")]
    InfeasibleLayout {
        length_mm: f64,
        width_mm: f64,
        cycle_length_mm: f64,
        web_width_mm: f64,
    },

    /// 数量 Q ≤ 0 或款数 SUK < 1
    #[error("数量无效: {0}")]
    InvalidQuantity(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

impl QuoteError {
    /// 稳定的错误类别标识（供调用层展示/映射退出码）
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            QuoteError::InfeasibleLayout { .. } => "INFEASIBLE_LAYOUT",
            QuoteError::InvalidQuantity(_) => "INVALID_QUANTITY",
            QuoteError::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    pub(crate) fn geometry(field: &str, value: f64, reason: &str) -> Self {
        QuoteError::InvalidGeometry {
            field: field.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, QuoteError>;
