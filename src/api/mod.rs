// ==========================================
// 软包装报价系统 - API 层
// ==========================================
// 职责: 请求 DTO → 材料解析 → 引擎 → 响应 DTO
// ==========================================

pub mod error;
pub mod quote_api;

pub use error::{ApiError, ApiResult};
pub use quote_api::{ExplainEntry, MaterialRequest, QuoteApi, QuoteRequest, QuoteResponse};
