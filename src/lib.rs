// ==========================================
// 软包装报价系统 - 核心库
// ==========================================
// 流程: 展开尺寸 → 卷材排版 → 正单与损耗 → 成本汇总 → 单价/含税价 → 说明
// 系统定位: 纯计算报价引擎（无 IO、无全局状态）+ 调用层（材料库/配置/CLI）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 引擎层 - 报价计算
pub mod engine;

// 配置层 - 印刷机参数与价目表
pub mod config;

// 材料库 - 参考数据与复合结构合成
pub mod catalog;

// API 层 - 请求/响应
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BagType, MaterialKind, PricingMode, TinTieBand};

// 领域值对象
pub use domain::{
    Accessories, CostBreakdown, CostComponent, Explanation, MaterialLayer, MaterialOption,
    MaterialPricing, MaterialSpec, QuoteInput, QuoteResult, SpecialProcess,
};

// 引擎
pub use engine::{quote, PricingStrategy, QuoteEngine, QuoteError};

// 配置
pub use config::{ConfigManager, QuoteConfig};

// 材料库
pub use catalog::{CatalogError, MaterialCatalog};

// API
pub use api::{ApiError, QuoteApi, QuoteRequest, QuoteResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "软包装报价系统";
