// ==========================================
// 软包装报价系统 - 领域模型层
// ==========================================
// 职责: 定义报价输入、阶段输出、成本明细等值对象
// 红线: 不含计算逻辑,不含文件读取
// ==========================================

pub mod breakdown;
pub mod material;
pub mod quote;
pub mod types;

// 重导出核心类型
pub use breakdown::{
    AccessoryCost, AccessoryItem, BagFormingCost, CostBreakdown, CostComponent, ExpandedUnit,
    Explanation, MaterialCost, PrintCost, ProductionRun, QuoteResult, RollLayout, SpecialCost,
    SpecialItem,
};
pub use material::{CompositeMaterial, MaterialLayer, MaterialOption};
pub use quote::{Accessories, MaterialPricing, MaterialSpec, QuoteInput, SpecialProcess};
pub use types::{BagType, MaterialKind, PricingMode, TinTieBand};
