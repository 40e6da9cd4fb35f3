// ==========================================
// 软包装报价系统 - 引擎层
// ==========================================
// 阶段1 展开尺寸 → 阶段2 卷材排版 → 阶段3 正单与损耗 → 阶段4 成本汇总
// 计价策略决定材料成本口径; 说明生成只读成本明细
// ==========================================
// 红线: 引擎不读文件、不读环境变量,配置由调用方注入
// ==========================================

pub mod cost;
pub mod error;
pub mod explain;
pub mod layout;
pub mod pipeline;
pub mod pricing;
pub mod production;
pub mod quote_engine;
pub mod roll_layout;

// 重导出核心引擎
pub use cost::{CostAggregator, StageOutputs};
pub use error::{EngineResult, QuoteError};
pub use explain::{ExplanationBuilder, PriceSummary};
pub use layout::{formula_for, ExpansionFormula, LayoutExpander, NominalDims};
pub use pipeline::{run_stages, validate_input};
pub use pricing::{strategy_for, AreaPriceStrategy, PricingStrategy, RollWasteStrategy};
pub use production::ProductionCalculator;
pub use quote_engine::{quote, QuoteEngine};
pub use roll_layout::RollLayoutOptimizer;
