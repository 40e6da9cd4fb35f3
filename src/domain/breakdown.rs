// ==========================================
// 软包装报价系统 - 成本明细与报价结果
// ==========================================
// 职责: 各计算阶段的输出值对象
// 红线: 所有中间量原样保留,只在文字说明中取整
// ==========================================

use crate::domain::types::{BagType, PricingMode, TinTieBand};
use serde::{Deserialize, Serialize};

// ==========================================
// 阶段1: 展开尺寸
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpandedUnit {
    /// 走纸方向展开长度 L_exp（mm）
    pub length_mm: f64,

    /// 横向展开宽度 W_exp（mm）
    pub width_mm: f64,
}

// ==========================================
// 阶段2: 排版
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLayout {
    /// 走纸方向个数 N_row
    pub units_along: u64,

    /// 横向个数 N_circ
    pub units_across: u64,

    /// 每转个数 N_rev = N_row × N_circ
    pub units_per_rev: u64,
}

// ==========================================
// 阶段3: 正单与损耗
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionRun {
    /// 每转长度 L_rev（m）
    pub rev_length_m: f64,

    /// 正单转数 R_order（不取整）
    pub order_revs: f64,

    /// 损耗转数 R_loss
    pub loss_revs: f64,

    /// 正单米数 M_order
    pub order_m: f64,

    /// 损耗米数 M_loss
    pub loss_m: f64,

    /// 空转米数 M_idle
    pub idle_m: f64,

    /// 投料总米数 M_total
    pub total_m: f64,
}

impl ProductionRun {
    /// 制袋/配件计费基数 = R_order + R_loss
    pub fn base_revs(&self) -> f64 {
        self.order_revs + self.loss_revs
    }
}

// ==========================================
// 阶段4: 成本明细
// ==========================================

/// 材料成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub mode: PricingMode,

    /// 投料面积（㎡）
    pub area_sqm: f64,

    /// 投料重量（kg）,仅按重量计价时有值
    pub weight_kg: Option<f64>,

    /// 材料单价（元/kg 或 元/㎡）
    pub unit_price: f64,

    pub cost: f64,
}

/// 印刷成本
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintCost {
    /// 正单档位单价（元/转）
    pub tier_price: f64,

    /// 损耗单价（元/转）
    pub waste_price: f64,

    pub cost: f64,
}

/// 制袋成本
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagFormingCost {
    pub bag_type: BagType,

    /// 公式计算值（保底前）
    pub raw_cost: f64,

    /// 保底费
    pub floor: Option<f64>,

    /// 是否触发保底
    pub floor_applied: bool,

    pub cost: f64,
}

/// 配件项目
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryItem {
    Zipper,
    TearZipper,
    Valve,
    Spout,
    Handle,
    TinTie(TinTieBand),
}

/// 配件成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryCost {
    /// 拉链长度基数 zipLength
    pub zip_length: f64,

    pub items: Vec<(AccessoryItem, f64)>,

    pub cost: f64,
}

/// 特殊工艺项目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialItem {
    StripedWindow,
    SpotUv,
    ShapedTooling,
}

/// 特殊工艺成本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialCost {
    pub items: Vec<(SpecialItem, f64)>,

    /// 模具费大于5000 标记
    pub high_mold_cost: bool,

    pub cost: f64,
}

/// 完整成本明细（计价策略输出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub expanded: ExpandedUnit,
    pub layout: RollLayout,
    pub run: ProductionRun,
    pub material: MaterialCost,
    pub print: PrintCost,
    pub bag_forming: BagFormingCost,
    pub accessories: AccessoryCost,
    pub special: SpecialCost,

    /// 不含税总价
    pub total: f64,
}

// ==========================================
// 文字说明
// ==========================================

/// 说明条目对应的成本分项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    Material,
    Print,
    BagForming,
    Accessories,
    Special,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub component: CostComponent,
    pub title: String,

    /// 公式模板
    pub formula: String,

    /// 代入数值（显示取整）
    pub substitution: String,

    /// 计算结果（未取整）
    pub result: f64,

    /// 完整展示文本
    pub text: String,
}

// ==========================================
// QuoteResult - 报价结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quantity: u64,
    pub sku_count: u32,
    pub tax_rate: f64,

    /// 不含税单价
    pub unit_price: f64,

    /// 含税单价
    pub unit_price_cny: f64,

    /// 含税总价
    pub total_price_cny: f64,

    /// 总价是否乘以款数
    pub sku_multiplied: bool,

    pub breakdown: CostBreakdown,
    pub explain: Vec<Explanation>,
}
