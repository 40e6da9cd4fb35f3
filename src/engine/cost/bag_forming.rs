// ==========================================
// 制袋成本
// ==========================================
// 计费基数 baseValue = R_order + R_loss
// 按袋型查表: 公式 + 保底费
// ==========================================

use crate::domain::breakdown::{BagFormingCost, ProductionRun, RollLayout};
use crate::domain::types::BagType;

/// 制袋公式输入
#[derive(Debug, Clone, Copy)]
pub struct FormingBasis {
    pub rev_length_m: f64,
    pub units_per_rev: f64,
    pub units_along: f64,
    pub base_revs: f64,
    pub order_m: f64,
}

impl FormingBasis {
    pub fn new(layout: &RollLayout, run: &ProductionRun) -> Self {
        Self {
            rev_length_m: run.rev_length_m,
            units_per_rev: layout.units_per_rev as f64,
            units_along: layout.units_along as f64,
            base_revs: run.base_revs(),
            order_m: run.order_m,
        }
    }
}

/// 制袋公式形态
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormingFormula {
    /// 系数 × L_rev × baseValue × N_row × 加成
    PerRevLength { coefficient: f64, multiplier: f64 },
    /// 系数 × N_rev × baseValue × N_row
    PerUnits { coefficient: f64 },
    /// 正单米数
    OrderMeters,
}

impl FormingFormula {
    pub fn evaluate(&self, b: &FormingBasis) -> f64 {
        match *self {
            FormingFormula::PerRevLength {
                coefficient,
                multiplier,
            } => coefficient * b.rev_length_m * b.base_revs * b.units_along * multiplier,
            FormingFormula::PerUnits { coefficient } => {
                coefficient * b.units_per_rev * b.base_revs * b.units_along
            }
            FormingFormula::OrderMeters => b.order_m,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BagFormingRule {
    pub formula: FormingFormula,
    pub floor: Option<f64>,
}

static SEAL_RULE: BagFormingRule = BagFormingRule {
    formula: FormingFormula::PerRevLength {
        coefficient: 0.25,
        multiplier: 1.0,
    },
    floor: Some(300.0),
};

static CENTER_SEAL_RULE: BagFormingRule = BagFormingRule {
    formula: FormingFormula::PerUnits { coefficient: 0.35 },
    floor: Some(300.0),
};

static GUSSET_RULE: BagFormingRule = BagFormingRule {
    formula: FormingFormula::PerUnits { coefficient: 0.4 },
    floor: Some(300.0),
};

static EIGHT_SIDE_SEAL_RULE: BagFormingRule = BagFormingRule {
    formula: FormingFormula::OrderMeters,
    floor: Some(1800.0),
};

static SHAPED_BAG_RULE: BagFormingRule = BagFormingRule {
    formula: FormingFormula::PerRevLength {
        coefficient: 0.25,
        multiplier: 1.1,
    },
    floor: None,
};

/// 按袋型查制袋规则
pub fn rule_for(bag_type: BagType) -> &'static BagFormingRule {
    match bag_type {
        BagType::ThreeSideSeal | BagType::StandUp => &SEAL_RULE,
        BagType::CenterSeal => &CENTER_SEAL_RULE,
        BagType::Gusset => &GUSSET_RULE,
        BagType::EightSideSeal => &EIGHT_SIDE_SEAL_RULE,
        BagType::ShapedBag => &SHAPED_BAG_RULE,
    }
}

pub fn compute_bag_forming_cost(bag_type: BagType, basis: &FormingBasis) -> BagFormingCost {
    let rule = rule_for(bag_type);
    let raw_cost = rule.formula.evaluate(basis);

    let (cost, floor_applied) = match rule.floor {
        Some(floor) if raw_cost < floor => (floor, true),
        _ => (raw_cost, false),
    };

    BagFormingCost {
        bag_type,
        raw_cost,
        floor: rule.floor,
        floor_applied,
        cost,
    }
}
