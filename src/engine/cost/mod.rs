// ==========================================
// 软包装报价系统 - 成本汇总引擎
// ==========================================
// 阶段4: 材料 / 印刷 / 制袋 / 配件 / 特殊工艺 → 不含税总价
// 输入: 阶段1~3 输出 + 原始输入（配件、特殊工艺、数量）
// 红线: 材料成本由计价策略给出,其余分项两种策略共用
// ==========================================

pub mod accessory;
pub mod bag_forming;
pub mod material;
pub mod print;
pub mod special;

use crate::config::quote_config::PrintTariff;
use crate::domain::breakdown::{CostBreakdown, ExpandedUnit, MaterialCost, ProductionRun, RollLayout};
use crate::domain::quote::QuoteInput;
use tracing::debug;

pub use accessory::compute_accessory_cost;
pub use bag_forming::{compute_bag_forming_cost, rule_for, BagFormingRule, FormingBasis, FormingFormula};
pub use material::{feed_area_sqm, material_cost_per_area, material_cost_per_kg};
pub use print::compute_print_cost;
pub use special::compute_special_cost;

/// 阶段1~3 输出
#[derive(Debug, Clone, Copy)]
pub struct StageOutputs {
    pub expanded: ExpandedUnit,
    pub layout: RollLayout,
    pub run: ProductionRun,
}

// ==========================================
// CostAggregator - 成本汇总引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct CostAggregator {
    print: PrintTariff,
}

impl CostAggregator {
    pub fn new(print: PrintTariff) -> Self {
        Self { print }
    }

    /// 汇总各分项成本
    pub fn aggregate(
        &self,
        input: &QuoteInput,
        stages: &StageOutputs,
        material: MaterialCost,
    ) -> CostBreakdown {
        let print = compute_print_cost(&self.print, &stages.run);

        let basis = FormingBasis::new(&stages.layout, &stages.run);
        let bag_forming = compute_bag_forming_cost(input.bag_type, &basis);

        let accessories = compute_accessory_cost(
            &input.accessories,
            input.width_mm,
            stages.layout.units_per_rev,
            stages.run.base_revs(),
            input.quantity,
        );

        let special = compute_special_cost(&input.special, input.quantity);

        let total = material.cost + print.cost + bag_forming.cost + accessories.cost + special.cost;

        debug!(
            material = material.cost,
            print = print.cost,
            bag = bag_forming.cost,
            accessories = accessories.cost,
            special = special.cost,
            total,
            "成本汇总"
        );

        CostBreakdown {
            expanded: stages.expanded,
            layout: stages.layout,
            run: stages.run,
            material,
            print,
            bag_forming,
            accessories,
            special,
            total,
        }
    }
}
