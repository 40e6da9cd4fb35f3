// ==========================================
// 印刷成本
// ==========================================
// 印刷成本 = 正单转数 × 档位单价 + 损耗转数 × 损耗单价
// 损耗一律按最低档计价
// ==========================================

use crate::config::quote_config::PrintTariff;
use crate::domain::breakdown::{PrintCost, ProductionRun};

pub fn compute_print_cost(tariff: &PrintTariff, run: &ProductionRun) -> PrintCost {
    let tier_price = tariff.unit_price_for(run.order_revs);
    let cost = run.order_revs * tier_price + run.loss_revs * tariff.waste_price;

    PrintCost {
        tier_price,
        waste_price: tariff.waste_price,
        cost,
    }
}
