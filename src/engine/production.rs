// ==========================================
// 软包装报价系统 - 正单与损耗引擎
// ==========================================
// 阶段3: 订单数量 + 排版 → 转数与投料米数
// 输入: Q, SUK, N_rev, N_circ, W_exp
// 输出: L_rev, R_order, R_loss, M_order, M_loss, M_idle, M_total
// ==========================================
// 注: 转数与米数均不取整（连续卷材计价模型）
// ==========================================

use crate::config::quote_config::PressProfile;
use crate::domain::breakdown::{ExpandedUnit, ProductionRun, RollLayout};
use tracing::debug;

// ==========================================
// ProductionCalculator - 正单与损耗引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct ProductionCalculator {
    press: PressProfile,
}

impl ProductionCalculator {
    pub fn new(press: PressProfile) -> Self {
        Self { press }
    }

    /// 计算正单、损耗与空转投料
    ///
    /// 调用方保证 quantity > 0, sku_count ≥ 1, units_per_rev > 0
    pub fn compute(
        &self,
        quantity: u64,
        sku_count: u32,
        layout: &RollLayout,
        unit: &ExpandedUnit,
    ) -> ProductionRun {
        let n_rev = layout.units_per_rev as f64;

        // 每转长度（m）
        let rev_length_m = (layout.units_across as f64 * unit.width_mm) / 1000.0;

        // 正单转数
        let order_revs = quantity as f64 / n_rev;

        // 损耗转数 = 款数 × 换版基数 / 每转个数 + 固定上机损耗
        let loss_revs =
            sku_count as f64 * (self.press.changeover_units / n_rev) + self.press.base_loss_revs;

        let order_m = order_revs * rev_length_m;
        let loss_m = loss_revs * rev_length_m;

        // 空转 = (正单 + 损耗) / 基准米数 × 空转米数
        let idle_m = ((order_m + loss_m) / self.press.idle_run_m) * self.press.idle_allowance_m;
        let total_m = order_m + loss_m + idle_m;

        debug!(
            l_rev = rev_length_m,
            r_order = order_revs,
            r_loss = loss_revs,
            m_total = total_m,
            "正单与损耗"
        );

        ProductionRun {
            rev_length_m,
            order_revs,
            loss_revs,
            order_m,
            loss_m,
            idle_m,
            total_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn reference_layout() -> (RollLayout, ExpandedUnit) {
        (
            RollLayout {
                units_along: 2,
                units_across: 10,
                units_per_rev: 20,
            },
            ExpandedUnit {
                length_mm: 340.0,
                width_mm: 105.0,
            },
        )
    }

    #[test]
    fn test_reference_run() {
        let (layout, unit) = reference_layout();
        let run = ProductionCalculator::new(PressProfile::default()).compute(1000, 1, &layout, &unit);

        assert!(close(run.rev_length_m, 1.05));
        assert!(close(run.order_revs, 50.0));
        assert!(close(run.loss_revs, 130.0));
        assert!(close(run.order_m, 52.5));
        assert!(close(run.loss_m, 136.5));
        assert!(close(run.idle_m, 6.3));
        assert!(close(run.total_m, 195.3));
        assert!(close(run.base_revs(), 180.0));
    }

    #[test]
    fn test_sku_count_adds_changeover_waste() {
        let (layout, unit) = reference_layout();
        let calc = ProductionCalculator::new(PressProfile::default());
        let one = calc.compute(1000, 1, &layout, &unit);
        let three = calc.compute(1000, 3, &layout, &unit);

        assert!(close(three.loss_revs - one.loss_revs, 60.0));
        assert!(close(three.order_revs, one.order_revs));
    }

    #[test]
    fn test_order_revs_not_rounded() {
        let (layout, unit) = reference_layout();
        let run = ProductionCalculator::new(PressProfile::default()).compute(1010, 1, &layout, &unit);
        assert!(close(run.order_revs, 50.5));
    }
}
