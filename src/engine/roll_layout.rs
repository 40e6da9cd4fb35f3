// ==========================================
// 软包装报价系统 - 排版引擎
// ==========================================
// 阶段2: 展开单元按网格排到印刷版面上
// 规则: 贪心整除,不旋转,不混排
// N_row = floor(版周 / L_exp), N_circ = floor(幅宽 / W_exp)
// 红线: N_rev = 0 必须报错,不得继续除法
// ==========================================

use crate::config::quote_config::PressProfile;
use crate::domain::breakdown::{ExpandedUnit, RollLayout};
use crate::engine::error::{EngineResult, QuoteError};
use tracing::debug;

// ==========================================
// RollLayoutOptimizer - 排版引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RollLayoutOptimizer {
    press: PressProfile,
}

impl RollLayoutOptimizer {
    pub fn new(press: PressProfile) -> Self {
        Self { press }
    }

    /// 计算每转排版个数
    pub fn pack(&self, unit: &ExpandedUnit) -> EngineResult<RollLayout> {
        let units_along = fit_count(self.press.cycle_length_mm, unit.length_mm);
        let units_across = fit_count(self.press.web_width_mm, unit.width_mm);
        let units_per_rev = units_along.checked_mul(units_across).ok_or_else(|| {
            QuoteError::InvalidInput(format!(
                "每转个数溢出: {} × {}",
                units_along, units_across
            ))
        })?;

        if units_per_rev == 0 {
            return Err(QuoteError::InfeasibleLayout {
                length_mm: unit.length_mm,
                width_mm: unit.width_mm,
                cycle_length_mm: self.press.cycle_length_mm,
                web_width_mm: self.press.web_width_mm,
            });
        }

        debug!(
            n_row = units_along,
            n_circ = units_across,
            n_rev = units_per_rev,
            "排版结果"
        );

        Ok(RollLayout {
            units_along,
            units_across,
            units_per_rev,
        })
    }
}

/// floor(capacity / size),size 已保证为正
fn fit_count(capacity: f64, size: f64) -> u64 {
    (capacity / size).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(length_mm: f64, width_mm: f64) -> ExpandedUnit {
        ExpandedUnit { length_mm, width_mm }
    }

    #[test]
    fn test_pack_reference_bag() {
        let layout = RollLayoutOptimizer::new(PressProfile::default())
            .pack(&unit(340.0, 105.0))
            .unwrap();
        assert_eq!(layout.units_along, 2);
        assert_eq!(layout.units_across, 10);
        assert_eq!(layout.units_per_rev, 20);
    }

    #[test]
    fn test_exact_fit_counts_whole_unit() {
        let layout = RollLayoutOptimizer::new(PressProfile::default())
            .pack(&unit(370.0, 1120.0))
            .unwrap();
        assert_eq!(layout.units_along, 2);
        assert_eq!(layout.units_across, 1);
    }

    #[test]
    fn test_too_wide_is_infeasible() {
        let err = RollLayoutOptimizer::new(PressProfile::default())
            .pack(&unit(340.0, 2005.0))
            .unwrap_err();
        assert_eq!(err.kind(), "INFEASIBLE_LAYOUT");
    }

    #[test]
    fn test_units_per_rev_overflow_is_rejected() {
        let press = PressProfile {
            cycle_length_mm: 1e300,
            web_width_mm: 1e300,
            ..PressProfile::default()
        };
        let err = RollLayoutOptimizer::new(press).pack(&unit(1.0, 1.0)).unwrap_err();
        assert_eq!(err.kind(), "INVALID_INPUT");
    }

    #[test]
    fn test_too_long_is_infeasible() {
        let err = RollLayoutOptimizer::new(PressProfile::default())
            .pack(&unit(741.0, 105.0))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InfeasibleLayout { .. }));
    }
}
