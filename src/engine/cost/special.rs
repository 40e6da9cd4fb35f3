// ==========================================
// 特殊工艺成本
// ==========================================

use crate::domain::breakdown::{SpecialCost, SpecialItem};
use crate::domain::quote::SpecialProcess;

/// 异形袋模具费分档数量
pub const SHAPED_TOOLING_QTY_BREAK: u64 = 5000;

pub const STRIPED_WINDOW_RATE: f64 = 0.2;
pub const STRIPED_WINDOW_FEE: f64 = 300.0;
pub const SPOT_UV_RATE: f64 = 0.2;
pub const SPOT_UV_FEE: f64 = 500.0;
pub const SHAPED_TOOLING_RATE: f64 = 0.05;
pub const SHAPED_TOOLING_MOLD_SMALL: f64 = 900.0;
pub const SHAPED_TOOLING_MOLD_LARGE: f64 = 1200.0;

/// 异形袋模具费（按数量分档）
pub fn shaped_tooling_mold_fee(quantity: u64) -> f64 {
    if quantity < SHAPED_TOOLING_QTY_BREAK {
        SHAPED_TOOLING_MOLD_SMALL
    } else {
        SHAPED_TOOLING_MOLD_LARGE
    }
}

pub fn compute_special_cost(special: &SpecialProcess, quantity: u64) -> SpecialCost {
    let q = quantity as f64;

    let mut items = Vec::new();
    if special.striped_window {
        items.push((SpecialItem::StripedWindow, q * STRIPED_WINDOW_RATE + STRIPED_WINDOW_FEE));
    }
    if special.spot_uv {
        items.push((SpecialItem::SpotUv, q * SPOT_UV_RATE + SPOT_UV_FEE));
    }
    if special.shaped_tooling {
        items.push((
            SpecialItem::ShapedTooling,
            q * SHAPED_TOOLING_RATE + shaped_tooling_mold_fee(quantity),
        ));
    }

    let cost: f64 = items.iter().map(|(_, c)| c).sum();

    SpecialCost {
        items,
        high_mold_cost: special.high_mold_cost,
        cost,
    }
}
