// ==========================================
// 配件成本
// ==========================================
// 拉链长度基数 zipLength = (W/1000) × N_rev × (R_order + R_loss)
// 各配件独立累加,锡条至多一档
// ==========================================

use crate::domain::breakdown::{AccessoryCost, AccessoryItem};
use crate::domain::quote::Accessories;

pub const ZIPPER_RATE: f64 = 0.2;
pub const TEAR_ZIPPER_RATE: f64 = 0.35;
pub const VALVE_UNIT_PRICE: f64 = 0.5;
pub const SPOUT_UNIT_PRICE: f64 = 0.5;
pub const HANDLE_UNIT_PRICE: f64 = 1.0;

pub fn compute_accessory_cost(
    accessories: &Accessories,
    width_mm: f64,
    units_per_rev: u64,
    base_revs: f64,
    quantity: u64,
) -> AccessoryCost {
    let zip_length = (width_mm / 1000.0) * units_per_rev as f64 * base_revs;
    let q = quantity as f64;

    let mut items = Vec::new();
    if accessories.zipper {
        items.push((AccessoryItem::Zipper, zip_length * ZIPPER_RATE));
    }
    if accessories.tear_zipper {
        items.push((AccessoryItem::TearZipper, zip_length * TEAR_ZIPPER_RATE));
    }
    if accessories.valve {
        items.push((AccessoryItem::Valve, q * VALVE_UNIT_PRICE));
    }
    if accessories.spout {
        items.push((AccessoryItem::Spout, q * SPOUT_UNIT_PRICE));
    }
    if accessories.handle {
        items.push((AccessoryItem::Handle, q * HANDLE_UNIT_PRICE));
    }
    if let Some(band) = accessories.tin_tie {
        items.push((AccessoryItem::TinTie(band), q * band.unit_price()));
    }

    let cost: f64 = items.iter().map(|(_, c)| c).sum();

    AccessoryCost {
        zip_length,
        items,
        cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TinTieBand;

    #[test]
    fn test_no_accessories_is_zero() {
        let cost = compute_accessory_cost(&Accessories::default(), 100.0, 20, 180.0, 1000);
        assert!(cost.items.is_empty());
        assert_eq!(cost.cost, 0.0);
        assert!((cost.zip_length - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_accessories_add_independently() {
        let accessories = Accessories {
            zipper: true,
            tear_zipper: true,
            valve: true,
            spout: true,
            handle: true,
            tin_tie: Some(TinTieBand::Over250),
        };
        let cost = compute_accessory_cost(&accessories, 100.0, 20, 180.0, 1000);

        // 360×0.2 + 360×0.35 + 500 + 500 + 1000 + 800
        let expected = 72.0 + 126.0 + 500.0 + 500.0 + 1000.0 + 800.0;
        assert_eq!(cost.items.len(), 6);
        assert!((cost.cost - expected).abs() < 1e-9);
    }
}
