// ==========================================
// 材料成本
// ==========================================
// 投料面积 = M_total × 计费幅宽
// 按重量: 面积 × 厚度 × 密度 × 元/kg
// 按面积: 面积 × 元/㎡
// ==========================================

use crate::domain::breakdown::{MaterialCost, ProductionRun};
use crate::domain::types::PricingMode;

/// 投料面积（㎡）
pub fn feed_area_sqm(run: &ProductionRun, material_web_width_mm: f64) -> f64 {
    run.total_m * (material_web_width_mm / 1000.0)
}

pub fn material_cost_per_kg(
    area_sqm: f64,
    thickness_um: f64,
    density: f64,
    price_per_kg: f64,
) -> MaterialCost {
    let weight_kg = area_sqm * (thickness_um / 1_000_000.0) * density;
    MaterialCost {
        mode: PricingMode::PerKg,
        area_sqm,
        weight_kg: Some(weight_kg),
        unit_price: price_per_kg,
        cost: weight_kg * price_per_kg,
    }
}

pub fn material_cost_per_area(area_sqm: f64, price_per_sqm: f64) -> MaterialCost {
    MaterialCost {
        mode: PricingMode::PerArea,
        area_sqm,
        weight_kg: None,
        unit_price: price_per_sqm,
        cost: area_sqm * price_per_sqm,
    }
}
