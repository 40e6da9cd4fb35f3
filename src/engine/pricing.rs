// ==========================================
// 软包装报价系统 - 计价策略
// ==========================================
// 用途：
// - 同一报价接口下的两种材料计价口径;
// - 按输入的材料计价方式（元/kg 或 元/㎡）选择策略,调用点只有一个。

use crate::config::quote_config::QuoteConfig;
use crate::domain::breakdown::CostBreakdown;
use crate::domain::quote::{MaterialPricing, QuoteInput};
use crate::domain::types::PricingMode;
use crate::engine::cost::{self, CostAggregator};
use crate::engine::error::{EngineResult, QuoteError};
use crate::engine::pipeline::run_stages;

/// 计价策略
pub trait PricingStrategy: Send + Sync {
    fn mode(&self) -> PricingMode;

    /// 计算完整成本明细
    fn compute_cost(&self, input: &QuoteInput) -> EngineResult<CostBreakdown>;
}

// ==========================================
// RollWasteStrategy - 卷材排版 + 损耗 + 按重量计价
// ==========================================
pub struct RollWasteStrategy<'a> {
    config: &'a QuoteConfig,
}

impl<'a> RollWasteStrategy<'a> {
    pub fn new(config: &'a QuoteConfig) -> Self {
        Self { config }
    }
}

impl PricingStrategy for RollWasteStrategy<'_> {
    fn mode(&self) -> PricingMode {
        PricingMode::PerKg
    }

    fn compute_cost(&self, input: &QuoteInput) -> EngineResult<CostBreakdown> {
        let price_per_kg = match input.material.pricing {
            MaterialPricing::PerKg { price_per_kg } => price_per_kg,
            other => return Err(mode_mismatch(self.mode(), other.mode())),
        };

        let stages = run_stages(input, self.config)?;
        let area = cost::feed_area_sqm(&stages.run, self.config.press.material_web_width_mm);
        let material = cost::material_cost_per_kg(
            area,
            input.material.thickness_um,
            input.material.density,
            price_per_kg,
        );

        Ok(CostAggregator::new(self.config.print.clone()).aggregate(input, &stages, material))
    }
}

// ==========================================
// AreaPriceStrategy - 同一排版/损耗模型,材料按面积计价
// ==========================================
pub struct AreaPriceStrategy<'a> {
    config: &'a QuoteConfig,
}

impl<'a> AreaPriceStrategy<'a> {
    pub fn new(config: &'a QuoteConfig) -> Self {
        Self { config }
    }
}

impl PricingStrategy for AreaPriceStrategy<'_> {
    fn mode(&self) -> PricingMode {
        PricingMode::PerArea
    }

    fn compute_cost(&self, input: &QuoteInput) -> EngineResult<CostBreakdown> {
        let price_per_sqm = match input.material.pricing {
            MaterialPricing::PerArea { price_per_sqm } => price_per_sqm,
            other => return Err(mode_mismatch(self.mode(), other.mode())),
        };

        let stages = run_stages(input, self.config)?;
        let area = cost::feed_area_sqm(&stages.run, self.config.press.material_web_width_mm);
        let material = cost::material_cost_per_area(area, price_per_sqm);

        Ok(CostAggregator::new(self.config.print.clone()).aggregate(input, &stages, material))
    }
}

/// 按材料计价方式选择策略
pub fn strategy_for<'a>(
    pricing: &MaterialPricing,
    config: &'a QuoteConfig,
) -> Box<dyn PricingStrategy + 'a> {
    match pricing.mode() {
        PricingMode::PerKg => Box::new(RollWasteStrategy::new(config)),
        PricingMode::PerArea => Box::new(AreaPriceStrategy::new(config)),
    }
}

fn mode_mismatch(expected: PricingMode, actual: PricingMode) -> QuoteError {
    QuoteError::InvalidInput(format!(
        "计价方式不匹配: 策略={}, 材料={}",
        expected, actual
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::{Accessories, MaterialSpec, SpecialProcess};
    use crate::domain::types::BagType;

    fn input(material: MaterialSpec) -> QuoteInput {
        QuoteInput {
            bag_type: BagType::ThreeSideSeal,
            width_mm: 100.0,
            height_mm: 150.0,
            gusset_mm: 0.0,
            seal_back_mm: 10.0,
            side_expand_mm: 0.0,
            material,
            quantity: 1000,
            sku_count: 1,
            tax_rate: 0.13,
            accessories: Accessories::default(),
            special: SpecialProcess::default(),
        }
    }

    #[test]
    fn test_strategy_selected_by_pricing_mode() {
        let config = QuoteConfig::default();
        let per_kg = MaterialPricing::PerKg { price_per_kg: 10.0 };
        let per_area = MaterialPricing::PerArea { price_per_sqm: 0.5 };
        assert_eq!(strategy_for(&per_kg, &config).mode(), PricingMode::PerKg);
        assert_eq!(strategy_for(&per_area, &config).mode(), PricingMode::PerArea);
    }

    #[test]
    fn test_strategies_share_non_material_lines() {
        let config = QuoteConfig::default();
        let kg = RollWasteStrategy::new(&config)
            .compute_cost(&input(MaterialSpec::per_kg("PE", 100.0, 1.0, 10.0)))
            .unwrap();
        let area = AreaPriceStrategy::new(&config)
            .compute_cost(&input(MaterialSpec::per_area("PE", 100.0, 1.0, 0.5)))
            .unwrap();

        assert_eq!(kg.print, area.print);
        assert_eq!(kg.bag_forming, area.bag_forming);
        assert_eq!(kg.material.area_sqm, area.material.area_sqm);
        assert!((area.material.cost - area.material.area_sqm * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mode_mismatch_rejected() {
        let config = QuoteConfig::default();
        let err = RollWasteStrategy::new(&config)
            .compute_cost(&input(MaterialSpec::per_area("PE", 100.0, 1.0, 0.5)))
            .unwrap_err();
        assert_eq!(err.kind(), "INVALID_INPUT");
    }
}
