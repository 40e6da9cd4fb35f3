// ==========================================
// 软包装报价系统 - 报价引擎入口
// ==========================================
// 流程: 选择计价策略 → 成本明细 → 单价/含税价 → 文字说明
// 红线: 纯函数,无 IO,无全局状态; 相同输入 + 相同配置 → 相同结果
// ==========================================

use crate::config::quote_config::QuoteConfig;
use crate::domain::breakdown::QuoteResult;
use crate::domain::quote::QuoteInput;
use crate::engine::error::EngineResult;
use crate::engine::explain::{ExplanationBuilder, PriceSummary};
use crate::engine::pricing::strategy_for;
use tracing::{debug, instrument};

// ==========================================
// QuoteEngine - 报价引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// 计算报价
    ///
    /// # 返回
    /// - Ok(QuoteResult): 成本明细 + 单价 + 含税价 + 说明
    /// - Err(QuoteError): 输入无效或排版不可行,不产生部分结果
    #[instrument(skip(self, input), fields(bag_type = %input.bag_type, quantity = input.quantity))]
    pub fn quote(&self, input: &QuoteInput) -> EngineResult<QuoteResult> {
        let strategy = strategy_for(&input.material.pricing, &self.config);
        let breakdown = strategy.compute_cost(input)?;

        let quantity = input.quantity as f64;
        let unit_price = breakdown.total / quantity;
        let unit_price_cny = unit_price * (1.0 + input.tax_rate);

        let sku_multiplied = self.config.sku_multiplies_total;
        let mut total_price_cny = unit_price_cny * quantity;
        if sku_multiplied {
            total_price_cny *= input.sku_count as f64;
        }

        debug!(
            mode = %strategy.mode(),
            total = breakdown.total,
            unit_price,
            unit_price_cny,
            total_price_cny,
            "报价完成"
        );

        let prices = PriceSummary {
            unit_price,
            unit_price_cny,
            total_price_cny,
            sku_multiplied,
        };
        let explain = ExplanationBuilder::new(&self.config.locale).build(input, &breakdown, &prices);

        Ok(QuoteResult {
            quantity: input.quantity,
            sku_count: input.sku_count,
            tax_rate: input.tax_rate,
            unit_price,
            unit_price_cny,
            total_price_cny,
            sku_multiplied,
            breakdown,
            explain,
        })
    }
}

/// 使用默认配置计算报价
pub fn quote(input: &QuoteInput) -> EngineResult<QuoteResult> {
    QuoteEngine::default().quote(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breakdown::CostComponent;
    use crate::domain::quote::{Accessories, MaterialSpec, SpecialProcess};
    use crate::domain::types::BagType;

    fn scenario() -> QuoteInput {
        QuoteInput {
            bag_type: BagType::ThreeSideSeal,
            width_mm: 100.0,
            height_mm: 150.0,
            gusset_mm: 0.0,
            seal_back_mm: 10.0,
            side_expand_mm: 0.0,
            material: MaterialSpec::per_kg("PE-100μm", 100.0, 1.0, 10.0),
            quantity: 1000,
            sku_count: 1,
            tax_rate: 0.13,
            accessories: Accessories::default(),
            special: SpecialProcess::default(),
        }
    }

    #[test]
    fn test_scenario_totals() {
        let result = quote(&scenario()).unwrap();
        assert!((result.breakdown.total - 1120.148428).abs() < 1e-6);
        assert!((result.unit_price - 1.120148428).abs() < 1e-9);
        assert!((result.unit_price_cny - 1.26576772).abs() < 1e-8);
        assert!((result.total_price_cny - 1265.76772).abs() < 1e-5);
        assert!(!result.sku_multiplied);
    }

    #[test]
    fn test_explanations_in_fixed_order() {
        let result = quote(&scenario()).unwrap();
        let components: Vec<CostComponent> = result.explain.iter().map(|e| e.component).collect();
        assert_eq!(
            components,
            vec![
                CostComponent::Material,
                CostComponent::Print,
                CostComponent::BagForming,
                CostComponent::Accessories,
                CostComponent::Special,
                CostComponent::Summary,
            ]
        );
        assert_eq!(result.explain[0].title, "材料成本");
    }

    #[test]
    fn test_sku_toggle_multiplies_total() {
        let mut input = scenario();
        input.sku_count = 3;

        let plain = quote(&input).unwrap();
        let config = QuoteConfig {
            sku_multiplies_total: true,
            ..QuoteConfig::default()
        };
        let multiplied = QuoteEngine::new(config).quote(&input).unwrap();

        assert!((plain.unit_price_cny - multiplied.unit_price_cny).abs() < 1e-12);
        assert!((multiplied.total_price_cny - plain.total_price_cny * 3.0).abs() < 1e-6);
        assert!(multiplied.sku_multiplied);
    }

    #[test]
    fn test_zero_quantity_rejected_before_costing() {
        let mut input = scenario();
        input.quantity = 0;
        input.width_mm = -1.0;
        let err = quote(&input).unwrap_err();
        assert_eq!(err.kind(), "INVALID_QUANTITY");
    }
}
