// ==========================================
// 软包装报价系统 - 前三阶段流水线
// ==========================================
// 输入校验 → 展开尺寸 → 排版 → 正单与损耗
// 两种计价策略共用
// ==========================================

use crate::config::quote_config::QuoteConfig;
use crate::domain::quote::{MaterialPricing, QuoteInput};
use crate::engine::cost::StageOutputs;
use crate::engine::error::{EngineResult, QuoteError};
use crate::engine::layout::{LayoutExpander, NominalDims};
use crate::engine::production::ProductionCalculator;
use crate::engine::roll_layout::RollLayoutOptimizer;

/// 输入校验
///
/// # 顺序
/// 1. 数量 Q > 0、款数 SUK ≥ 1（先于任何成本计算）
/// 2. 税率 ≥ 0
/// 3. 材料厚度/密度/单价为非负有限数
///
/// 尺寸校验在展开阶段完成
pub fn validate_input(input: &QuoteInput) -> EngineResult<()> {
    if input.quantity == 0 {
        return Err(QuoteError::InvalidQuantity("数量Q必须大于0".to_string()));
    }
    if input.sku_count < 1 {
        return Err(QuoteError::InvalidQuantity("款数SUK必须≥1".to_string()));
    }

    if !input.tax_rate.is_finite() || input.tax_rate < 0.0 {
        return Err(QuoteError::InvalidInput(format!(
            "税率不能为负数: {}",
            input.tax_rate
        )));
    }

    let material = &input.material;
    let price = match material.pricing {
        MaterialPricing::PerKg { price_per_kg } => ("price_per_kg", price_per_kg),
        MaterialPricing::PerArea { price_per_sqm } => ("price_per_sqm", price_per_sqm),
    };
    for (field, value) in [
        ("thickness_um", material.thickness_um),
        ("density", material.density),
        price,
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "材料参数无效: {}={}",
                field, value
            )));
        }
    }

    Ok(())
}

/// 执行阶段1~3
pub fn run_stages(input: &QuoteInput, config: &QuoteConfig) -> EngineResult<StageOutputs> {
    validate_input(input)?;

    let expanded = LayoutExpander::new().expand(input.bag_type, &NominalDims::from(input))?;
    let layout = RollLayoutOptimizer::new(config.press).pack(&expanded)?;
    let run = ProductionCalculator::new(config.press).compute(
        input.quantity,
        input.sku_count,
        &layout,
        &expanded,
    );

    Ok(StageOutputs {
        expanded,
        layout,
        run,
    })
}
