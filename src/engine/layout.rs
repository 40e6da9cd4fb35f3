// ==========================================
// 软包装报价系统 - 展开尺寸引擎
// ==========================================
// 阶段1: 标称尺寸 + 袋型 → 单个制袋单元的展开尺寸
// 输入: W / H / G / SealBack / SideExpand（mm）
// 输出: L_exp（走纸方向）, W_exp（横向）
// ==========================================
// 每种袋型一组仿射公式,按袋型查表,互不影响
// ==========================================

use crate::domain::breakdown::ExpandedUnit;
use crate::domain::quote::QuoteInput;
use crate::domain::types::BagType;
use crate::engine::error::{EngineResult, QuoteError};
use tracing::debug;

/// 标称尺寸（mm）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalDims {
    pub width: f64,
    pub height: f64,
    pub gusset: f64,
    pub seal_back: f64,
    pub side_expand: f64,
}

impl From<&QuoteInput> for NominalDims {
    fn from(input: &QuoteInput) -> Self {
        Self {
            width: input.width_mm,
            height: input.height_mm,
            gusset: input.gusset_mm,
            seal_back: input.seal_back_mm,
            side_expand: input.side_expand_mm,
        }
    }
}

/// 单个袋型的展开公式
pub struct ExpansionFormula {
    pub length: fn(&NominalDims) -> f64,
    pub width: fn(&NominalDims) -> f64,

    /// 公式文本（用于说明）
    pub length_expr: &'static str,
    pub width_expr: &'static str,
}

// ==========================================
// 公式表
// ==========================================

fn len_two_h_40(d: &NominalDims) -> f64 {
    d.height * 2.0 + 40.0
}

fn len_two_hg_40(d: &NominalDims) -> f64 {
    (d.height + d.gusset) * 2.0 + 40.0
}

fn len_two_ws_20(d: &NominalDims) -> f64 {
    (d.width + d.seal_back) * 2.0 + 20.0
}

fn len_two_wse_40(d: &NominalDims) -> f64 {
    (d.width + d.seal_back + d.side_expand) * 2.0 + 40.0
}

fn len_two_hg_60(d: &NominalDims) -> f64 {
    (d.height + d.gusset) * 2.0 + 60.0
}

fn wid_w_5(d: &NominalDims) -> f64 {
    d.width + 5.0
}

fn wid_h_3(d: &NominalDims) -> f64 {
    d.height + 3.0
}

fn wid_w_1_6(d: &NominalDims) -> f64 {
    d.width + 0.6 * d.width
}

fn wid_shaped(d: &NominalDims) -> f64 {
    (d.width + 5.0) * 1.08
}

static THREE_SIDE_SEAL: ExpansionFormula = ExpansionFormula {
    length: len_two_h_40,
    width: wid_w_5,
    length_expr: "2H + 40",
    width_expr: "W + 5",
};

static STAND_UP: ExpansionFormula = ExpansionFormula {
    length: len_two_hg_40,
    width: wid_w_5,
    length_expr: "2(H + G) + 40",
    width_expr: "W + 5",
};

static CENTER_SEAL: ExpansionFormula = ExpansionFormula {
    length: len_two_ws_20,
    width: wid_h_3,
    length_expr: "2(W + SealBack) + 20",
    width_expr: "H + 3",
};

static GUSSET: ExpansionFormula = ExpansionFormula {
    length: len_two_wse_40,
    width: wid_h_3,
    length_expr: "2(W + SealBack + SideExpand) + 40",
    width_expr: "H + 3",
};

static EIGHT_SIDE_SEAL: ExpansionFormula = ExpansionFormula {
    length: len_two_hg_60,
    width: wid_w_1_6,
    length_expr: "2(H + G) + 60",
    width_expr: "W + 0.6W",
};

static SHAPED_BAG: ExpansionFormula = ExpansionFormula {
    length: len_two_h_40,
    width: wid_shaped,
    length_expr: "2H + 40",
    width_expr: "1.08(W + 5)",
};

/// 按袋型查展开公式
pub fn formula_for(bag_type: BagType) -> &'static ExpansionFormula {
    match bag_type {
        BagType::ThreeSideSeal => &THREE_SIDE_SEAL,
        BagType::StandUp => &STAND_UP,
        BagType::CenterSeal => &CENTER_SEAL,
        BagType::Gusset => &GUSSET,
        BagType::EightSideSeal => &EIGHT_SIDE_SEAL,
        BagType::ShapedBag => &SHAPED_BAG,
    }
}

// ==========================================
// LayoutExpander - 展开尺寸引擎
// ==========================================
#[derive(Debug, Default)]
pub struct LayoutExpander {
    // 无状态
}

impl LayoutExpander {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算展开尺寸
    ///
    /// # 校验
    /// - W / H 必须 > 0
    /// - G / SealBack / SideExpand 必须 ≥ 0
    /// - 展开结果必须 > 0
    pub fn expand(&self, bag_type: BagType, dims: &NominalDims) -> EngineResult<ExpandedUnit> {
        Self::validate_nominal(dims)?;

        let formula = formula_for(bag_type);
        let unit = ExpandedUnit {
            length_mm: (formula.length)(dims),
            width_mm: (formula.width)(dims),
        };

        if !(unit.length_mm.is_finite() && unit.length_mm > 0.0) {
            return Err(QuoteError::geometry("L_exp", unit.length_mm, "展开长度必须大于0"));
        }
        if !(unit.width_mm.is_finite() && unit.width_mm > 0.0) {
            return Err(QuoteError::geometry("W_exp", unit.width_mm, "展开宽度必须大于0"));
        }

        debug!(
            bag_type = %bag_type,
            l_exp = unit.length_mm,
            w_exp = unit.width_mm,
            "展开尺寸"
        );
        Ok(unit)
    }

    fn validate_nominal(dims: &NominalDims) -> EngineResult<()> {
        for (field, value) in [("W", dims.width), ("H", dims.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(QuoteError::geometry(field, value, "标称尺寸必须大于0"));
            }
        }
        for (field, value) in [
            ("G", dims.gusset),
            ("SealBack", dims.seal_back),
            ("SideExpand", dims.side_expand),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::geometry(field, value, "不能为负数"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, height: f64, gusset: f64, seal_back: f64, side_expand: f64) -> NominalDims {
        NominalDims {
            width,
            height,
            gusset,
            seal_back,
            side_expand,
        }
    }

    #[test]
    fn test_expand_every_bag_type() {
        let expander = LayoutExpander::new();
        let d = dims(100.0, 150.0, 30.0, 10.0, 20.0);

        let cases = [
            (BagType::ThreeSideSeal, 340.0, 105.0),
            (BagType::StandUp, 400.0, 105.0),
            (BagType::CenterSeal, 240.0, 153.0),
            (BagType::Gusset, 300.0, 153.0),
            (BagType::EightSideSeal, 420.0, 160.0),
            (BagType::ShapedBag, 340.0, 113.4),
        ];

        for (bag_type, l_exp, w_exp) in cases {
            let unit = expander.expand(bag_type, &d).unwrap();
            assert!((unit.length_mm - l_exp).abs() < 1e-9, "{} L_exp", bag_type);
            assert!((unit.width_mm - w_exp).abs() < 1e-9, "{} W_exp", bag_type);
        }
    }

    #[test]
    fn test_zero_width_is_invalid_geometry() {
        let err = LayoutExpander::new()
            .expand(BagType::ThreeSideSeal, &dims(0.0, 150.0, 0.0, 0.0, 0.0))
            .unwrap_err();
        assert_eq!(err.kind(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_negative_gusset_is_invalid_geometry() {
        let err = LayoutExpander::new()
            .expand(BagType::StandUp, &dims(100.0, 150.0, -5.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidGeometry { ref field, .. } if field == "G"));
    }

    #[test]
    fn test_formula_text_per_type() {
        assert_eq!(formula_for(BagType::Gusset).length_expr, "2(W + SealBack + SideExpand) + 40");
        assert_eq!(formula_for(BagType::ShapedBag).width_expr, "1.08(W + 5)");
    }
}
