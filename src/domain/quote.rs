// ==========================================
// 软包装报价系统 - 报价输入
// ==========================================
// 职责: 定义报价引擎的输入值对象
// 红线: 输入只读,引擎不持有引用
// ==========================================

use crate::domain::types::{BagType, PricingMode, TinTieBand};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ==========================================
// MaterialPricing - 材料计价方式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum MaterialPricing {
    /// 按重量计价（元/kg）
    PerKg { price_per_kg: f64 },
    /// 按面积计价（元/㎡）
    PerArea { price_per_sqm: f64 },
}

impl MaterialPricing {
    pub fn mode(&self) -> PricingMode {
        match self {
            MaterialPricing::PerKg { .. } => PricingMode::PerKg,
            MaterialPricing::PerArea { .. } => PricingMode::PerArea,
        }
    }

    fn unit_price(&self) -> f64 {
        match self {
            MaterialPricing::PerKg { price_per_kg } => *price_per_kg,
            MaterialPricing::PerArea { price_per_sqm } => *price_per_sqm,
        }
    }
}

// ==========================================
// MaterialSpec - 材料描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialSpec {
    /// 材料结构名称（如 "PET-12μm/PE-90μm"）
    pub name: String,

    /// 总厚度（μm）
    pub thickness_um: f64,

    /// 密度（g/cm³）
    pub density: f64,

    /// 计价方式
    pub pricing: MaterialPricing,
}

impl MaterialSpec {
    /// 按重量计价的材料
    pub fn per_kg(name: &str, thickness_um: f64, density: f64, price_per_kg: f64) -> Self {
        Self {
            name: name.to_string(),
            thickness_um,
            density,
            pricing: MaterialPricing::PerKg { price_per_kg },
        }
    }

    /// 按面积计价的材料
    pub fn per_area(name: &str, thickness_um: f64, density: f64, price_per_sqm: f64) -> Self {
        Self {
            name: name.to_string(),
            thickness_um,
            density,
            pricing: MaterialPricing::PerArea { price_per_sqm },
        }
    }
}

// ==========================================
// Accessories - 配件选择
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Accessories {
    #[serde(alias = "普通拉链")]
    pub zipper: bool,

    #[serde(alias = "易撕拉链")]
    pub tear_zipper: bool,

    #[serde(alias = "气阀")]
    pub valve: bool,

    #[serde(alias = "吸嘴")]
    pub spout: bool,

    #[serde(alias = "手挽")]
    pub handle: bool,

    #[serde(alias = "锡条")]
    pub tin_tie: Option<TinTieBand>,
}

// ==========================================
// SpecialProcess - 特殊工艺选择
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecialProcess {
    #[serde(alias = "条型窗")]
    pub striped_window: bool,

    #[serde(alias = "局部UV")]
    pub spot_uv: bool,

    #[serde(alias = "异形袋工艺")]
    pub shaped_tooling: bool,

    /// 模具费大于5000（仅标记,不计价）
    #[serde(alias = "模具费大于5000")]
    pub high_mold_cost: bool,
}

// ==========================================
// QuoteInput - 报价输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteInput {
    #[serde(alias = "bagType")]
    pub bag_type: BagType,

    /// 袋宽 W（mm）
    #[serde(alias = "W")]
    pub width_mm: f64,

    /// 袋高 H（mm）
    #[serde(alias = "H")]
    pub height_mm: f64,

    /// 底插 G（mm）
    #[serde(default, alias = "G")]
    pub gusset_mm: f64,

    /// 封边/背封 SealBack（mm）
    #[serde(default, alias = "SealBack")]
    pub seal_back_mm: f64,

    /// 侧展 SideExpand（mm）
    #[serde(default, alias = "SideExpand")]
    pub side_expand_mm: f64,

    pub material: MaterialSpec,

    /// 订单数量 Q（个）
    #[serde(alias = "Q")]
    pub quantity: u64,

    /// 款数 SUK
    #[serde(default = "default_sku_count", alias = "SUK")]
    pub sku_count: u32,

    /// 税率（小数,如 0.13）
    #[serde(alias = "taxRate")]
    pub tax_rate: f64,

    #[serde(default)]
    pub accessories: Accessories,

    #[serde(default)]
    pub special: SpecialProcess,
}

fn default_sku_count() -> u32 {
    1
}

impl QuoteInput {
    /// 结构化指纹,供调用方做报价缓存
    ///
    /// 相同输入 → 相同指纹（浮点按位参与哈希）
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.bag_type.hash(&mut hasher);
        for v in [
            self.width_mm,
            self.height_mm,
            self.gusset_mm,
            self.seal_back_mm,
            self.side_expand_mm,
            self.material.thickness_um,
            self.material.density,
            self.material.pricing.unit_price(),
            self.tax_rate,
        ] {
            v.to_bits().hash(&mut hasher);
        }
        self.material.name.hash(&mut hasher);
        self.material.pricing.mode().hash(&mut hasher);
        self.quantity.hash(&mut hasher);
        self.sku_count.hash(&mut hasher);
        self.accessories.hash(&mut hasher);
        self.special.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_form_style_keys() {
        let raw = r#"{
            "bagType": "三边封",
            "W": 100, "H": 150, "G": 0, "SealBack": 10,
            "material": {"name": "PE", "thickness_um": 100, "density": 1.0,
                         "pricing": {"mode": "per_kg", "price_per_kg": 10}},
            "Q": 1000, "SUK": 1, "taxRate": 0.13,
            "accessories": {"普通拉链": true, "锡条": "≤140"}
        }"#;
        let input: QuoteInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.bag_type, BagType::ThreeSideSeal);
        assert_eq!(input.side_expand_mm, 0.0);
        assert!(input.accessories.zipper);
        assert_eq!(input.accessories.tin_tie, Some(TinTieBand::UpTo140));
        assert!(!input.special.spot_uv);
    }

    #[test]
    fn test_unknown_accessory_flag_rejected() {
        let raw = r#"{"zipper": true, "laser_perforation": true}"#;
        assert!(serde_json::from_str::<Accessories>(raw).is_err());
    }

    #[test]
    fn test_unknown_pricing_field_rejected() {
        let raw = r#"{"mode": "per_kg", "price_per_kg": 10, "discount": 0.5}"#;
        assert!(serde_json::from_str::<MaterialPricing>(raw).is_err());

        let raw = r#"{"mode": "per_area", "price_per_sqm": 0.8, "price_per_kg": 10}"#;
        assert!(serde_json::from_str::<MaterialPricing>(raw).is_err());

        let raw = r#"{"mode": "per_kg", "price_per_kg": 10}"#;
        assert_eq!(
            serde_json::from_str::<MaterialPricing>(raw).unwrap(),
            MaterialPricing::PerKg { price_per_kg: 10.0 }
        );
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let raw = r#"{
            "bag_type": "stand_up", "width_mm": 120, "height_mm": 180,
            "material": {"name": "PE", "thickness_um": 80, "density": 0.92,
                         "pricing": {"mode": "per_area", "price_per_sqm": 0.8}},
            "quantity": 5000, "tax_rate": 0.13
        }"#;
        let a: QuoteInput = serde_json::from_str(raw).unwrap();
        let mut b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.quantity += 1;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
