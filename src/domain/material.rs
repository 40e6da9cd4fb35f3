// ==========================================
// 软包装报价系统 - 材料库实体
// ==========================================
// 材料库为外部参考数据,引擎只接收合成后的 MaterialSpec
// ==========================================

use crate::domain::types::MaterialKind;
use serde::{Deserialize, Serialize};

/// 材料库条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialOption {
    /// 材料名称（唯一键,如 "PET-12μm"）
    pub name: String,

    pub kind: MaterialKind,

    /// 厚度（μm）
    pub thickness_um: f64,

    /// 密度（g/cm³）
    pub density: f64,

    /// 单价（元/kg）
    pub price_per_kg: f64,
}

impl MaterialOption {
    pub fn new(
        name: &str,
        kind: MaterialKind,
        thickness_um: f64,
        density: f64,
        price_per_kg: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            thickness_um,
            density,
            price_per_kg,
        }
    }
}

/// 复合结构中的一层
///
/// `material_key` 为空表示自定义层,此时三项覆写值必须齐全
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialLayer {
    pub material_key: String,
    pub thickness_um: Option<f64>,
    pub density: Option<f64>,
    pub price_per_kg: Option<f64>,
}

impl MaterialLayer {
    pub fn from_catalog(key: &str) -> Self {
        Self {
            material_key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn custom(thickness_um: f64, density: f64, price_per_kg: f64) -> Self {
        Self {
            material_key: String::new(),
            thickness_um: Some(thickness_um),
            density: Some(density),
            price_per_kg: Some(price_per_kg),
        }
    }
}

/// 复合材料合成结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeMaterial {
    /// 结构名称（各层以 "/" 连接）
    pub name: String,

    /// 总厚度（μm）
    pub total_thickness_um: f64,

    /// 按厚度加权的平均密度
    pub avg_density: f64,

    /// 每平米材料成本（元/㎡）
    pub cost_per_sqm: f64,

    /// 折算单价（元/kg）
    pub price_per_kg: f64,
}
