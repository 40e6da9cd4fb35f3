// ==========================================
// 软包装报价系统 - 领域类型定义
// ==========================================
// 袋型 / 锡条长度档 / 材料类别 / 计价模式
// 序列化格式: snake_case,兼容表单中文取值
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 袋型 (Bag Type)
// ==========================================
// 决定展开公式、制袋系数与保底费
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BagType {
    #[serde(alias = "三边封")]
    ThreeSideSeal, // 三边封
    #[serde(alias = "自立袋")]
    StandUp, // 自立袋
    #[serde(alias = "中封袋")]
    CenterSeal, // 中封袋
    #[serde(alias = "风琴袋")]
    Gusset, // 风琴袋
    #[serde(alias = "八边封")]
    EightSideSeal, // 八边封
    #[serde(alias = "异形袋")]
    ShapedBag, // 异形袋
}

impl BagType {
    pub const ALL: [BagType; 6] = [
        BagType::ThreeSideSeal,
        BagType::StandUp,
        BagType::CenterSeal,
        BagType::Gusset,
        BagType::EightSideSeal,
        BagType::ShapedBag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BagType::ThreeSideSeal => "three_side_seal",
            BagType::StandUp => "stand_up",
            BagType::CenterSeal => "center_seal",
            BagType::Gusset => "gusset",
            BagType::EightSideSeal => "eight_side_seal",
            BagType::ShapedBag => "shaped_bag",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            BagType::ThreeSideSeal => "三边封",
            BagType::StandUp => "自立袋",
            BagType::CenterSeal => "中封袋",
            BagType::Gusset => "风琴袋",
            BagType::EightSideSeal => "八边封",
            BagType::ShapedBag => "异形袋",
        }
    }
}

impl fmt::Display for BagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BagType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        BagType::ALL
            .iter()
            .copied()
            .find(|t| {
                t.title_cn() == trimmed
                    || t.as_str() == trimmed.to_lowercase().replace('-', "_")
            })
            .ok_or_else(|| format!("未知袋型: {}", trimmed))
    }
}

// ==========================================
// 锡条长度档 (Tin-tie Band)
// ==========================================
// 互斥,至多选择一档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TinTieBand {
    #[serde(rename = "≤140", alias = "up_to_140")]
    UpTo140,
    #[serde(rename = "140-200", alias = "140_200")]
    From140To200,
    #[serde(rename = "200-250", alias = "200_250")]
    From200To250,
    #[serde(rename = ">250", alias = "over_250")]
    Over250,
}

impl TinTieBand {
    /// 每个袋子的锡条单价（元）
    pub fn unit_price(&self) -> f64 {
        match self {
            TinTieBand::UpTo140 => 0.5,
            TinTieBand::From140To200 => 0.6,
            TinTieBand::From200To250 => 0.7,
            TinTieBand::Over250 => 0.8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TinTieBand::UpTo140 => "≤140",
            TinTieBand::From140To200 => "140-200",
            TinTieBand::From200To250 => "200-250",
            TinTieBand::Over250 => ">250",
        }
    }
}

impl fmt::Display for TinTieBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 材料类别 (Material Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Plastic, // 薄膜
    Paper,   // 纸类
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plastic" | "薄膜" | "塑料" => Ok(MaterialKind::Plastic),
            "paper" | "纸" | "纸类" => Ok(MaterialKind::Paper),
            other => Err(format!("未知材料类别: {}", other)),
        }
    }
}

// ==========================================
// 计价模式 (Pricing Mode)
// ==========================================
// per_kg: 卷材排版 + 损耗 + 按重量计价
// per_area: 同一排版/损耗模型,材料按面积单价计价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    PerKg,
    PerArea,
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingMode::PerKg => write!(f, "per_kg"),
            PricingMode::PerArea => write!(f, "per_area"),
        }
    }
}
