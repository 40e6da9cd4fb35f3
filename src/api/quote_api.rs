// ==========================================
// 软包装报价系统 - 报价 API
// ==========================================
// 职责: 请求解析 → 材料解析（显式/材料库合成）→ 调用引擎 → 响应
// 红线: 材料库只在本层使用,引擎只看到 MaterialSpec
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::api::error::ApiResult;
use crate::catalog::material_catalog::MaterialCatalog;
use crate::config::quote_config::QuoteConfig;
use crate::domain::breakdown::{CostBreakdown, QuoteResult};
use crate::domain::material::MaterialLayer;
use crate::domain::quote::{Accessories, MaterialSpec, QuoteInput, SpecialProcess};
use crate::domain::types::BagType;
use crate::engine::error::{EngineResult, QuoteError};
use crate::engine::quote_engine::QuoteEngine;

// ==========================================
// MaterialRequest - 材料来源
// ==========================================
/// 三选一:
/// - `{"spec": {...}}` 直接给出材料参数,单价单位随 `pricing.mode`
/// - `{"layers": [...]}` 由材料库合成,按重量计价（元/kg）
/// - `{"layers_per_area": [...]}` 由材料库合成,按面积计价（元/㎡,Σ 单价×密度×厚度/1000）
///
/// 两种计价口径互不换算: 同一叠层下按面积的材料成本是按重量的 1000 倍。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialRequest {
    Spec(MaterialSpec),
    Layers(Vec<MaterialLayer>),
    LayersPerArea(Vec<MaterialLayer>),
}

// ==========================================
// QuoteRequest - 报价请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteRequest {
    #[serde(alias = "bagType")]
    pub bag_type: BagType,

    #[serde(alias = "W")]
    pub width_mm: f64,

    #[serde(alias = "H")]
    pub height_mm: f64,

    #[serde(default, alias = "G")]
    pub gusset_mm: f64,

    #[serde(default, alias = "SealBack")]
    pub seal_back_mm: f64,

    #[serde(default, alias = "SideExpand")]
    pub side_expand_mm: f64,

    pub material: MaterialRequest,

    /// 有符号接收,负数归入数量错误而非解析错误
    #[serde(alias = "Q")]
    pub quantity: i64,

    #[serde(default = "default_sku_count", alias = "SUK")]
    pub sku_count: i64,

    #[serde(alias = "taxRate")]
    pub tax_rate: f64,

    #[serde(default)]
    pub accessories: Accessories,

    #[serde(default)]
    pub special: SpecialProcess,
}

fn default_sku_count() -> i64 {
    1
}

impl QuoteRequest {
    /// 校验 Q / SUK 并转为引擎使用的无符号数量
    pub fn counts(&self) -> EngineResult<(u64, u32)> {
        let quantity = u64::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| QuoteError::InvalidQuantity(format!("数量Q必须大于0: {}", self.quantity)))?;
        let sku_count = u32::try_from(self.sku_count)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| QuoteError::InvalidQuantity(format!("款数SUK必须≥1: {}", self.sku_count)))?;
        Ok((quantity, sku_count))
    }

    /// 组装引擎输入
    pub fn into_input(self, material: MaterialSpec) -> EngineResult<QuoteInput> {
        let (quantity, sku_count) = self.counts()?;
        Ok(QuoteInput {
            bag_type: self.bag_type,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            gusset_mm: self.gusset_mm,
            seal_back_mm: self.seal_back_mm,
            side_expand_mm: self.side_expand_mm,
            material,
            quantity,
            sku_count,
            tax_rate: self.tax_rate,
            accessories: self.accessories,
            special: self.special,
        })
    }
}

// ==========================================
// QuoteResponse - 报价响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainEntry {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quantity: u64,
    pub sku_count: u32,
    pub unit_price: f64,
    pub unit_price_cny: f64,
    pub total_price_cny: f64,

    /// 实际参与计价的材料
    pub material: MaterialSpec,

    pub breakdown: CostBreakdown,
    pub explain: Vec<ExplainEntry>,
}

impl QuoteResponse {
    fn from_result(result: QuoteResult, material: MaterialSpec) -> Self {
        Self {
            quantity: result.quantity,
            sku_count: result.sku_count,
            unit_price: result.unit_price,
            unit_price_cny: result.unit_price_cny,
            total_price_cny: result.total_price_cny,
            material,
            breakdown: result.breakdown,
            explain: result
                .explain
                .into_iter()
                .map(|e| ExplainEntry {
                    title: e.title,
                    text: e.text,
                })
                .collect(),
        }
    }
}

// ==========================================
// QuoteApi - 报价 API
// ==========================================
pub struct QuoteApi {
    engine: QuoteEngine,
    catalog: MaterialCatalog,
}

impl QuoteApi {
    pub fn new(config: QuoteConfig, catalog: MaterialCatalog) -> Self {
        Self {
            engine: QuoteEngine::new(config),
            catalog,
        }
    }

    /// 默认配置 + 内置材料表
    pub fn with_defaults() -> Self {
        Self::new(QuoteConfig::default(), MaterialCatalog::builtin())
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &QuoteConfig {
        self.engine.config()
    }

    /// 解析材料来源
    pub fn resolve_material(&self, material: &MaterialRequest) -> ApiResult<MaterialSpec> {
        let spec = match material {
            MaterialRequest::Spec(spec) => spec.clone(),
            MaterialRequest::Layers(layers) => self.catalog.compose_per_kg(layers)?,
            MaterialRequest::LayersPerArea(layers) => self.catalog.compose_per_area(layers)?,
        };
        Ok(spec)
    }

    /// 计算报价
    #[instrument(skip(self, request), fields(bag_type = %request.bag_type, quantity = request.quantity))]
    pub fn quote(&self, request: &QuoteRequest) -> ApiResult<QuoteResponse> {
        // 数量先于材料校验
        request.counts()?;

        let material = self.resolve_material(&request.material)?;
        debug!(material = %material.name, mode = %material.pricing.mode(), "材料已解析");

        let input = request.clone().into_input(material.clone())?;
        let result = self.engine.quote(&input)?;

        Ok(QuoteResponse::from_result(result, material))
    }

    /// 从 JSON 文本计算报价
    pub fn quote_json(&self, json: &str) -> ApiResult<QuoteResponse> {
        let request: QuoteRequest = serde_json::from_str(json)?;
        self.quote(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "bag_type": "three_side_seal",
        "width_mm": 100, "height_mm": 150, "seal_back_mm": 10,
        "material": {"spec": {"name": "PE", "thickness_um": 100, "density": 1.0,
                              "pricing": {"mode": "per_kg", "price_per_kg": 10}}},
        "quantity": 1000, "tax_rate": 0.13
    }"#;

    #[test]
    fn test_quote_json_scenario() {
        let response = QuoteApi::with_defaults().quote_json(SCENARIO).unwrap();
        assert!((response.total_price_cny - 1265.76772).abs() < 1e-5);
        assert_eq!(response.sku_count, 1);
        assert_eq!(response.explain.len(), 6);
    }

    #[test]
    fn test_material_request_from_layers() {
        let json = r#"{"layers": [{"material_key": "PET-12μm"}, {"material_key": "PE-90μm"}]}"#;
        let material: MaterialRequest = serde_json::from_str(json).unwrap();
        let spec = QuoteApi::with_defaults().resolve_material(&material).unwrap();
        assert_eq!(spec.name, "PET-12μm/PE-90μm");
        assert!((spec.thickness_um - 102.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = SCENARIO.replace("\"quantity\"", "\"glitter\": true, \"quantity\"");
        let err = QuoteApi::with_defaults().quote_json(&json).unwrap_err();
        assert_eq!(err.kind(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_counts_are_quantity_errors() {
        let json = SCENARIO.replace("\"quantity\": 1000", "\"quantity\": -5");
        let err = QuoteApi::with_defaults().quote_json(&json).unwrap_err();
        assert_eq!(err.kind(), "INVALID_QUANTITY");
        assert_eq!(err.exit_code(), 4);

        let json = SCENARIO.replace("\"quantity\": 1000", "\"quantity\": 1000, \"SUK\": -1");
        let err = QuoteApi::with_defaults().quote_json(&json).unwrap_err();
        assert_eq!(err.kind(), "INVALID_QUANTITY");

        let json = SCENARIO.replace("\"quantity\": 1000", "\"quantity\": 1000, \"SUK\": 4294967296");
        let err = QuoteApi::with_defaults().quote_json(&json).unwrap_err();
        assert_eq!(err.kind(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_unknown_catalog_key_is_catalog_error() {
        let material = MaterialRequest::Layers(vec![MaterialLayer::from_catalog("XYZ")]);
        let err = QuoteApi::with_defaults().resolve_material(&material).unwrap_err();
        assert_eq!(err.kind(), "CATALOG");
    }
}
