// ==========================================
// 软包装报价系统 - 材料库
// ==========================================
// 职责: 内置材料表 / 文件导入 / 复合结构合成
// 红线: 未知材料键直接报错,不按 0 处理
// ==========================================
// 合成公式（t: μm, d: g/cm³, p: 元/kg）:
//   T          = Σ t_i
//   avgDensity = Σ(d_i·t_i/1000) / (T/1000)
//   costPerSqm = Σ p_i·d_i·t_i/1000
//   pricePerKg = costPerSqm / (avgDensity·T/1000)
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::file_parser::{RawRecord, UniversalFileParser};
use crate::domain::material::{CompositeMaterial, MaterialLayer, MaterialOption};
use crate::domain::quote::MaterialSpec;
use crate::domain::types::MaterialKind;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// 自定义层名称
pub const CUSTOM_LAYER_NAME: &str = "自定义";

/// 内置材料表: (名称, 类别, 厚度μm, 密度, 元/kg)
const BUILTIN_MATERIALS: &[(&str, MaterialKind, f64, f64, f64)] = &[
    ("PET-12μm", MaterialKind::Plastic, 12.0, 1.4, 8.0),
    ("PET-15μm", MaterialKind::Plastic, 15.0, 1.4, 8.2),
    ("VMPET-12μm", MaterialKind::Plastic, 12.0, 1.4, 9.0),
    ("VMPET-15μm", MaterialKind::Plastic, 15.0, 1.4, 9.2),
    ("BOPP-20μm", MaterialKind::Plastic, 20.0, 0.91, 8.5),
    ("BOPP-25μm", MaterialKind::Plastic, 25.0, 0.91, 8.8),
    ("BOPP-30μm", MaterialKind::Plastic, 30.0, 0.91, 9.1),
    ("CPP-25μm", MaterialKind::Plastic, 25.0, 0.91, 9.0),
    ("CPP-30μm", MaterialKind::Plastic, 30.0, 0.91, 9.2),
    ("CPP-40μm", MaterialKind::Plastic, 40.0, 0.91, 9.5),
    ("VMCPP-30μm", MaterialKind::Plastic, 30.0, 0.91, 11.0),
    ("PE-30μm", MaterialKind::Plastic, 30.0, 0.92, 9.2),
    ("PE-40μm", MaterialKind::Plastic, 40.0, 0.92, 9.5),
    ("PE-50μm", MaterialKind::Plastic, 50.0, 0.92, 9.8),
    ("PE-90μm", MaterialKind::Plastic, 90.0, 0.92, 10.16),
    ("BOPA-15μm", MaterialKind::Plastic, 15.0, 1.16, 17.0),
    ("BOPA-20μm", MaterialKind::Plastic, 20.0, 1.16, 17.5),
    // 纸类按克重折算: 密度 × 厚度(10) = 克重
    ("牛皮纸-60g", MaterialKind::Paper, 10.0, 6.0, 7.0),
    ("牛皮纸-80g", MaterialKind::Paper, 10.0, 8.0, 7.2),
    ("白牛皮纸-60g", MaterialKind::Paper, 10.0, 6.0, 8.0),
    ("白牛皮纸-80g", MaterialKind::Paper, 10.0, 8.0, 8.2),
    ("棉纸-19g", MaterialKind::Paper, 10.0, 1.9, 11.0),
];

// ===== 导入表头（含中文别名） =====
const NAME_HEADERS: &[&str] = &["name", "名称", "材料名称"];
const KIND_HEADERS: &[&str] = &["type", "kind", "类别", "类型"];
const THICKNESS_HEADERS: &[&str] = &["thickness_um", "thickness", "厚度"];
const DENSITY_HEADERS: &[&str] = &["density", "密度"];
const PRICE_HEADERS: &[&str] = &["price_per_kg", "price", "单价", "价格"];

// ==========================================
// MaterialCatalog - 材料库
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    entries: Vec<MaterialOption>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// 内置材料表
    pub fn builtin() -> Self {
        let entries = BUILTIN_MATERIALS
            .iter()
            .map(|&(name, kind, thickness, density, price)| {
                MaterialOption::new(name, kind, thickness, density, price)
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<MaterialOption>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// 从 CSV / Excel 文件导入材料表
    ///
    /// 行号从 2 开始计（第 1 行为表头）
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let records = UniversalFileParser.parse(path.as_ref())?;

        let mut entries: Vec<MaterialOption> = Vec::with_capacity(records.len());
        for (i, row) in records.iter().enumerate() {
            let row_number = i + 2;
            let option = map_record(row, row_number)?;
            if entries.iter().any(|e| e.name == option.name) {
                return Err(CatalogError::DuplicateName {
                    row: row_number,
                    name: option.name,
                });
            }
            entries.push(option);
        }

        info!(count = entries.len(), "材料库导入完成");
        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, name: &str) -> Option<&MaterialOption> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// 全部条目（保持导入顺序）
    pub fn list(&self) -> &[MaterialOption] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 合成复合材料
    pub fn compose(&self, layers: &[MaterialLayer]) -> CatalogResult<CompositeMaterial> {
        if layers.is_empty() {
            return Err(CatalogError::EmptyStack);
        }

        let mut names = Vec::with_capacity(layers.len());
        let mut total_thickness = 0.0;
        let mut weight_sum = 0.0; // Σ d·t/1000, 即每平米克重 / 1000
        let mut cost_per_sqm = 0.0;

        for (i, layer) in layers.iter().enumerate() {
            let index = i + 1;
            let (name, t, d, p) = self.resolve_layer(index, layer)?;

            for (field, value) in [("thickness_um", t), ("density", d), ("price_per_kg", p)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidLayer {
                        index,
                        message: format!("{}={} 不能为负数", field, value),
                    });
                }
            }

            names.push(name);
            total_thickness += t;
            weight_sum += d * t / 1000.0;
            cost_per_sqm += p * d * t / 1000.0;
        }

        if total_thickness <= 0.0 || weight_sum <= 0.0 {
            return Err(CatalogError::InvalidLayer {
                index: layers.len(),
                message: "总厚度与克重必须大于0".to_string(),
            });
        }

        let avg_density = weight_sum / (total_thickness / 1000.0);
        let price_per_kg = cost_per_sqm / (avg_density * total_thickness / 1000.0);

        let composite = CompositeMaterial {
            name: names.join("/"),
            total_thickness_um: total_thickness,
            avg_density,
            cost_per_sqm,
            price_per_kg,
        };
        debug!(
            name = %composite.name,
            thickness = composite.total_thickness_um,
            density = composite.avg_density,
            price_per_kg = composite.price_per_kg,
            "复合材料合成"
        );
        Ok(composite)
    }

    /// 合成并转为按重量计价的材料描述
    pub fn compose_per_kg(&self, layers: &[MaterialLayer]) -> CatalogResult<MaterialSpec> {
        let c = self.compose(layers)?;
        Ok(MaterialSpec::per_kg(
            &c.name,
            c.total_thickness_um,
            c.avg_density,
            c.price_per_kg,
        ))
    }

    /// 合成并转为按面积计价的材料描述
    pub fn compose_per_area(&self, layers: &[MaterialLayer]) -> CatalogResult<MaterialSpec> {
        let c = self.compose(layers)?;
        Ok(MaterialSpec::per_area(
            &c.name,
            c.total_thickness_um,
            c.avg_density,
            c.cost_per_sqm,
        ))
    }

    /// 解析单层: 返回 (名称, 厚度, 密度, 单价)
    fn resolve_layer(
        &self,
        index: usize,
        layer: &MaterialLayer,
    ) -> CatalogResult<(String, f64, f64, f64)> {
        if layer.material_key.is_empty() {
            return match (layer.thickness_um, layer.density, layer.price_per_kg) {
                (Some(t), Some(d), Some(p)) => Ok((CUSTOM_LAYER_NAME.to_string(), t, d, p)),
                _ => Err(CatalogError::InvalidLayer {
                    index,
                    message: "自定义层必须同时给出厚度、密度和单价".to_string(),
                }),
            };
        }

        let entry = self
            .get(&layer.material_key)
            .ok_or_else(|| CatalogError::UnknownMaterial(layer.material_key.clone()))?;

        Ok((
            entry.name.clone(),
            layer.thickness_um.unwrap_or(entry.thickness_um),
            layer.density.unwrap_or(entry.density),
            layer.price_per_kg.unwrap_or(entry.price_per_kg),
        ))
    }
}

// ==========================================
// 字段映射
// ==========================================

fn get_field<'a>(row: &'a RawRecord, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
}

fn require_field<'a>(row: &'a RawRecord, aliases: &[&str], row_number: usize) -> CatalogResult<&'a str> {
    get_field(row, aliases).ok_or_else(|| CatalogError::MissingField {
        row: row_number,
        field: aliases[0].to_string(),
    })
}

fn parse_number(row: &RawRecord, aliases: &[&str], row_number: usize) -> CatalogResult<f64> {
    let raw = require_field(row, aliases, row_number)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(CatalogError::InvalidValue {
            row: row_number,
            field: aliases[0].to_string(),
            value: raw.to_string(),
        }),
    }
}

fn map_record(row: &RawRecord, row_number: usize) -> CatalogResult<MaterialOption> {
    let name = require_field(row, NAME_HEADERS, row_number)?;

    // 类别缺省为薄膜
    let kind = match get_field(row, KIND_HEADERS) {
        Some(raw) => raw.parse::<MaterialKind>().map_err(|_| CatalogError::InvalidValue {
            row: row_number,
            field: KIND_HEADERS[0].to_string(),
            value: raw.to_string(),
        })?,
        None => MaterialKind::Plastic,
    };

    Ok(MaterialOption::new(
        name,
        kind,
        parse_number(row, THICKNESS_HEADERS, row_number)?,
        parse_number(row, DENSITY_HEADERS, row_number)?,
        parse_number(row, PRICE_HEADERS, row_number)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_22_entries() {
        let catalog = MaterialCatalog::builtin();
        assert_eq!(catalog.len(), 22);
        assert_eq!(catalog.get("PE-90μm").map(|e| e.price_per_kg), Some(10.16));
        assert_eq!(catalog.get("棉纸-19g").map(|e| e.kind), Some(MaterialKind::Paper));
    }

    #[test]
    fn test_compose_single_layer_keeps_values() {
        let catalog = MaterialCatalog::builtin();
        let c = catalog.compose(&[MaterialLayer::from_catalog("PET-12μm")]).unwrap();
        assert_eq!(c.name, "PET-12μm");
        assert!((c.total_thickness_um - 12.0).abs() < 1e-12);
        assert!((c.avg_density - 1.4).abs() < 1e-12);
        assert!((c.price_per_kg - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_two_layers() {
        let catalog = MaterialCatalog::builtin();
        let c = catalog
            .compose(&[
                MaterialLayer::from_catalog("PET-12μm"),
                MaterialLayer::from_catalog("PE-90μm"),
            ])
            .unwrap();

        // Σd·t/1000 = 0.0168 + 0.0828 = 0.0996
        // costPerSqm = 8×0.0168 + 10.16×0.0828 = 0.1344 + 0.841248 = 0.975648
        assert_eq!(c.name, "PET-12μm/PE-90μm");
        assert!((c.total_thickness_um - 102.0).abs() < 1e-12);
        assert!((c.avg_density - 0.0996 / 0.102).abs() < 1e-12);
        assert!((c.cost_per_sqm - 0.975648).abs() < 1e-12);
        assert!((c.price_per_kg - 0.975648 / 0.0996).abs() < 1e-9);
    }

    #[test]
    fn test_compose_custom_layer_and_override() {
        let catalog = MaterialCatalog::builtin();
        let mut pe = MaterialLayer::from_catalog("PE-90μm");
        pe.thickness_um = Some(80.0);
        let c = catalog
            .compose(&[pe, MaterialLayer::custom(20.0, 1.0, 12.0)])
            .unwrap();
        assert_eq!(c.name, "PE-90μm/自定义");
        assert!((c.total_thickness_um - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_errors() {
        let catalog = MaterialCatalog::builtin();
        assert!(matches!(catalog.compose(&[]), Err(CatalogError::EmptyStack)));
        assert!(matches!(
            catalog.compose(&[MaterialLayer::from_catalog("NOPE")]),
            Err(CatalogError::UnknownMaterial(key)) if key == "NOPE"
        ));

        let incomplete = MaterialLayer {
            thickness_um: Some(10.0),
            ..MaterialLayer::default()
        };
        assert!(matches!(
            catalog.compose(&[incomplete]),
            Err(CatalogError::InvalidLayer { index: 1, .. })
        ));
    }

    #[test]
    fn test_compose_per_area_uses_cost_per_sqm() {
        let catalog = MaterialCatalog::builtin();
        let spec = catalog
            .compose_per_area(&[MaterialLayer::from_catalog("PET-12μm")])
            .unwrap();
        match spec.pricing {
            crate::domain::quote::MaterialPricing::PerArea { price_per_sqm } => {
                assert!((price_per_sqm - 8.0 * 1.4 * 12.0 / 1000.0).abs() < 1e-12)
            }
            other => panic!("unexpected pricing {:?}", other),
        }
    }
}
