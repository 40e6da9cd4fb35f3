// ==========================================
// 软包装报价系统 - 材料库模块
// ==========================================
// 职责: 材料参考数据（内置表 / 文件导入）与复合结构合成
// 红线: 材料库属于调用层,引擎只接收 MaterialSpec
// ==========================================

pub mod error;
pub mod file_parser;
pub mod material_catalog;

pub use error::{CatalogError, CatalogResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRecord, UniversalFileParser};
pub use material_catalog::{MaterialCatalog, CUSTOM_LAYER_NAME};
