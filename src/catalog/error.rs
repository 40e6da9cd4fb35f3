// ==========================================
// 软包装报价系统 - 材料库错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 材料库错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("字段缺失 (行 {row}): {field}")]
    MissingField { row: usize, field: String },

    #[error("字段值无效 (行 {row}, 字段 {field}): {value}")]
    InvalidValue {
        row: usize,
        field: String,
        value: String,
    },

    #[error("材料名称重复 (行 {row}): {name}")]
    DuplicateName { row: usize, name: String },

    // ===== 复合结构错误 =====
    #[error("材料库中不存在: {0}")]
    UnknownMaterial(String),

    #[error("复合结构至少需要一层材料")]
    EmptyStack,

    #[error("第 {index} 层无效: {message}")]
    InvalidLayer { index: usize, message: String },
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for CatalogError {
    fn from(err: calamine::Error) -> Self {
        CatalogError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;
