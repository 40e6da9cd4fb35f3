// ==========================================
// 软包装报价系统 - 材料库文件解析器
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 按表头映射的原始行（值均为去空白字符串）
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行: 表头 → 单元格文本
pub type RawRecord = HashMap<String, String>;

/// 文件解析器
pub trait FileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> CatalogResult<Vec<RawRecord>>;
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> CatalogResult<()> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> CatalogResult<Vec<RawRecord>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(CatalogError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row_map: RawRecord = record
                .iter()
                .enumerate()
                .filter_map(|(col_idx, value)| {
                    headers
                        .get(col_idx)
                        .map(|header| (header.clone(), value.trim().to_string()))
                })
                .collect();

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> CatalogResult<Vec<RawRecord>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(CatalogError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| CatalogError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| CatalogError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut records = Vec::new();
        for data_row in rows {
            let row_map: RawRecord = data_row
                .iter()
                .enumerate()
                .filter_map(|(col_idx, cell)| {
                    headers
                        .get(col_idx)
                        .map(|header| (header.clone(), cell.to_string().trim().to_string()))
                })
                .collect();

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> CatalogResult<Vec<RawRecord>> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let file = csv_file(&["name,density,price_per_kg", "PET-12μm,1.4,8", "PE-90μm,0.92,10.16"]);

        let records = CsvParser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&"PET-12μm".to_string()));
        assert_eq!(records[1].get("price_per_kg"), Some(&"10.16".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let file = csv_file(&["名称,密度", "PET-12μm,1.4", ",", "PE-90μm,0.92"]);

        let records = CsvParser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser.parse(file.path());
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(ext)) if ext == "txt"));
    }
}
