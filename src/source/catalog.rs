use crate::error::SettleError;
use crate::models::{Catalog, StandardItem};
use bigdecimal::BigDecimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const HEADER_SCAN_ROWS: usize = 20;
const ITEM_HEADERS: &[&str] = &["标准事项", "标准项", "事项名称", "事项"];
const PRICE_HEADERS: &[&str] = &["单价", "金额(元)", "价格"];

fn find_column(row: &[String], keywords: &[&str]) -> Option<usize> {
    row.iter()
        .position(|cell| keywords.iter().any(|kw| cell.contains(kw)))
}

/// "¥50 元" → 50; 只保留数字与小数点
fn parse_price(raw: &str) -> Option<BigDecimal> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    BigDecimal::from_str(&digits).ok()
}

/// 从量化表 CSV 读取标准事项
///
/// 在前 20 行内寻找同时含事项列与单价列的表头, 表头以下每行
/// 名称非空且单价可解析的记为一个标准事项。
pub fn load_catalog<R: Read>(reader: R) -> Result<Catalog, SettleError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|c| c.trim_start_matches('\u{feff}').trim().to_string())
                .collect(),
        );
    }

    let header = rows
        .iter()
        .take(HEADER_SCAN_ROWS)
        .enumerate()
        .find_map(|(i, row)| {
            let item = find_column(row, ITEM_HEADERS)?;
            let price = find_column(row, PRICE_HEADERS)?;
            Some((i, item, price))
        });
    let Some((header_idx, col_item, col_price)) = header else {
        return Err(SettleError::CatalogHeader);
    };

    let items: Vec<StandardItem> = rows
        .iter()
        .skip(header_idx + 1)
        .filter_map(|row| {
            let name = row.get(col_item)?.trim();
            if name.is_empty() {
                return None;
            }
            let price = parse_price(row.get(col_price)?)?;
            Some(StandardItem::new(name, price))
        })
        .collect();

    if items.is_empty() {
        return Err(SettleError::EmptyCatalog);
    }

    tracing::info!("量化表读取完成: {} 个标准事项", items.len());
    Ok(Catalog::new(items))
}

pub fn load_catalog_path(path: impl AsRef<Path>) -> Result<Catalog, SettleError> {
    let file = std::fs::File::open(path.as_ref())?;
    load_catalog(file)
}

impl Catalog {
    /// 同 [`load_catalog`]
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Catalog, SettleError> {
        load_catalog(reader)
    }
}
