use crate::models::{Field, ReportInput};
use regex::Regex;
use std::sync::OnceLock;

/// 绩效表值区域只取第 1~4 列
const VALUE_COLUMNS: std::ops::Range<usize> = 1..5;

fn template_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(所属部门/?组|主席团|部门|组别)$").expect("invalid template word regex")
    })
}

fn spaces_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ ]{2,}").expect("invalid spaces regex"))
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("invalid blank lines regex"))
}

/// 单元格文本规范化: 不换行空格、制表符、连续空行/空格
pub fn normalize_cell(raw: &str) -> String {
    let text: String = raw
        .chars()
        .map(|c| match c {
            '\u{a0}' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();
    let text = blank_lines_re().replace_all(&text, "\n\n");
    let text = spaces_re().replace_all(&text, " ");
    text.trim().to_string()
}

fn is_template_word(cell: &str) -> bool {
    let t = cell.trim();
    t.is_empty() || template_word_re().is_match(t)
}

/// 表格行 → 标签/内容
///
/// 第 0 列为标签; 值优先取第 1 列, 若为模板固定词则取 1~4 列中最长的非模板内容。
pub fn fields_from_rows(rows: &[Vec<String>]) -> Vec<Field> {
    rows.iter()
        .filter_map(|row| {
            let label = row.first()?.trim();
            if label.is_empty() {
                return None;
            }
            let cols: Vec<String> = VALUE_COLUMNS
                .map(|i| normalize_cell(row.get(i).map(String::as_str).unwrap_or("")))
                .collect();

            let value = if !is_template_word(&cols[0]) {
                cols[0].clone()
            } else {
                cols.iter()
                    .filter(|c| !is_template_word(c))
                    // 同长时取靠前的列
                    .fold(None::<&String>, |best, c| match best {
                        Some(b) if b.chars().count() >= c.chars().count() => Some(b),
                        _ => Some(c),
                    })
                    .cloned()
                    .unwrap_or_default()
            };
            Some(Field::new(label, value))
        })
        .collect()
}

/// 一份文档的全部表格 → 绩效表输入; 取行数最多的表格, 没有表格时记为无法解析
pub fn report_from_tables(file_name: &str, tables: &[Vec<Vec<String>>]) -> ReportInput {
    let largest = tables
        .iter()
        .filter(|t| !t.is_empty())
        .fold(None::<&Vec<Vec<String>>>, |best, t| match best {
            Some(b) if b.len() >= t.len() => Some(b),
            _ => Some(t),
        });
    match largest {
        Some(table) => ReportInput::new(file_name, fields_from_rows(table)),
        None => ReportInput::unparseable(file_name),
    }
}
