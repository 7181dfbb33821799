use bigdecimal::BigDecimal;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// 按 (月份, 姓名) 汇总的一行
///
/// 不变式: total == amounts_by_item 之和, 且 counts/amounts 的键与 standard_names 一致。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonMonthAggregate {
    pub month: String,
    pub person: String,
    /// 标准事项名 (首次出现顺序, 去重)
    pub standard_names: IndexSet<String>,
    pub counts_by_item: IndexMap<String, u32>,
    pub amounts_by_item: IndexMap<String, BigDecimal>,
    pub total: BigDecimal,
    pub notes: Vec<String>,
}

/// 个人跨月汇总 (C 表)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub name: String,
    /// 按名称排序
    pub standard_names: Vec<String>,
    pub counts_by_item: IndexMap<String, u32>,
    pub amounts_by_item: IndexMap<String, BigDecimal>,
    pub raw: BigDecimal,
    pub capped_pay: BigDecimal,
    pub overflow: BigDecimal,
}
