use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::StandardItem;

/// 匹配方式 (导出时使用中文)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    #[serde(rename = "精确匹配")]
    Exact,
    #[serde(rename = "近义匹配")]
    Fuzzy,
    #[serde(rename = "人工推断")]
    Inferred,
    #[serde(rename = "无法匹配")]
    Unmatched,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "精确匹配",
            Self::Fuzzy => "近义匹配",
            Self::Inferred => "人工推断",
            Self::Unmatched => "无法匹配",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 异常问题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    #[serde(rename = "缺姓名")]
    MissingName,
    #[serde(rename = "月份缺失")]
    MissingMonth,
    #[serde(rename = "不一致")]
    CountMismatch,
    #[serde(rename = "无效/空白")]
    ZeroSignal,
    #[serde(rename = "未匹配")]
    Unmatched,
    #[serde(rename = "近义/推断")]
    LowConfidence,
    #[serde(rename = "无法解析")]
    Unparseable,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingName => "缺姓名",
            Self::MissingMonth => "月份缺失",
            Self::CountMismatch => "不一致",
            Self::ZeroSignal => "无效/空白",
            Self::Unmatched => "未匹配",
            Self::LowConfidence => "近义/推断",
            Self::Unparseable => "无法解析",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 计价明细: 一条可识别的工作单元
///
/// amount 只在构造时由 count * unit_price 得出, 之后不可修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedItem {
    pub month: String,
    pub person: String,
    pub person_note: Option<String>,
    pub standard_name: String,
    pub count: u32,
    pub unit_price: BigDecimal,
    amount: BigDecimal,
    pub source_text: String,
    pub match_mode: MatchMode,
    pub op_note: Option<String>,
    pub candidates: Vec<String>,
}

impl MatchedItem {
    pub fn priced(
        subject: &ReportSubject,
        item: &StandardItem,
        count: u32,
        source_text: impl Into<String>,
        match_mode: MatchMode,
    ) -> Self {
        Self {
            month: subject.month.clone(),
            person: subject.person.clone(),
            person_note: subject.person_note.clone(),
            standard_name: item.name.clone(),
            count,
            unit_price: item.price.clone(),
            amount: &item.price * BigDecimal::from(count),
            source_text: source_text.into(),
            match_mode,
            op_note: None,
            candidates: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.op_note = Some(note.into());
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }
}

/// 一份绩效表解析出的 (月份, 姓名) 归属
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSubject {
    pub month: String,
    pub person: String,
    pub person_note: Option<String>,
}

/// 异常待确认记录: 只用于人工复核, 不参与计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewException {
    pub month: String,
    pub person: String,
    pub source_text: String,
    pub issue_kind: IssueKind,
    pub suggestion: String,
    pub match_mode: MatchMode,
    pub note: String,
}

impl ReviewException {
    pub fn new(
        subject: &ReportSubject,
        issue_kind: IssueKind,
        source_text: impl Into<String>,
        suggestion: impl Into<String>,
        match_mode: MatchMode,
        note: impl Into<String>,
    ) -> Self {
        Self {
            month: subject.month.clone(),
            person: subject.person.clone(),
            source_text: source_text.into(),
            issue_kind,
            suggestion: suggestion.into(),
            match_mode,
            note: note.into(),
        }
    }
}

/// 单份或多份绩效表的抽取结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractOutcome {
    pub matched: Vec<MatchedItem>,
    pub exceptions: Vec<ReviewException>,
}

impl ExtractOutcome {
    pub fn merge(&mut self, other: ExtractOutcome) {
        self.matched.extend(other.matched);
        self.exceptions.extend(other.exceptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_count_times_price() {
        let subject = ReportSubject {
            month: "12".into(),
            person: "王五".into(),
            person_note: None,
        };
        let item = StandardItem::new("阶段工作", BigDecimal::from(30));
        let m = MatchedItem::priced(&subject, &item, 3, "原文", MatchMode::Exact);
        assert_eq!(m.amount(), &BigDecimal::from(90));
        assert_eq!(m.month, "12");
    }

    #[test]
    fn modes_serialize_in_chinese() {
        let json = serde_json::to_string(&MatchMode::Fuzzy).unwrap();
        assert_eq!(json, "\"近义匹配\"");
        assert_eq!(IssueKind::ZeroSignal.to_string(), "无效/空白");
    }
}
