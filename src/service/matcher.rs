use crate::models::{Catalog, MatchMode};
use std::collections::HashSet;

/// 模糊匹配接受阈值 (字符重合度)
pub const FUZZY_THRESHOLD: f64 = 0.6;

const CANDIDATE_LIMIT: usize = 3;

/// 单条原文对量化表的匹配结果
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMatch {
    /// 命中的标准事项名; 无法匹配时为空
    pub name: String,
    pub mode: MatchMode,
    pub score: Option<f64>,
    pub op_note: Option<String>,
    /// 前三名候选, 形如 `讲解(0.67)`
    pub candidates: Vec<String>,
}

impl StandardMatch {
    pub fn is_matched(&self) -> bool {
        self.mode != MatchMode::Unmatched && !self.name.is_empty()
    }
}

/// 字符集合重合度: |A ∩ B| / min(|A|, |B|), 重复字符只计一次
pub fn char_overlap(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    let inter = set_a.intersection(&set_b).count();
    let denom = set_a.len().min(set_b.len()).max(1);
    inter as f64 / denom as f64
}

/// 原文 → 标准事项
///
/// 完全相同直接命中; 否则按字符重合度排序 (同分保持量化表顺序),
/// 最高分 >= 0.6 记为近义匹配, 否则无法匹配。两种情况都带前三名候选。
/// 原文为空时返回 None。
pub fn match_standard(raw: &str, catalog: &Catalog) -> Option<StandardMatch> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(exact) = catalog.items().iter().find(|it| it.name == text) {
        return Some(StandardMatch {
            name: exact.name.clone(),
            mode: MatchMode::Exact,
            score: None,
            op_note: None,
            candidates: Vec::new(),
        });
    }

    let mut ranked: Vec<(&str, f64)> = catalog
        .items()
        .iter()
        .map(|it| (it.name.as_str(), char_overlap(text, &it.name)))
        .collect();
    // sort_by 稳定, 同分保持量化表顺序
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let candidates: Vec<String> = ranked
        .iter()
        .take(CANDIDATE_LIMIT)
        .map(|(name, sc)| format!("{}({:.2})", name, sc))
        .collect();

    match ranked.first() {
        Some(&(name, sc)) if sc >= FUZZY_THRESHOLD => Some(StandardMatch {
            name: name.to_string(),
            mode: MatchMode::Fuzzy,
            score: Some(sc),
            op_note: Some(format!("字符重合度≈{:.2}", sc)),
            candidates,
        }),
        top => Some(StandardMatch {
            name: String::new(),
            mode: MatchMode::Unmatched,
            score: top.map(|&(_, sc)| sc),
            op_note: Some("相似度不足".to_string()),
            candidates,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StandardItem;
    use bigdecimal::BigDecimal;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|n| StandardItem::new(*n, BigDecimal::from(10)))
                .collect(),
        )
    }

    #[test]
    fn exact_name_wins_immediately() {
        let c = catalog(&["会议记录", "海报设计"]);
        let m = match_standard(" 海报设计 ", &c).unwrap();
        assert_eq!(m.mode, MatchMode::Exact);
        assert_eq!(m.name, "海报设计");
        assert!(m.candidates.is_empty());
    }

    #[test]
    fn overlap_uses_unique_characters() {
        // "海海报" 去重后为 {海, 报}
        assert!((char_overlap("海海报", "海报设计") - 1.0).abs() < 1e-9);
        assert!((char_overlap("abc", "xyz")).abs() < 1e-9);
        assert!((char_overlap("", "xyz")).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_match_above_threshold() {
        let c = catalog(&["会议记录", "海报设计", "活动摄影"]);
        let m = match_standard("设计海报一张", &c).unwrap();
        assert_eq!(m.mode, MatchMode::Fuzzy);
        assert_eq!(m.name, "海报设计");
        assert_eq!(m.candidates.len(), 3);
        assert_eq!(m.candidates[0], "海报设计(1.00)");
        assert_eq!(m.op_note.as_deref(), Some("字符重合度≈1.00"));
    }

    #[test]
    fn below_threshold_is_unmatched_with_candidates() {
        let c = catalog(&["会议记录", "海报设计", "活动摄影", "物资搬运"]);
        let m = match_standard("打扫卫生", &c).unwrap();
        assert_eq!(m.mode, MatchMode::Unmatched);
        assert!(m.name.is_empty());
        assert!(!m.is_matched());
        assert_eq!(m.candidates.len(), 3);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let c = catalog(&["甲乙", "乙甲"]);
        let m = match_standard("甲乙丙", &c).unwrap();
        assert_eq!(m.mode, MatchMode::Fuzzy);
        assert_eq!(m.name, "甲乙");
    }

    #[test]
    fn blank_input_returns_none() {
        assert!(match_standard("  ", &catalog(&["讲解"])).is_none());
    }
}
