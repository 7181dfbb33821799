use crate::models::{
    Catalog, ExtractOutcome, Field, IssueKind, MatchMode, MatchedItem, ReportInput, ReportSubject,
    ReviewException,
};
use crate::service::matcher::match_standard;
use crate::util::{cn_to_number, normalize_name};
use rayon::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

const MONTH_LABEL: &str = "考核月份";
const NAME_LABEL: &str = "姓名";
const GENERIC_LECTURE: &str = "讲解";
const ZERO_SIGNALS: &[&str] = &["无", "空白", "未填写", "没有", "未做"];
const WORK_SECTION_KEYWORDS: &[&str] = &["讲解", "阶段工作", "杂活"];

/// 工作板块 (按标签判断)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkSection {
    Lecture,
    Phase,
    Misc,
}

impl WorkSection {
    /// 标签 → 板块; 同时命中多个时取讲解 > 阶段工作 > 杂活
    pub fn from_label(label: &str) -> Option<Self> {
        if label.contains("讲解工作") {
            Some(Self::Lecture)
        } else if label.contains("阶段工作") {
            Some(Self::Phase)
        } else if label.contains("杂活") {
            Some(Self::Misc)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Lecture => "讲解",
            Self::Phase => "阶段工作",
            Self::Misc => "杂活",
        }
    }
}

/// 讲解档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LectureTier {
    CrossCampus,
    Urgent,
    Important,
    Plain,
}

impl LectureTier {
    pub fn standard_name(&self) -> &'static str {
        match self {
            Self::CrossCampus => "讲解（跨校区）",
            Self::Urgent => "紧急讲解",
            Self::Important => "重要/复杂讲解",
            Self::Plain => "讲解",
        }
    }

    /// 命中的规则说明, 写入操作说明
    pub fn rule(&self) -> &'static str {
        match self {
            Self::CrossCampus => "含跨校区/外校区/分校区关键词",
            Self::Urgent => "含紧急/加急/临时关键词",
            Self::Important => "含重要/复杂/重点/大型/领导/专家关键词",
            Self::Plain => "未命中特殊档位, 按普通讲解",
        }
    }
}

fn month_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{1,2})\s*月").expect("invalid month regex"))
}

fn month_bare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([0-9]{1,2})\s*$").expect("invalid bare month regex"))
}

fn month_full_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9]{4})\s*年\s*([0-9]{1,2})\s*月").expect("invalid year month regex")
    })
}

fn paren_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[（(]\s*([0-9]+)\s*[)）]\s*次").expect("invalid paren count regex"))
}

fn count_anywhere_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(共\s*)?([0-9]{1,3}|[零一二两三四五六七八九十百千]+)\s*(次|场|篇|条|张|个|人|月)",
        )
        .expect("invalid count regex")
    })
}

fn list_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:\n\s*[0-9]+[.、]|\n\s*[（(][0-9]+[)）]|\n\s*[-•]|；|;|、|，|,|。)",
        )
        .expect("invalid list split regex")
    })
}

fn newline_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n+").expect("invalid newline regex"))
}

fn cross_campus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(跨校区|外校区|分校区|去\S{0,10}校区)").expect("invalid cross campus regex"))
}

fn urgent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(紧急|加急|临时)").expect("invalid urgent regex"))
}

fn important_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(重要|复杂|重点|大型|接待领导|领导|专家)").expect("invalid important regex"))
}

/// 从文本中解析月份: `12月` / `2025年12月` / 单独的 1~2 位数字
pub fn find_month(text: &str) -> Option<String> {
    let parse = |s: &str| s.parse::<u32>().ok().map(|m| m.to_string());
    if let Some(caps) = month_suffix_re().captures(text) {
        return parse(&caps[1]);
    }
    if let Some(caps) = month_bare_re().captures(text) {
        return parse(&caps[1]);
    }
    if let Some(caps) = month_full_re().captures(text) {
        return parse(&caps[2]);
    }
    None
}

/// "无 / 空白 / 未填写 / 没有 / 未做" 等计 0 信号
pub fn has_zero_signal(text: &str) -> bool {
    ZERO_SIGNALS.iter().any(|kw| text.contains(kw))
}

fn is_work_section_label(label: &str) -> bool {
    WORK_SECTION_KEYWORDS.iter().any(|kw| label.contains(kw))
}

/// 总次数: 先找 `（8）次`, 再找任意位置的 数字/中文数字 + 量词
pub fn find_stated_total(block: &str) -> Option<u32> {
    if let Some(caps) = paren_count_re().captures(block) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return Some(n);
        }
    }
    count_anywhere_re()
        .captures(block)
        .and_then(|caps| cn_to_number(&caps[2]))
}

/// 按编号、项目符号与列表标点拆分条目, 丢弃空串和单字符片段
pub fn split_list_items(block: &str) -> Vec<String> {
    let text = block.replace('\r', "");
    let text = newline_run_re().replace_all(&text, "\n");
    list_split_re()
        .split(&text)
        .map(str::trim)
        .filter(|p| p.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// 讲解档位: 跨校区 > 紧急 > 重要/复杂 > 普通
pub fn pick_lecture_tier(text: &str) -> LectureTier {
    if cross_campus_re().is_match(text) {
        LectureTier::CrossCampus
    } else if urgent_re().is_match(text) {
        LectureTier::Urgent
    } else if important_re().is_match(text) {
        LectureTier::Important
    } else {
        LectureTier::Plain
    }
}

/// 把总次数拆到 n 个条目上: 每条先得 floor(total/n), 余数按原顺序逐条 +1
pub fn distribute_counts(total: u32, n: usize) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let len = n as u32;
    let share = total / len;
    let remainder = (total % len) as usize;
    (0..n)
        .map(|i| if i < remainder { share + 1 } else { share })
        .collect()
}

/// 单份绩效表的抽取上下文
struct ReportExtraction<'a> {
    catalog: &'a Catalog,
    subject: ReportSubject,
    outcome: ExtractOutcome,
}

impl<'a> ReportExtraction<'a> {
    fn issue(
        &mut self,
        kind: IssueKind,
        source: impl Into<String>,
        suggestion: impl Into<String>,
        mode: MatchMode,
        note: impl Into<String>,
    ) {
        let rec = ReviewException::new(&self.subject, kind, source, suggestion, mode, note);
        self.outcome.exceptions.push(rec);
    }

    fn process_field(&mut self, field: &Field) {
        let block = field.value.trim();
        if block.is_empty() {
            return;
        }

        if has_zero_signal(block) {
            if is_work_section_label(&field.label) {
                tracing::debug!("{} 字段含计 0 信号, 跳过", field.label);
                self.issue(
                    IssueKind::ZeroSignal,
                    format!("{}: {}", field.label, block),
                    "按0次处理",
                    MatchMode::Exact,
                    "检测到“无/未做/空白”等信号，计0不计价",
                );
            }
            return;
        }

        let Some(section) = WorkSection::from_label(&field.label) else {
            return;
        };

        let stated = find_stated_total(block);
        let listed = split_list_items(block);
        // 未写总次数时按 1 次核对, 让列举条数与默认值的差异同样可见
        let effective_total = stated.unwrap_or(1);
        if !listed.is_empty() && effective_total as usize != listed.len() {
            self.issue(
                IssueKind::CountMismatch,
                block,
                format!(
                    "{} 不一致：总次数={}，列举={}",
                    section.title(),
                    effective_total,
                    listed.len()
                ),
                MatchMode::Inferred,
                "按总次数计价，列表仅作佐证",
            );
        }

        match section {
            WorkSection::Lecture => self.price_lecture(block, effective_total),
            WorkSection::Phase | WorkSection::Misc => {
                self.price_listed(section, block, stated, listed)
            }
        }
    }

    fn price_lecture(&mut self, block: &str, total: u32) {
        let tier = pick_lecture_tier(block);
        let tier_name = tier.standard_name();
        let catalog = self.catalog;
        let resolved = if catalog.contains(tier_name) {
            tier_name
        } else if catalog.contains(GENERIC_LECTURE) {
            GENERIC_LECTURE
        } else {
            tier_name
        };

        let Some(std) = catalog.get(resolved) else {
            self.issue(
                IssueKind::Unmatched,
                block,
                format!("量化表缺少事项：{}", resolved),
                MatchMode::Unmatched,
                "讲解档位已判断，但量化表无对应标准项",
            );
            return;
        };

        let item = MatchedItem::priced(&self.subject, std, total, block, MatchMode::Inferred)
            .with_note(format!(
                "按讲解档位规则（{}）判断为“{}”，并以总次数计价",
                tier.rule(),
                std.name
            ))
            .with_candidates(vec![tier_name.to_string()]);
        self.outcome.matched.push(item);
    }

    fn price_listed(
        &mut self,
        section: WorkSection,
        block: &str,
        stated: Option<u32>,
        listed: Vec<String>,
    ) {
        let catalog = self.catalog;
        let units = if listed.is_empty() {
            vec![block.to_string()]
        } else {
            listed
        };
        let counts = match stated {
            Some(total) => distribute_counts(total, units.len()),
            None => vec![1; units.len()],
        };

        for (unit, count) in units.iter().zip(counts) {
            let Some(m) = match_standard(unit, catalog) else {
                continue;
            };
            let std = if m.is_matched() {
                catalog.get(&m.name)
            } else {
                None
            };
            let Some(std) = std else {
                self.issue(
                    IssueKind::Unmatched,
                    unit.as_str(),
                    m.candidates.join("；"),
                    m.mode,
                    format!(
                        "{}条目无法可靠匹配标准项：{}",
                        section.title(),
                        m.op_note.as_deref().unwrap_or("")
                    ),
                );
                continue;
            };

            let mut item = MatchedItem::priced(&self.subject, std, count, unit.as_str(), m.mode)
                .with_candidates(m.candidates.clone());
            if let Some(note) = &m.op_note {
                item = item.with_note(note.clone());
            }
            self.outcome.matched.push(item);

            if m.mode != MatchMode::Exact {
                self.issue(
                    IssueKind::LowConfidence,
                    unit.as_str(),
                    m.name.clone(),
                    m.mode,
                    format!(
                        "将原文归到“{}”：{}；候选：{}",
                        m.name,
                        m.op_note.as_deref().unwrap_or(""),
                        m.candidates.join("；")
                    ),
                );
            }
        }
    }
}

/// 单份绩效表抽取: 标签/内容行 + 量化表 → 计价明细 + 异常记录
///
/// 不会失败; 所有缺失与歧义都落为异常记录, 其余字段照常处理。
pub fn extract(file_name: &str, fields: &[Field], catalog: &Catalog) -> ExtractOutcome {
    let mut month_from_fields = None;
    let mut name_raw = "";
    for f in fields {
        if f.label.contains(MONTH_LABEL) {
            if let Some(m) = find_month(&f.value) {
                month_from_fields = Some(m);
            }
        }
        if f.label.contains(NAME_LABEL) {
            name_raw = f.value.as_str();
        }
    }

    let person = normalize_name(name_raw);
    let month_from_file = if month_from_fields.is_none() {
        find_month(file_name)
    } else {
        None
    };

    let mut ctx = ReportExtraction {
        catalog,
        subject: ReportSubject {
            month: month_from_fields
                .clone()
                .or_else(|| month_from_file.clone())
                .unwrap_or_default(),
            person: person.name.clone(),
            person_note: person.note.clone(),
        },
        outcome: ExtractOutcome::default(),
    };

    if person.name.is_empty() {
        let source = if name_raw.trim().is_empty() {
            "(空)"
        } else {
            name_raw
        };
        ctx.issue(
            IssueKind::MissingName,
            source,
            "请补充姓名",
            MatchMode::Unmatched,
            "未在“姓名”字段解析到有效姓名",
        );
    }

    if month_from_fields.is_none() {
        if month_from_file.is_some() {
            ctx.issue(
                IssueKind::MissingMonth,
                file_name,
                "月份来源=文件名",
                MatchMode::Inferred,
                "正文缺“考核月份”，改用文件名推断月份",
            );
        } else {
            ctx.issue(
                IssueKind::MissingMonth,
                file_name,
                "请补充考核月份",
                MatchMode::Unmatched,
                "正文与文件名均未解析到月份",
            );
        }
    }

    for f in fields {
        ctx.process_field(f);
    }

    tracing::debug!(
        "{}: 月份={} 姓名={} 明细 {} 条, 异常 {} 条",
        file_name,
        ctx.subject.month,
        ctx.subject.person,
        ctx.outcome.matched.len(),
        ctx.outcome.exceptions.len()
    );

    ctx.outcome
}

/// 上游无法解析的文件: 只产生一条 "无法解析" 异常
fn unparseable(file_name: &str) -> ExtractOutcome {
    tracing::warn!("{} 未解析到表格, 跳过", file_name);
    let subject = ReportSubject::default();
    ExtractOutcome {
        matched: Vec::new(),
        exceptions: vec![ReviewException::new(
            &subject,
            IssueKind::Unparseable,
            file_name,
            "未读取到表格",
            MatchMode::Unmatched,
            "文档中未解析到表格",
        )],
    }
}

pub fn extract_report(report: &ReportInput, catalog: &Catalog) -> ExtractOutcome {
    match &report.fields {
        Some(fields) => extract(&report.file_name, fields, catalog),
        None => unparseable(&report.file_name),
    }
}

/// 多份绩效表并行抽取, 结果按输入顺序拼接
pub fn extract_batch(reports: &[ReportInput], catalog: &Catalog) -> ExtractOutcome {
    let parts: Vec<ExtractOutcome> = reports
        .par_iter()
        .map(|r| extract_report(r, catalog))
        .collect();

    let mut outcome = ExtractOutcome::default();
    for part in parts {
        outcome.merge(part);
    }

    tracing::info!(
        "抽取完成: 文件 {} 份, 明细 {} 条, 异常 {} 条",
        reports.len(),
        outcome.matched.len(),
        outcome.exceptions.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StandardItem;
    use bigdecimal::BigDecimal;

    fn catalog(items: &[(&str, i64)]) -> Catalog {
        Catalog::new(
            items
                .iter()
                .map(|(n, p)| StandardItem::new(*n, BigDecimal::from(*p)))
                .collect(),
        )
    }

    fn fields(rows: &[(&str, &str)]) -> Vec<Field> {
        rows.iter().map(|(l, v)| Field::new(*l, *v)).collect()
    }

    fn kinds(outcome: &ExtractOutcome) -> Vec<IssueKind> {
        outcome.exceptions.iter().map(|e| e.issue_kind).collect()
    }

    #[test]
    fn month_patterns() {
        assert_eq!(find_month("12月"), Some("12".to_string()));
        assert_eq!(find_month("2025年3月"), Some("3".to_string()));
        assert_eq!(find_month(" 09 "), Some("9".to_string()));
        assert_eq!(find_month("绩效表-11月-张三.docx"), Some("11".to_string()));
        assert_eq!(find_month("考核表"), None);
    }

    #[test]
    fn stated_total_prefers_parenthesized_count() {
        assert_eq!(find_stated_total("（8）次：讲解若干"), Some(8));
        assert_eq!(find_stated_total("(2) 次"), Some(2));
        assert_eq!(find_stated_total("共三场讲解"), Some(3));
        assert_eq!(find_stated_total("完成海报2张"), Some(2));
        assert_eq!(find_stated_total("海报设计"), None);
    }

    #[test]
    fn list_split_handles_numbering_and_punctuation() {
        let items = split_list_items("活动策划\n1. 海报设计\n2、会议记录；物资搬运，a");
        assert_eq!(items, vec!["活动策划", "海报设计", "会议记录", "物资搬运"]);
        let items = split_list_items("(1)讲解\n（2）带队参观\n- 布展");
        assert_eq!(items, vec!["(1)讲解", "带队参观", "布展"]);
    }

    #[test]
    fn lecture_tier_priority() {
        assert_eq!(pick_lecture_tier("临时去东校区讲解"), LectureTier::CrossCampus);
        assert_eq!(pick_lecture_tier("临时接待领导"), LectureTier::Urgent);
        assert_eq!(pick_lecture_tier("接待领导"), LectureTier::Important);
        assert_eq!(pick_lecture_tier("常规讲解"), LectureTier::Plain);
    }

    #[test]
    fn distribute_counts_floor_then_remainder_in_order() {
        let counts = distribute_counts(7, 3);
        assert_eq!(counts, vec![3, 2, 2]);
        assert_eq!(counts.iter().sum::<u32>(), 7);
        assert_eq!(distribute_counts(2, 3), vec![1, 1, 0]);
        assert_eq!(distribute_counts(6, 3), vec![2, 2, 2]);
        assert!(distribute_counts(5, 0).is_empty());
    }

    #[test]
    fn lecture_falls_back_to_generic_entry() {
        let c = catalog(&[("讲解", 50)]);
        let out = extract(
            "a.docx",
            &fields(&[("考核月份", "12月"), ("姓名", "王五"), ("讲解工作", "（2）次：紧急讲解")]),
            &c,
        );
        assert_eq!(out.matched.len(), 1);
        let m = &out.matched[0];
        assert_eq!(m.standard_name, "讲解");
        assert_eq!(m.count, 2);
        assert_eq!(m.amount(), &BigDecimal::from(100));
        assert_eq!(m.match_mode, MatchMode::Inferred);
        assert_eq!(m.candidates, vec!["紧急讲解".to_string()]);
        assert!(m.op_note.as_deref().unwrap_or("").contains("紧急"));
    }

    #[test]
    fn lecture_without_count_defaults_to_one() {
        let c = catalog(&[("讲解", 50), ("重要/复杂讲解", 80)]);
        let out = extract(
            "a.docx",
            &fields(&[("考核月份", "5"), ("姓名", "赵六"), ("讲解工作", "接待专家参观")]),
            &c,
        );
        assert_eq!(out.matched[0].standard_name, "重要/复杂讲解");
        assert_eq!(out.matched[0].count, 1);
        assert!(out.exceptions.is_empty());
    }

    #[test]
    fn phase_work_distributes_stated_total() {
        let c = catalog(&[("海报设计", 20), ("会议记录", 15), ("物资搬运", 10)]);
        let out = extract(
            "a.docx",
            &fields(&[
                ("考核月份", "12月"),
                ("姓名", "王五"),
                ("阶段工作", "共7次：海报设计；会议记录；物资搬运"),
            ]),
            &c,
        );
        let counts: Vec<u32> = out.matched.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![3, 2, 2]);
        // 第一条带着 "共7次：" 前缀, 只能近义匹配
        assert_eq!(out.matched[0].match_mode, MatchMode::Fuzzy);
        assert_eq!(out.matched[1].match_mode, MatchMode::Exact);
        assert_eq!(
            kinds(&out),
            vec![IssueKind::CountMismatch, IssueKind::LowConfidence]
        );
        assert!(out.exceptions[0].suggestion.contains("总次数=7，列举=3"));
    }

    #[test]
    fn phase_work_without_total_counts_one_each() {
        let c = catalog(&[("海报设计", 20), ("会议记录", 15)]);
        let out = extract(
            "a.docx",
            &fields(&[("考核月份", "1月"), ("姓名", "王五"), ("阶段工作", "海报设计、会议记录")]),
            &c,
        );
        let counts: Vec<u32> = out.matched.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![1, 1]);
    }

    #[test]
    fn misc_fuzzy_and_unmatched_are_audited() {
        let c = catalog(&[("海报设计", 20), ("会议记录", 15), ("活动摄影", 25)]);
        let out = extract(
            "a.docx",
            &fields(&[
                ("考核月份", "1月"),
                ("姓名", "王五"),
                ("杂活", "设计海报；打扫卫生"),
            ]),
            &c,
        );
        assert_eq!(out.matched.len(), 1);
        assert_eq!(out.matched[0].standard_name, "海报设计");
        assert_eq!(out.matched[0].match_mode, MatchMode::Fuzzy);
        let k = kinds(&out);
        assert!(k.contains(&IssueKind::CountMismatch));
        assert!(k.contains(&IssueKind::LowConfidence));
        assert!(k.contains(&IssueKind::Unmatched));
    }

    #[test]
    fn zero_signal_in_work_section_counts_as_zero() {
        let c = catalog(&[("讲解", 50)]);
        let out = extract(
            "a.docx",
            &fields(&[("考核月份", "12月"), ("姓名", "王五"), ("讲解工作", "无")]),
            &c,
        );
        assert!(out.matched.is_empty());
        assert_eq!(kinds(&out), vec![IssueKind::ZeroSignal]);
        assert_eq!(out.exceptions[0].source_text, "讲解工作: 无");
    }

    #[test]
    fn month_falls_back_to_file_name() {
        let out = extract("11月-王五.docx", &fields(&[("姓名", "王五")]), &catalog(&[]));
        assert_eq!(kinds(&out), vec![IssueKind::MissingMonth]);
        assert_eq!(out.exceptions[0].month, "11");
        assert_eq!(out.exceptions[0].match_mode, MatchMode::Inferred);
    }

    #[test]
    fn month_missing_everywhere_drops_out_of_aggregation() {
        let out = extract(
            "考核表-王五.docx",
            &fields(&[("姓名", "王五"), ("讲解工作", "（1）次")]),
            &catalog(&[("讲解", 50)]),
        );
        assert_eq!(kinds(&out), vec![IssueKind::MissingMonth]);
        let e = &out.exceptions[0];
        assert_eq!(e.month, "");
        assert_eq!(e.source_text, "考核表-王五.docx");
        assert_eq!(e.suggestion, "请补充考核月份");
        assert_eq!(e.match_mode, MatchMode::Unmatched);

        // 仍然计价, 但月份为空的明细不进入汇总
        assert_eq!(out.matched.len(), 1);
        assert_eq!(out.matched[0].month, "");
        assert_eq!(out.matched[0].amount(), &BigDecimal::from(50));
        assert!(crate::service::aggregate(&out.matched).is_empty());
    }

    #[test]
    fn missing_name_keeps_processing() {
        let c = catalog(&[("讲解", 50)]);
        let out = extract(
            "a.docx",
            &fields(&[("考核月份", "12月"), ("讲解工作", "（1）次")]),
            &c,
        );
        assert_eq!(kinds(&out), vec![IssueKind::MissingName]);
        assert_eq!(out.exceptions[0].source_text, "(空)");
        assert_eq!(out.matched.len(), 1);
        assert_eq!(out.matched[0].person, "");
    }

    #[test]
    fn unparseable_report_yields_single_exception() {
        let out = extract_report(&ReportInput::unparseable("坏文件.docx"), &catalog(&[]));
        assert!(out.matched.is_empty());
        assert_eq!(kinds(&out), vec![IssueKind::Unparseable]);
    }

    #[test]
    fn batch_preserves_input_order() {
        let c = catalog(&[("讲解", 50)]);
        let reports = vec![
            ReportInput::new("a", fields(&[("考核月份", "1月"), ("姓名", "甲"), ("讲解工作", "（1）次")])),
            ReportInput::new("b", fields(&[("考核月份", "2月"), ("姓名", "乙"), ("讲解工作", "（1）次")])),
        ];
        let out = extract_batch(&reports, &c);
        let people: Vec<&str> = out.matched.iter().map(|m| m.person.as_str()).collect();
        assert_eq!(people, vec!["甲", "乙"]);
    }
}
