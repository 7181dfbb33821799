use bigdecimal::BigDecimal;
use perf_settle_rust::models::{
    Catalog, Field, IssueKind, MatchMode, ReportInput, StandardItem,
};
use perf_settle_rust::service::{aggregate, allocate, extract, SettlementService};
use perf_settle_rust::source::{load_catalog, report_from_tables};

fn catalog(items: &[(&str, i64)]) -> Catalog {
    Catalog::new(
        items
            .iter()
            .map(|(n, p)| StandardItem::new(*n, BigDecimal::from(*p)))
            .collect(),
    )
}

fn lecture_report() -> Vec<Field> {
    vec![
        Field::new("考核月份", "12月"),
        Field::new("姓名", "王五"),
        Field::new("讲解工作", "（3）次：跨校区支教一次；跨校区家访两次"),
    ]
}

#[test]
fn cross_campus_lecture_without_catalog_entry_is_unmatched() {
    let c = catalog(&[("阶段工作", 30)]);
    let out = extract("王五.docx", &lecture_report(), &c);

    assert!(out.matched.is_empty());
    let unmatched: Vec<_> = out
        .exceptions
        .iter()
        .filter(|e| e.issue_kind == IssueKind::Unmatched)
        .collect();
    assert_eq!(unmatched.len(), 1);
    assert_eq!(unmatched[0].month, "12");
    assert_eq!(unmatched[0].person, "王五");
    assert_eq!(unmatched[0].suggestion, "量化表缺少事项：讲解（跨校区）");
    assert_eq!(unmatched[0].match_mode, MatchMode::Unmatched);

    // 总次数 3 与列举 2 条不一致, 单独记录
    assert!(out
        .exceptions
        .iter()
        .any(|e| e.issue_kind == IssueKind::CountMismatch
            && e.suggestion == "讲解 不一致：总次数=3，列举=2"));
}

#[test]
fn cross_campus_lecture_falls_back_to_generic_lecture() {
    let c = catalog(&[("讲解", 50), ("阶段工作", 30)]);
    let out = extract("王五.docx", &lecture_report(), &c);

    assert_eq!(out.matched.len(), 1);
    let m = &out.matched[0];
    assert_eq!(m.standard_name, "讲解");
    assert_eq!(m.count, 3);
    assert_eq!(m.amount(), &BigDecimal::from(150));
    assert_eq!(m.candidates, vec!["讲解（跨校区）".to_string()]);
}

#[test]
fn full_settlement_conserves_money() {
    let csv = "标准事项,单价\n讲解,50\n海报设计,200\n会议记录,15\n";
    let c = load_catalog(csv.as_bytes()).unwrap();

    let reports = vec![
        report_from_tables(
            "12月-王五.docx",
            &[vec![
                vec!["考核月份".into(), "2025年12月".into()],
                vec!["姓名".into(), "王五同学".into()],
                vec!["讲解工作".into(), "共十次讲解".into()],
                vec!["阶段工作".into(), "海报设计\n1. 海报设计".into()],
            ]],
        ),
        report_from_tables(
            "12月-赵六.docx",
            &[vec![
                vec!["考核月份".into(), "12".into()],
                vec!["姓名".into(), "赵六（讲解组）".into()],
                vec!["杂活".into(), "会议记录".into()],
                vec!["阶段工作".into(), "未做".into()],
            ]],
        ),
        report_from_tables("空文档.docx", &[]),
    ];

    let outcome = SettlementService::default().settle(&c, &reports, &["赵六".to_string()]);

    // 王五: 讲解 10*50 + 海报设计 2*200 = 900, 赵六: 15
    assert_eq!(outcome.aggregates.len(), 2);
    let wang = outcome.aggregates.iter().find(|a| a.person == "王五").unwrap();
    assert_eq!(wang.total, BigDecimal::from(900));
    assert_eq!(wang.counts_by_item["海报设计"], 2);
    let zhao = outcome.aggregates.iter().find(|a| a.person == "赵六").unwrap();
    assert_eq!(zhao.notes, vec!["讲解组".to_string()]);

    let kinds: Vec<IssueKind> = outcome.exceptions.iter().map(|e| e.issue_kind).collect();
    assert!(kinds.contains(&IssueKind::ZeroSignal));
    assert!(kinds.contains(&IssueKind::Unparseable));

    let alloc = &outcome.allocation;
    assert_eq!(alloc.transfers.len(), 1);
    assert_eq!(alloc.transfers[0].from_collector, "赵六");
    assert_eq!(alloc.transfers[0].to_original_earner, "王五");
    assert_eq!(alloc.transfers[0].amount, BigDecimal::from(100));
    assert!(alloc.conservation.passed);
    assert_eq!(
        alloc.warnings.last().map(String::as_str),
        Some("一致性校验通过：最终到账合计=915.00 = 原始应得合计=915.00")
    );
}

#[test]
fn allocation_over_extracted_totals_reports_shortfall() {
    let c = catalog(&[("讲解", 100)]);
    let mut matched = Vec::new();
    for (name, times) in [("甲", "（12）次"), ("乙", "（9）次")] {
        let fields = vec![
            Field::new("考核月份", "3月"),
            Field::new("姓名", name),
            Field::new("讲解工作", times),
        ];
        matched.extend(extract("r.docx", &fields, &c).matched);
    }
    let aggs = aggregate(&matched);
    let result = allocate(&aggs, &[]);

    // 甲 1200, 乙 900: 只有总容量 1600, 缺口 500
    assert!(result.transfers.is_empty());
    assert!(result.warnings[0].starts_with("容量不足：无人可代收"));
    assert!(!result.conservation.passed);
    let gap = &result.conservation.total_raw - &result.conservation.total_final;
    assert_eq!(gap, BigDecimal::from(500));
}

#[test]
fn report_input_round_trips_through_json() {
    let json = r#"{"file_name":"a.docx","fields":[{"label":"姓名","value":"王五"}]}"#;
    let report: ReportInput = serde_json::from_str(json).unwrap();
    assert_eq!(report.fields.unwrap()[0].value, "王五");

    let missing: ReportInput = serde_json::from_str(r#"{"file_name":"b.docx"}"#).unwrap();
    assert!(missing.fields.is_none());
}
