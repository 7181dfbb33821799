use crate::error::SettleError;
use crate::models::Catalog;
use crate::service::SettlementOutcome;
use crate::util::fmt_money;
use indexmap::IndexSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 一张导出表
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// 带 BOM 的 UTF-8 CSV, 表格软件可直接识别编码
    pub fn to_csv(&self) -> Result<Vec<u8>, SettleError> {
        let mut buf = UTF8_BOM.to_vec();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            wtr.write_record(&self.headers)?;
            for row in &self.rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        Ok(buf)
    }
}

/// 结算产出 → 全部导出表, 顺序与工作簿页签一致
pub fn build_tables(outcome: &SettlementOutcome, catalog: &Catalog) -> Vec<Table> {
    vec![
        detail_table(outcome),
        quant_table(outcome, catalog),
        person_table(outcome),
        exception_table(outcome),
        allocation_table(outcome),
        transfer_table(outcome),
        warning_table(outcome),
    ]
}

fn detail_table(outcome: &SettlementOutcome) -> Table {
    let mut t = Table::new(
        "A明细表",
        &["月份", "姓名", "标准事项汇总", "分项金额说明", "合计金额", "原文摘录（可选）"],
    );
    for a in &outcome.aggregates {
        let mut names: Vec<&String> = a.standard_names.iter().collect();
        names.sort();
        let breakdown: Vec<String> = names
            .iter()
            .map(|n| {
                let amount = a
                    .amounts_by_item
                    .get(n.as_str())
                    .map(fmt_money)
                    .unwrap_or_else(|| "0.00".to_string());
                format!("{}:{}", n, amount)
            })
            .collect();
        t.rows.push(vec![
            a.month.clone(),
            a.person.clone(),
            names.iter().map(|n| n.as_str()).collect::<Vec<_>>().join("+"),
            breakdown.join("；"),
            fmt_money(&a.total),
            String::new(),
        ]);
    }
    t
}

fn quant_table(outcome: &SettlementOutcome, catalog: &Catalog) -> Table {
    let item_names: IndexSet<&str> = catalog.items().iter().map(|it| it.name.as_str()).collect();
    let mut headers = vec!["月份", "姓名"];
    headers.extend(item_names.iter().copied());
    headers.push("合计金额");

    let mut t = Table::new("B量化表(简化)", &headers);
    for a in &outcome.aggregates {
        let mut row = vec![a.month.clone(), a.person.clone()];
        for name in &item_names {
            let count = a.counts_by_item.get(*name).copied().unwrap_or(0);
            row.push(count.to_string());
        }
        row.push(fmt_money(&a.total));
        t.rows.push(row);
    }
    t
}

fn person_table(outcome: &SettlementOutcome) -> Table {
    let mut t = Table::new(
        "C个人汇总表",
        &[
            "姓名",
            "工作事项列表",
            "各标准事项（次数+小计）",
            "原始应得合计金额",
            "本人到账金额（封顶后）",
            "超出部分",
            "备注",
        ],
    );
    for p in &outcome.summary {
        let detail: Vec<String> = p
            .standard_names
            .iter()
            .map(|n| {
                let count = p.counts_by_item.get(n).copied().unwrap_or(0);
                let amount = p
                    .amounts_by_item
                    .get(n)
                    .map(fmt_money)
                    .unwrap_or_else(|| "0.00".to_string());
                format!("{}({}次/{})", n, count, amount)
            })
            .collect();
        t.rows.push(vec![
            p.name.clone(),
            p.standard_names.join("+"),
            detail.join("；"),
            fmt_money(&p.raw),
            fmt_money(&p.capped_pay),
            fmt_money(&p.overflow),
            String::new(),
        ]);
    }
    t
}

fn exception_table(outcome: &SettlementOutcome) -> Table {
    let mut t = Table::new(
        "D异常待确认表",
        &["月份", "姓名", "原文", "问题类型", "建议匹配项", "匹配方式", "操作说明"],
    );
    for e in &outcome.exceptions {
        t.rows.push(vec![
            e.month.clone(),
            e.person.clone(),
            e.source_text.clone(),
            e.issue_kind.to_string(),
            e.suggestion.clone(),
            e.match_mode.to_string(),
            e.note.clone(),
        ]);
    }
    t
}

fn allocation_table(outcome: &SettlementOutcome) -> Table {
    let own = format!("本人到账金额（≤{}）", outcome.cap);
    let final_col = format!("该账户最终到账金额（≤{}）", outcome.cap);
    let mut t = Table::new(
        "E金额分配表",
        &[
            "姓名（账户）",
            "原始应得金额",
            own.as_str(),
            "超出部分",
            "代收来源明细",
            final_col.as_str(),
            "剩余容量",
            "备注",
        ],
    );
    for r in &outcome.allocation.rows {
        let sources: Vec<String> = r
            .received_from
            .iter()
            .map(|rc| format!("{}/{}", rc.source_person, fmt_money(&rc.amount)))
            .collect();
        t.rows.push(vec![
            r.name.clone(),
            fmt_money(&r.raw),
            fmt_money(&r.capped_pay),
            fmt_money(&r.overflow),
            sources.join("；"),
            fmt_money(&r.final_received),
            fmt_money(&r.remaining_capacity),
            String::new(),
        ]);
    }
    t
}

fn transfer_table(outcome: &SettlementOutcome) -> Table {
    let mut t = Table::new(
        "F转账通知表",
        &["转出人（代收人）", "转入人（实际应得者）", "转账金额", "原因", "备注"],
    );
    for tr in &outcome.allocation.transfers {
        t.rows.push(vec![
            tr.from_collector.clone(),
            tr.to_original_earner.clone(),
            fmt_money(&tr.amount),
            tr.reason.clone(),
            String::new(),
        ]);
    }
    t
}

fn warning_table(outcome: &SettlementOutcome) -> Table {
    let mut t = Table::new("校验与提示", &["提示"]);
    for w in &outcome.allocation.warnings {
        t.rows.push(vec![w.clone()]);
    }
    t
}

/// 每张表写成 `<dir>/<表名>.csv`, 返回写出的路径
pub fn write_bundle(dir: &Path, tables: &[Table]) -> Result<Vec<PathBuf>, SettleError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = dir.join(format!("{}.csv", table.name));
        let mut file = fs::File::create(&path)?;
        file.write_all(&table.to_csv()?)?;
        written.push(path);
    }
    tracing::info!("导出完成: {} 张表 -> {}", written.len(), dir.display());
    Ok(written)
}
