use crate::models::{
    AccountSettlement, AllocationResult, AllocationRow, Collector, ConservationCheck,
    PersonMonthAggregate, Receipt, Transfer,
};
use crate::util::money::{ceil_div, fmt_money, max, min, round2, sum};
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::str::FromStr;

/// 每个账户的到账上限 (元)
pub const DEFAULT_PAYOUT_CAP: i64 = 800;

pub const TRANSFER_REASON: &str = "代收超出部分";

/// 拆分代收名单文本: 换行、中英文逗号/分号分隔, 去空白与空项
pub fn parse_priority_list(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, '\n' | ',' | '，' | ';' | '；'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 封顶结算服务: 每人到账不超过 cap, 超出部分由有剩余容量的账户代收
#[derive(Debug, Clone)]
pub struct SettlementAllocator {
    cap: BigDecimal,
}

impl Default for SettlementAllocator {
    fn default() -> Self {
        Self::new(BigDecimal::from(DEFAULT_PAYOUT_CAP))
    }
}

impl SettlementAllocator {
    pub fn new(cap: BigDecimal) -> Self {
        Self { cap: round2(&cap) }
    }

    pub fn cap(&self) -> &BigDecimal {
        &self.cap
    }

    /// 按人跨月合计, 保持人员首次出现顺序
    pub fn rows(&self, aggs: &[PersonMonthAggregate]) -> Vec<AllocationRow> {
        let mut people: IndexMap<&str, BigDecimal> = IndexMap::new();
        for a in aggs {
            *people
                .entry(a.person.as_str())
                .or_insert_with(BigDecimal::zero) += &a.total;
        }

        let zero = BigDecimal::zero();
        people
            .into_iter()
            .map(|(name, raw)| {
                let raw = round2(&raw);
                AllocationRow {
                    name: name.to_string(),
                    capped_pay: round2(&min(&self.cap, &raw)),
                    overflow: round2(&max(&zero, &(&raw - &self.cap))),
                    raw,
                }
            })
            .collect()
    }

    /// 封顶 + 代收分配 + 一致性校验
    ///
    /// 代收人排序: 在优先名单中的按名单位置, 其余排在后面并按剩余容量从大到小。
    /// 某个超出来源找不到任何可用代收人时记录缺口并停止处理后续来源。
    pub fn allocate(
        &self,
        aggs: &[PersonMonthAggregate],
        priority_collectors: &[String],
    ) -> AllocationResult {
        let rows = self.rows(aggs);
        let zero = BigDecimal::zero();

        let mut collectors: Vec<Collector> = rows
            .iter()
            .filter(|r| r.capped_pay < self.cap)
            .map(|r| Collector {
                name: r.name.clone(),
                remaining_capacity: round2(&(&self.cap - &r.capped_pay)),
                received_from: Vec::new(),
            })
            .collect();

        let priority: HashMap<&str, usize> = priority_collectors
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut warnings: Vec<String> = Vec::new();
        let mut transfers: Vec<Transfer> = Vec::new();

        for src in rows.iter().filter(|r| r.overflow > zero) {
            let mut remaining = src.overflow.clone();
            if next_collector(&collectors, &priority).is_none() {
                tracing::warn!("容量不足: {} 无人可代收, 缺口 {}", src.name, fmt_money(&remaining));
                warnings.push(format!(
                    "容量不足：无人可代收。缺口金额={}",
                    fmt_money(&remaining)
                ));
                break;
            }

            let mut drawn = 0usize;
            while remaining > zero {
                // 每次抽取前按当前剩余容量重新排序
                let Some(idx) = next_collector(&collectors, &priority) else {
                    break;
                };
                let collector = &mut collectors[idx];
                let give = round2(&min(&collector.remaining_capacity, &remaining));
                if give <= zero {
                    break;
                }
                collector.remaining_capacity = round2(&(&collector.remaining_capacity - &give));
                collector.received_from.push(Receipt {
                    source_person: src.name.clone(),
                    amount: give.clone(),
                });
                remaining = round2(&(&remaining - &give));
                drawn += 1;

                transfers.push(Transfer {
                    from_collector: collector.name.clone(),
                    to_original_earner: src.name.clone(),
                    amount: give,
                    reason: TRANSFER_REASON.to_string(),
                });
            }

            if remaining > zero {
                tracing::warn!("容量不足: {} 仍有缺口 {}", src.name, fmt_money(&remaining));
                warnings.push(format!(
                    "容量不足：{} 的超出部分仍有缺口 {}，需要新增代收账户数≈{}",
                    src.name,
                    fmt_money(&remaining),
                    ceil_div(&remaining, &self.cap)
                ));
            }
            if drawn > 1 {
                warnings.push(format!("{} 超出部分需多人代收（已拆分）", src.name));
            }
        }

        let accounts: Vec<AccountSettlement> = rows
            .iter()
            .map(|r| {
                let received_from = collectors
                    .iter()
                    .find(|c| c.name == r.name)
                    .map(|c| c.received_from.clone())
                    .unwrap_or_default();
                let received = sum(received_from.iter().map(|rc| &rc.amount));
                let final_received = round2(&(&r.capped_pay + &received));
                AccountSettlement {
                    name: r.name.clone(),
                    raw: r.raw.clone(),
                    capped_pay: r.capped_pay.clone(),
                    overflow: r.overflow.clone(),
                    received_from,
                    remaining_capacity: round2(&(&self.cap - &final_received)),
                    final_received,
                }
            })
            .collect();

        let transfers = merge_transfers(transfers);
        let conservation = check_conservation(&accounts);
        if conservation.passed {
            warnings.push(format!(
                "一致性校验通过：最终到账合计={} = 原始应得合计={}",
                fmt_money(&conservation.total_final),
                fmt_money(&conservation.total_raw)
            ));
        } else {
            warnings.push(format!(
                "一致性校验失败：最终到账合计={} ≠ 原始应得合计={}",
                fmt_money(&conservation.total_final),
                fmt_money(&conservation.total_raw)
            ));
        }

        tracing::info!(
            "分配完成: 账户 {} 个, 转账 {} 笔, 提示 {} 条",
            accounts.len(),
            transfers.len(),
            warnings.len()
        );

        AllocationResult {
            rows: accounts,
            transfers,
            warnings,
            conservation,
        }
    }
}

/// 使用默认上限 (800) 分配
pub fn allocate(aggs: &[PersonMonthAggregate], priority_collectors: &[String]) -> AllocationResult {
    SettlementAllocator::default().allocate(aggs, priority_collectors)
}

/// 当前排第一的可用代收人下标 (剩余容量 > 0)
fn next_collector(collectors: &[Collector], priority: &HashMap<&str, usize>) -> Option<usize> {
    let zero = BigDecimal::zero();
    collectors
        .iter()
        .enumerate()
        .filter(|(_, c)| c.remaining_capacity > zero)
        // min_by_key 同键取第一个, 保持账户原始顺序
        .min_by_key(|(_, c)| {
            (
                priority.get(c.name.as_str()).copied().unwrap_or(usize::MAX),
                Reverse(c.remaining_capacity.clone()),
            )
        })
        .map(|(i, _)| i)
}

/// 相同 (代收人, 实际应得者, 原因) 的转账合并为一条
fn merge_transfers(transfers: Vec<Transfer>) -> Vec<Transfer> {
    let mut merged: IndexMap<(String, String, String), BigDecimal> = IndexMap::new();
    for t in transfers {
        let entry = merged
            .entry((t.from_collector, t.to_original_earner, t.reason))
            .or_insert_with(BigDecimal::zero);
        *entry = round2(&(&*entry + &t.amount));
    }
    merged
        .into_iter()
        .map(|((from_collector, to_original_earner, reason), amount)| Transfer {
            from_collector,
            to_original_earner,
            amount,
            reason,
        })
        .collect()
}

fn check_conservation(accounts: &[AccountSettlement]) -> ConservationCheck {
    let total_raw = round2(&sum(accounts.iter().map(|a| &a.raw)));
    let total_final = round2(&sum(accounts.iter().map(|a| &a.final_received)));
    let tolerance = BigDecimal::from_str("0.01").unwrap_or_else(|_| BigDecimal::zero());
    let passed = (&total_raw - &total_final).abs() <= tolerance;
    ConservationCheck {
        total_raw,
        total_final,
        passed,
    }
}
