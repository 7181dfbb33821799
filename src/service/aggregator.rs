use crate::models::{MatchedItem, PersonMonthAggregate, PersonSummary};
use crate::util::money::{max, min, round2};
use bigdecimal::{BigDecimal, Zero};
use indexmap::{IndexMap, IndexSet};

/// 计价明细 → 按 (月份, 姓名) 汇总
///
/// 月份或姓名为空的明细不参与汇总; 结果按月份、姓名字典序排列。
pub fn aggregate(matched: &[MatchedItem]) -> Vec<PersonMonthAggregate> {
    let mut groups: IndexMap<(String, String), PersonMonthAggregate> = IndexMap::new();

    for m in matched {
        if m.person.is_empty() || m.month.is_empty() {
            continue;
        }
        let agg = groups
            .entry((m.month.clone(), m.person.clone()))
            .or_insert_with(|| PersonMonthAggregate {
                month: m.month.clone(),
                person: m.person.clone(),
                standard_names: IndexSet::new(),
                counts_by_item: IndexMap::new(),
                amounts_by_item: IndexMap::new(),
                total: BigDecimal::zero(),
                notes: Vec::new(),
            });

        agg.standard_names.insert(m.standard_name.clone());
        *agg.counts_by_item.entry(m.standard_name.clone()).or_insert(0) += m.count;
        let amount = agg
            .amounts_by_item
            .entry(m.standard_name.clone())
            .or_insert_with(BigDecimal::zero);
        *amount += m.amount();
        agg.total += m.amount();
        if let Some(note) = &m.person_note {
            if !agg.notes.contains(note) {
                agg.notes.push(note.clone());
            }
        }
    }

    let mut out: Vec<PersonMonthAggregate> = groups.into_values().collect();
    out.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.person.cmp(&b.person)));
    out
}

/// 个人跨月汇总 (C 表): 合计、封顶后到账与超出部分, 按姓名排序
pub fn summarize_by_person(aggs: &[PersonMonthAggregate], cap: &BigDecimal) -> Vec<PersonSummary> {
    let mut people: IndexMap<String, PersonSummary> = IndexMap::new();

    for a in aggs {
        let p = people
            .entry(a.person.clone())
            .or_insert_with(|| PersonSummary {
                name: a.person.clone(),
                standard_names: Vec::new(),
                counts_by_item: IndexMap::new(),
                amounts_by_item: IndexMap::new(),
                raw: BigDecimal::zero(),
                capped_pay: BigDecimal::zero(),
                overflow: BigDecimal::zero(),
            });
        for name in &a.standard_names {
            if !p.standard_names.contains(name) {
                p.standard_names.push(name.clone());
            }
            let count = a.counts_by_item.get(name).copied().unwrap_or(0);
            *p.counts_by_item.entry(name.clone()).or_insert(0) += count;
            if let Some(amount) = a.amounts_by_item.get(name) {
                *p.amounts_by_item
                    .entry(name.clone())
                    .or_insert_with(BigDecimal::zero) += amount;
            }
        }
        p.raw += &a.total;
    }

    let zero = BigDecimal::zero();
    let mut out: Vec<PersonSummary> = people
        .into_values()
        .map(|mut p| {
            p.standard_names.sort();
            p.raw = round2(&p.raw);
            p.capped_pay = round2(&min(cap, &p.raw));
            p.overflow = round2(&max(&zero, &(&p.raw - cap)));
            p
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}
