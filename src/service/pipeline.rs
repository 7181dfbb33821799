use crate::models::{
    AllocationResult, Catalog, ExtractOutcome, MatchedItem, PersonMonthAggregate, PersonSummary,
    ReportInput, ReviewException,
};
use crate::service::aggregator::{aggregate, summarize_by_person};
use crate::service::allocator::SettlementAllocator;
use crate::service::extractor::extract_batch;
use bigdecimal::BigDecimal;
use serde::Serialize;

/// 一次完整结算的全部产出 (A~F 表与提示的数据来源)
#[derive(Debug, Clone, Serialize)]
pub struct SettlementOutcome {
    pub cap: BigDecimal,
    pub matched: Vec<MatchedItem>,
    pub exceptions: Vec<ReviewException>,
    pub aggregates: Vec<PersonMonthAggregate>,
    pub summary: Vec<PersonSummary>,
    pub allocation: AllocationResult,
}

/// 结算服务: 抽取 → 人月汇总 → 封顶分配
///
/// 无状态, 每次调用互不影响。
#[derive(Debug, Clone, Default)]
pub struct SettlementService {
    allocator: SettlementAllocator,
}

impl SettlementService {
    pub fn new(cap: BigDecimal) -> Self {
        Self {
            allocator: SettlementAllocator::new(cap),
        }
    }

    pub fn cap(&self) -> &BigDecimal {
        self.allocator.cap()
    }

    pub fn extract(&self, catalog: &Catalog, reports: &[ReportInput]) -> ExtractOutcome {
        extract_batch(reports, catalog)
    }

    pub fn settle(
        &self,
        catalog: &Catalog,
        reports: &[ReportInput],
        priority_collectors: &[String],
    ) -> SettlementOutcome {
        tracing::info!(
            "开始结算: 标准事项 {} 项, 绩效表 {} 份, 优先代收 {} 人",
            catalog.len(),
            reports.len(),
            priority_collectors.len()
        );

        let ExtractOutcome {
            matched,
            exceptions,
        } = self.extract(catalog, reports);
        let aggregates = aggregate(&matched);
        let summary = summarize_by_person(&aggregates, self.cap());
        let allocation = self.allocator.allocate(&aggregates, priority_collectors);

        tracing::info!(
            "结算完成: 明细 {} 条, 人月 {} 行, 异常 {} 条",
            matched.len(),
            aggregates.len(),
            exceptions.len()
        );

        SettlementOutcome {
            cap: self.cap().clone(),
            matched,
            exceptions,
            aggregates,
            summary,
            allocation,
        }
    }
}
