pub mod aggregate;
pub mod allocation;
pub mod catalog;
pub mod matched;
pub mod report;

pub use aggregate::{PersonMonthAggregate, PersonSummary};
pub use allocation::{
    AccountSettlement, AllocationResult, AllocationRow, Collector, ConservationCheck, Receipt,
    Transfer,
};
pub use catalog::{Catalog, StandardItem};
pub use matched::{
    ExtractOutcome, IssueKind, MatchMode, MatchedItem, ReportSubject, ReviewException,
};
pub use report::{Field, ReportInput};
