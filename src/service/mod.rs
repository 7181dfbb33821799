pub mod aggregator;
pub mod allocator;
pub mod extractor;
pub mod matcher;
pub mod pipeline;

pub use aggregator::{aggregate, summarize_by_person};
pub use allocator::{allocate, parse_priority_list, SettlementAllocator, DEFAULT_PAYOUT_CAP};
pub use extractor::{extract, extract_batch, extract_report};
pub use matcher::{match_standard, StandardMatch};
pub use pipeline::{SettlementOutcome, SettlementService};
