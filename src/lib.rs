pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod service;
pub mod source;
pub mod util;

pub use config::AppConfig;
pub use error::SettleError;
pub use service::{SettlementAllocator, SettlementService};
