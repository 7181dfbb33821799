//! 结算结果导出 (A~F 表 + 校验与提示), CSV 格式, 中文表头

pub mod tables;

pub use tables::{build_tables, write_bundle, Table};
