//! 外部输入适配: 量化表 CSV 与绩效表表格行

pub mod catalog;
pub mod table;

pub use catalog::{load_catalog, load_catalog_path};
pub use table::{fields_from_rows, report_from_tables};
