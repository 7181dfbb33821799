pub mod cn_number;
pub mod money;
pub mod name;

pub use cn_number::cn_to_number;
pub use money::{fmt_money, round2};
pub use name::{normalize_name, PersonName};
