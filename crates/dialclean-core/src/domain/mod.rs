pub mod phone;
pub mod table;

pub use phone::normalize_us_phone;
pub use table::{phonumber_column, RawTable, PHONUMBER_HEADER};
