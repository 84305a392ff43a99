pub mod domain;
pub mod error;
pub mod filter;

pub use domain::*;
pub use error::CoreError;
pub use filter::apply_stop_list;
