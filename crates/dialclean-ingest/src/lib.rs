pub mod error;
pub mod read;
pub mod write;

pub use error::{IngestError, Result};
pub use read::read_table;
pub use write::write_phonumber_csv;
