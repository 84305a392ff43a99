pub mod clean;
pub mod error;
pub mod paths;

use crate::clean::dedupe_non_blank;
use crate::error::Result;
use csv::ReaderBuilder;
use dialclean_core::domain::PHONUMBER_HEADER;
use std::path::{Path, PathBuf};

pub use clean::stop_list_from_table;
pub use error::{StoreError, StoreErrorKind};

/// Handle to the persisted STOP list.
///
/// The store is passed to operations by the caller rather than living as a
/// process-wide global. Last write wins; there is no locking, this is a
/// single-operator tool.
pub struct StopListStore {
    path: PathBuf,
}

impl StopListStore {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted stop list.
    ///
    /// A missing, unreadable, or zero-column file is an empty list, never an
    /// error: filtering proceeds against nothing rather than halting. The
    /// first column is the phone column regardless of its header; blanks and
    /// duplicates are dropped, first occurrence kept.
    pub fn load(&self) -> Vec<String> {
        let Ok(bytes) = std::fs::read(&self.path) else {
            return Vec::new();
        };
        let text = String::from_utf8_lossy(&bytes);

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut values = Vec::new();
        for record in reader.records() {
            let Ok(record) = record else {
                return Vec::new();
            };
            values.push(record.get(0).unwrap_or("").to_string());
        }

        dedupe_non_blank(values)
    }

    /// Overwrites the persisted stop list with the given entries, no merge.
    /// Entries are written as handed in; the upload path cleans them first.
    pub fn replace(&self, entries: &[String]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record([PHONUMBER_HEADER])?;
        for entry in entries {
            writer.write_record([entry.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
