use crate::error::{Result, StoreError};
use dialclean_core::domain::RawTable;
use std::collections::HashSet;

/// Extracts stop-list entries from an uploaded replacement table.
///
/// The first column is the phone column regardless of its header name;
/// every other column is dropped. A table with no columns at all rejects
/// the upload. Values are taken as-is, so the caller decides whether they
/// were normalized.
pub fn stop_list_from_table(table: &RawTable) -> Result<Vec<String>> {
    if table.is_empty() {
        return Err(StoreError::EmptyUpload);
    }

    let values = (0..table.rows.len()).map(|row| table.cell(row, 0).to_string());
    Ok(dedupe_non_blank(values))
}

/// Drops blanks and duplicate values, keeping the first occurrence of each.
pub(crate) fn dedupe_non_blank(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
