use crate::domain::phone::normalize_us_phone;
use crate::error::CoreError;

/// Header used for every emitted phone column, including the persisted
/// stop list. External format is stable; do not rename.
pub const PHONUMBER_HEADER: &str = "phonumber";

/// A parsed input file: one header row plus string cells.
///
/// Cells hold whatever text the source file carried; absent or short cells
/// are the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell at (row, col), empty string when the row is shorter than the
    /// header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Builds the normalized phone column from the named source column, one
/// output value per input row in the original order. Unparseable cells come
/// through as the empty-string sentinel.
pub fn phonumber_column(
    table: &RawTable,
    column: &str,
    keep_plus: bool,
) -> Result<Vec<String>, CoreError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| CoreError::UnknownColumn(column.to_string()))?;

    Ok((0..table.rows.len())
        .map(|row| normalize_us_phone(table.cell(row, idx), keep_plus))
        .collect())
}
