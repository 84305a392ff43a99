use crate::error::Result;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use dialclean_core::domain::RawTable;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Reads a tabular input file into a [`RawTable`].
///
/// `.xlsx` and `.xls` go through the spreadsheet reader; anything else is
/// treated as delimited text with a header row. Returns an error when the
/// file cannot be read or the container is corrupt; an empty or header-only
/// file parses to an empty table.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("xlsx") | Some("xls") => read_spreadsheet(path),
        _ => read_delimited(path),
    }
}

fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(RawTable::default()),
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(render_cell).collect(),
        None => return Ok(RawTable::default()),
    };
    let rows: Vec<Vec<String>> = rows
        .map(|cells| cells.iter().map(render_cell).collect())
        .collect();

    Ok(RawTable::new(headers, rows))
}

// Integral floats render without a fractional part so a numeric phone cell
// like 5551234567.0 reaches the normalizer as its plain digit string.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) if value.is_finite() && value.fract() == 0.0 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    }
}

fn read_delimited(path: &Path) -> Result<RawTable> {
    let bytes = fs::read(path)?;
    let text = decode_text(&bytes);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Ok(RawTable::default());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}

// UTF-8 first, Windows-1252 when that fails. Legacy CRM exports still show
// up in single-byte encodings.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            Cow::Owned(text.into_owned())
        }
    }
}
