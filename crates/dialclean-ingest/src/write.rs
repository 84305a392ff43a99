use crate::error::Result;
use dialclean_core::domain::PHONUMBER_HEADER;
use std::path::Path;

/// Writes the output artifact: a single `phonumber` column, one row per
/// value, no index column.
pub fn write_phonumber_csv(path: &Path, phones: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([PHONUMBER_HEADER])?;
    for phone in phones {
        writer.write_record([phone.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
