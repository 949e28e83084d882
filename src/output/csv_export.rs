//! CSV export of course records
//!
//! The file is always overwritten. The header row is written even when
//! there are no records, and rows use CRLF terminators.

use crate::model::{CourseRecord, CSV_HEADER};
use crate::HarvestError;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `records` to a CSV file at `path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(HarvestError)` - The file could not be created or written
pub fn export_csv(records: &[CourseRecord], path: &Path) -> Result<(), HarvestError> {
    let file = File::create(path)?;
    write_csv(records, file)
}

/// Writes the header and one row per record, in order, to `writer`
pub fn write_csv<W: Write>(records: &[CourseRecord], writer: W) -> Result<(), HarvestError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}
