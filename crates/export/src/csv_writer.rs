//! CSV serialization of soil records.

use crate::error::ExportResult;
use soil_core::SoilRecord;
use std::io::Write;

/// Write a header row followed by one row per record.
///
/// The header is written even when `records` is empty.
pub fn write_csv<W: Write>(writer: W, records: &[SoilRecord]) -> ExportResult<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(SoilRecord::FIELD_NAMES)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}
