//! Export file naming.
//!
//! Names follow `soil_carbon_data_<YYYYMMDD_HHMMSS>.<ext>`. When that name is
//! taken, `_1`, `_2`, ... is inserted before the extension. Files are opened
//! with create-new semantics, so an existing export is never overwritten.

use crate::EXPORT_FILE_PREFIX;
use crate::error::{ExportError, ExportResult};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;

/// Upper bound on suffixed names tried for one timestamp.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Current time as `YYYYMMDD_HHMMSS`, local time when the offset is known.
pub fn timestamp_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

/// Format a timestamp as `YYYYMMDD_HHMMSS`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year][month][day]_[hour][minute][second]");
    at.format(&format).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to format export timestamp, using unix time");
        at.unix_timestamp().to_string()
    })
}

/// File name for an export; `attempt` 0 has no suffix.
pub fn export_file_name(timestamp: &str, attempt: u32, extension: &str) -> String {
    if attempt == 0 {
        format!("{EXPORT_FILE_PREFIX}_{timestamp}.{extension}")
    } else {
        format!("{EXPORT_FILE_PREFIX}_{timestamp}_{attempt}.{extension}")
    }
}

/// Create the export directory if needed and a new, unused file in it.
pub fn create_export_file(
    dir: &Path,
    timestamp: &str,
    extension: &str,
) -> ExportResult<(PathBuf, File)> {
    std::fs::create_dir_all(dir)?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(export_file_name(timestamp, attempt, extension));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                if attempt > 0 {
                    tracing::debug!(
                        path = %path.display(),
                        attempt,
                        "Export name already taken, using suffixed name"
                    );
                }
                return Ok((path, file));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(ExportError::NameExhausted(
        export_file_name(timestamp, 0, extension),
        MAX_NAME_ATTEMPTS,
    ))
}
