//! Export orchestration: naming, encoding and writing on a blocking thread.

use crate::error::ExportResult;
use crate::naming::{create_export_file, timestamp_now};
use crate::{csv_writer, pdf};
use soil_core::SoilRecord;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Supported export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// Human-readable format name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file written by an export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Data rows written, header excluded.
    pub rows: usize,
}

/// Writes soil record exports into one directory.
#[derive(Clone, Debug)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Create an exporter writing into `dir`; the directory is created on
    /// first export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory receiving exports.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export records in `format`, encoding on a blocking thread.
    pub async fn export(
        &self,
        format: ExportFormat,
        records: Vec<SoilRecord>,
    ) -> ExportResult<ExportedFile> {
        let exporter = self.clone();
        tokio::task::spawn_blocking(move || exporter.export_blocking(format, &records)).await?
    }

    /// Export records in `format` on the current thread.
    pub fn export_blocking(
        &self,
        format: ExportFormat,
        records: &[SoilRecord],
    ) -> ExportResult<ExportedFile> {
        let started = Instant::now();
        let (path, file) = create_export_file(&self.dir, &timestamp_now(), format.extension())?;

        let written = match format {
            ExportFormat::Csv => csv_writer::write_csv(&file, records),
            ExportFormat::Pdf => pdf::write_pdf(&file, records).map(|_| ()),
        }
        .and_then(|()| Ok((&file).flush()?));

        if let Err(e) = written {
            // Do not leave a truncated export behind.
            if let Err(remove_err) = std::fs::remove_file(&path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "Failed to remove partial export"
                );
            }
            return Err(e);
        }

        tracing::info!(
            format = %format,
            path = %path.display(),
            rows = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Export written"
        );

        Ok(ExportedFile {
            format,
            path,
            rows: records.len(),
        })
    }
}
