//! Export error types.

use thiserror::Error;

/// Export operation errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("no free file name for {0} after {1} attempts")]
    NameExhausted(String, u32),

    #[error("export task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
