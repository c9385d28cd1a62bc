//! Export of soil records to files on the server.
//!
//! This crate provides:
//! - Timestamped, collision-free file naming in the export directory
//! - CSV serialization with a header row
//! - PDF table rendering
//!
//! Files are written server-side only; callers get the path back.

pub mod csv_writer;
pub mod error;
pub mod exporter;
pub mod naming;
pub mod pdf;

pub use error::{ExportError, ExportResult};
pub use exporter::{ExportFormat, ExportedFile, Exporter};

/// File name prefix for every export.
pub const EXPORT_FILE_PREFIX: &str = "soil_carbon_data";
