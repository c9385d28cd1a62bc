//! Soil store error types.

use thiserror::Error;

/// Soil store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("connection timed out after {0}s")]
    Timeout(u64),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Short machine-readable kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Timeout(_) => "timeout",
            Self::Query(_) => "query",
            Self::Config(_) => "config",
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
