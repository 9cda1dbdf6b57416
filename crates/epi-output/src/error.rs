//! Failure type shared by every output backend.

use thiserror::Error;

/// Anything that can go wrong while a backend writes run output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("database write failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Shorthand result for output operations.
pub type OutputResult<T> = Result<T, OutputError>;
