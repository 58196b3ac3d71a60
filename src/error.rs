//! Error types for the benchmark harness.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur in the benchmark harness.
///
/// Everything that can go wrong while an operation is on the wire —
/// transport failures, non-success statuses, undecodable bodies — collapses
/// into the single [`BenchError::Request`] kind. The remaining variants cover
/// client-side concerns before a request is ever issued.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Error reading an upload file.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A benchmark API request failed.
    #[error("Request failed: {0}")]
    Request(String),
}

impl BenchError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for BenchError {
    fn from(err: reqwest::Error) -> Self {
        BenchError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Request(format!("invalid response body: {}", err))
    }
}
