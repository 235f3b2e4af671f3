//! Error types for the quantable library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quantable operations.
#[derive(Debug, Error)]
pub enum QuantableError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing delimited data.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Metadata claims a column is numeric but a value cannot be parsed as a
    /// number. Metadata and data have diverged; this is not recoverable.
    #[error("Metadata says column '{column}' is numeric but value '{value}' is not a number")]
    CoercionContract { column: String, value: String },

    /// Normalization was handed a table column with no metadata entry.
    #[error("No metadata for column '{column}'")]
    MissingMetadata { column: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for quantable operations.
pub type Result<T> = std::result::Result<T, QuantableError>;
