//! Dataset error types
//!
//! Errors raised while loading the CSV or looking up columns in it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The CSV file could not be opened
    #[error("Failed to open dataset {path:?}: {error}")]
    Open { path: PathBuf, error: String },

    /// The CSV content could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Requested column is not in the header row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Requested column exists but holds non-numeric cells
    #[error("Column '{column}' is not numeric (row {row}: {value:?})")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
