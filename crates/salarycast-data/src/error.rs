//! Error types for the salarycast-data crate.

use thiserror::Error;

/// Result type alias for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or analyzing the salary dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The CSV file has no header line.
    #[error("Dataset file is empty: {0}")]
    EmptyFile(String),

    /// A required column is missing from the CSV header.
    #[error("Dataset is missing required column: {0:?}")]
    MissingColumn(String),

    /// I/O error while reading the dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
