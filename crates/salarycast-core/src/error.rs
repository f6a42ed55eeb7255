//! Error types for the salarycast-core crate.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while validating raw inputs or loading schemas.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown experience-level code.
    #[error("Unknown experience level code: {0:?} (expected EN, MI, SE or EX)")]
    InvalidExperienceLevel(String),

    /// Unknown employment-type code.
    #[error("Unknown employment type code: {0:?} (expected FT, PT, CT or FL)")]
    InvalidEmploymentType(String),

    /// Unknown company-size code.
    #[error("Unknown company size code: {0:?} (expected S, M or L)")]
    InvalidCompanySize(String),

    /// Remote ratio outside the supported {0, 50, 100} domain.
    #[error("Unsupported remote ratio: {0} (expected 0, 50 or 100)")]
    InvalidRemoteRatio(u32),

    /// Country code that is not two ASCII letters.
    #[error("Invalid ISO-2 country code: {0:?}")]
    InvalidCountryCode(String),

    /// Work year outside the supported range.
    #[error("Work year {0} is outside the supported range {min}-{max}", min = crate::input::WorkYear::MIN, max = crate::input::WorkYear::MAX)]
    YearOutOfRange(u16),

    /// Job title that is empty after trimming.
    #[error("Job title must not be empty")]
    EmptyJobTitle,

    /// Required builder field was never set.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Duplicate column name in a feature schema.
    #[error("Duplicate column in feature schema: {0:?}")]
    DuplicateColumn(String),

    /// Schema artifact could not be parsed.
    #[error("Failed to parse feature schema: {0}")]
    SchemaParse(String),

    /// I/O error while reading an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a schema parse error.
    pub fn schema_parse(msg: impl Into<String>) -> Self {
        Self::SchemaParse(msg.into())
    }
}
