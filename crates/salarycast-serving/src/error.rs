//! Error types for the salarycast-serving crate.

use thiserror::Error;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur while loading artifacts or serving predictions.
#[derive(Debug, Error)]
pub enum ServingError {
    /// Model artifact unavailable or undeserializable.
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// Feature-schema artifact unavailable or undeserializable.
    #[error("Failed to load feature schema: {0}")]
    SchemaLoad(String),

    /// No model is currently loaded.
    #[error("No model is currently loaded")]
    ModelNotLoaded,

    /// The model's prediction call failed.
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServingError {
    /// Create a model load error.
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create a schema load error.
    pub fn schema_load(msg: impl Into<String>) -> Self {
        Self::SchemaLoad(msg.into())
    }

    /// Create a prediction error.
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if this is a client error (bad request).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is a server-side failure.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::ModelLoad(_)
                | Self::SchemaLoad(_)
                | Self::ModelNotLoaded
                | Self::Prediction(_)
                | Self::Internal(_)
        )
    }

    /// Check if this is a fatal precondition failure: artifacts that never
    /// loaded, so no prediction can be attempted until an operator fixes the
    /// export directory.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::ModelLoad(_) | Self::SchemaLoad(_) | Self::ModelNotLoaded
        )
    }
}
