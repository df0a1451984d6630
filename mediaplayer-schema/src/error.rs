//! Error types for media object decoding

use thiserror::Error;

/// Errors that can occur while decoding media descriptions and options
#[derive(Error, Debug)]
pub enum SchemaError {
    /// JSON deserialization failed
    #[error("JSON deserialization failed: {0}")]
    JsonDeserializationFailed(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonDeserializationFailed(err.to_string())
    }
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
