//! Error types for the diff crate.

use jdiff_types::JsonPath;

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The document nests deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit} at path {path:?}")]
    DepthLimitExceeded { path: JsonPath, limit: usize },

    /// An audit change map did not have the `{ field: { from, to } }` shape.
    #[error("invalid change set: {0}")]
    InvalidChangeSet(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        DiffError::Serialization(err.to_string())
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
