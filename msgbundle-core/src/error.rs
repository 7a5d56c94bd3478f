//! Error types for bundle operations

use thiserror::Error;

/// Errors raised by bundles, builders and the bundled sources.
#[derive(Debug, Error)]
pub enum BundleError {
    /// An absent key or source was supplied where one is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Malformed JSON handed to [`MapSource::from_json`](crate::MapSource::from_json)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON document whose root is not an object
    #[error("Expected a JSON object of messages, found {0}")]
    NotAnObject(&'static str),
}

impl BundleError {
    /// Whether this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BundleError::InvalidArgument(_))
    }
}
