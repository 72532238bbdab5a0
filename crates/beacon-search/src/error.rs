//! Error types for the search gateway.

use beacon_core::error::BeaconError;

/// Errors from the search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("query cannot be empty")]
    EmptyQuery,
    #[error("invalid boilerplate pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("failed to fetch search results: {0}")]
    Backend(String),
}

impl From<BeaconError> for SearchError {
    fn from(err: BeaconError) -> Self {
        SearchError::Backend(err.to_string())
    }
}
