//! Error types for GitLab API operations.

use thiserror::Error;

use crate::error::SyncError;

/// Errors that can occur when interacting with the GitLab API.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request body could not be encoded.
    #[error("encoding error: {0}")]
    Encode(String),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<GitLabError> for SyncError {
    fn from(err: GitLabError) -> Self {
        SyncError::network(err.to_string())
    }
}
