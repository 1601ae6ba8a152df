//! Error types for GitHub API operations.

use thiserror::Error;

use crate::error::SyncError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<GitHubError> for SyncError {
    fn from(err: GitHubError) -> Self {
        SyncError::network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = GitHubError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Not Found");
    }

    #[test]
    fn converts_to_network_sync_error() {
        let err = GitHubError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let sync_err: SyncError = err.into();
        assert!(matches!(sync_err, SyncError::Network { .. }));
        assert!(sync_err.to_string().contains("API error (500)"));
    }
}
