use thiserror::Error;

/// Errors caught at the per-repository task boundary.
///
/// Every failure inside a sync task collapses into one of these three
/// categories before it is logged and converted into a failed-task entry.
/// Nothing here is retried.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Non-success response or transport failure from either hosting API.
    #[error("network error: {message}")]
    Network { message: String },

    /// A git invocation could not be run or exited non-zero.
    #[error("process error: {message}")]
    Process { message: String },

    /// Local mirror directory could not be created or accessed.
    #[error("filesystem error: {message}")]
    Filesystem { message: String },

    /// Unexpected runtime failure outside the task categories above.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl SyncError {
    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a process error.
    #[inline]
    pub fn process(message: impl Into<String>) -> Self {
        Self::Process {
            message: message.into(),
        }
    }

    /// Create a filesystem error.
    #[inline]
    pub fn filesystem(message: impl Into<String>) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Extract a short error message suitable for display.
///
/// Takes the first line of an error message, which keeps progress events
/// and summary lines readable when an error carries multi-line detail.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
