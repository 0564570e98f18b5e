//! Error types for store operations

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (connection refused, timeout).
    /// Surfaced per record; the batch continues and a full retry is safe
    /// because writes are idempotent merges.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// HTTP request failed for a non-transport reason
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// Store returned an error response
    #[error("store error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the store
        message: String,
    },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Classify a transport error: connection and timeout failures mean the
    /// store is unavailable, everything else stays a request error.
    pub fn from_request(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Request(err)
        }
    }

    /// Whether a whole-batch retry is worthwhile for this error
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Request(_) | Self::Json(_) | Self::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_retryable() {
        assert!(StoreError::Unavailable("connection refused".into()).is_retryable());
    }

    #[test]
    fn test_server_errors_retryable_client_errors_not() {
        assert!(StoreError::api_response(503, "down").is_retryable());
        assert!(StoreError::api_response(429, "slow down").is_retryable());
        assert!(!StoreError::api_response(400, "bad doc").is_retryable());
        assert!(!StoreError::config("missing url").is_retryable());
    }
}
