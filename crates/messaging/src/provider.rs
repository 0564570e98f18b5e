//! The push-provider seam

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Push-provider failures, kept distinct so callers can react to the exact
/// cause rather than a flattened message.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider did not answer in time.
    #[error("provider timeout after {0:?}")]
    Timeout(Duration),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned an error response
    #[error("provider error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProviderError {
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
}

/// External push-messaging provider.
///
/// One topic send per call. Implementations make exactly one outbound
/// request and never retry internally; a retry policy belongs to the
/// caller, which can lean on the dispatch being stateless.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Send a notification to every current subscriber of `topic`.
    /// Returns the provider's opaque message identifier.
    async fn send_to_topic(
        &self,
        topic: &str,
        title: &str,
        body: &str,
    ) -> Result<String, ProviderError>;
}
