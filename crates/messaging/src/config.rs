//! Configuration for the push-gateway client

use crate::dispatch::DEFAULT_TOPIC;
use crate::provider::ProviderError;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production push gateway endpoint
const DEFAULT_PUSH_URL: &str = "https://push.vietcal.app";

/// Push-gateway client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Base URL of the push gateway
    pub base_url: String,
    /// Server key for authenticated sends
    pub server_key: Option<String>,
    /// Topic used when a message does not name one
    pub default_topic: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PUSH_URL.to_string(),
            server_key: None,
            default_topic: DEFAULT_TOPIC.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl MessagingConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `VIETCAL_PUSH_URL`: Base URL of the push gateway
    /// - `VIETCAL_PUSH_KEY`: Server key for authenticated sends
    /// - `VIETCAL_PUSH_DEFAULT_TOPIC`: Fallback topic (default `general`)
    /// - `VIETCAL_PUSH_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> Result<Self, ProviderError> {
        let base_url =
            env::var("VIETCAL_PUSH_URL").unwrap_or_else(|_| DEFAULT_PUSH_URL.to_string());
        let server_key = env::var("VIETCAL_PUSH_KEY").ok();
        let default_topic = env::var("VIETCAL_PUSH_DEFAULT_TOPIC")
            .unwrap_or_else(|_| DEFAULT_TOPIC.to_string());
        let timeout = env::var("VIETCAL_PUSH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let config = Self {
            base_url,
            server_key,
            default_topic,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the server key
    #[must_use]
    pub fn with_server_key(mut self, key: impl Into<String>) -> Self {
        self.server_key = Some(key.into());
        self
    }

    /// Builder-style method to set the default topic
    #[must_use]
    pub fn with_default_topic(mut self, topic: impl Into<String>) -> Self {
        self.default_topic = topic.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.base_url.is_empty() {
            return Err(ProviderError::config("base_url cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProviderError::config(
                "base_url must start with http:// or https://",
            ));
        }
        if self.default_topic.trim().is_empty() {
            return Err(ProviderError::config("default_topic cannot be empty"));
        }
        if self.timeout.is_zero() {
            return Err(ProviderError::config("timeout cannot be zero"));
        }
        Ok(())
    }
}
