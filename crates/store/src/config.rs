//! Configuration for the document-store client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production document store endpoint
const DEFAULT_STORE_URL: &str = "https://store.vietcal.app";

/// Local emulator endpoint, matching the emulator's default port
const EMULATOR_URL: &str = "http://localhost:8080";

/// Document-store client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the document store
    pub base_url: String,
    /// Service key for authenticated writes
    pub service_key: Option<String>,
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

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            service_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `VIETCAL_STORE_URL`: Base URL of the document store
    /// - `VIETCAL_STORE_KEY`: Service key for authenticated writes
    /// - `VIETCAL_STORE_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> StoreResult<Self> {
        let base_url =
            env::var("VIETCAL_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let service_key = env::var("VIETCAL_STORE_KEY").ok();
        let timeout = env::var("VIETCAL_STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let config = Self {
            base_url,
            service_key,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration targeting the local emulator
    #[must_use]
    pub fn emulator() -> Self {
        Self {
            base_url: EMULATOR_URL.to_string(),
            service_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the service key
    #[must_use]
    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> StoreResult<()> {
        if self.base_url.is_empty() {
            return Err(StoreError::config("base_url cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(StoreError::config(
                "base_url must start with http:// or https://",
            ));
        }
        if self.timeout.is_zero() {
            return Err(StoreError::config("timeout cannot be zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_emulator_config() {
        let config = StoreConfig::emulator();
        assert!(config.base_url.contains("localhost"));
        assert!(config.service_key.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoreConfig::default()
            .with_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = StoreConfig::default().with_base_url("ftp://example.com");
        assert!(config.validate().is_err());

        let config = StoreConfig::default().with_base_url("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = StoreConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
