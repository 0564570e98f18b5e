//! HTTP push-gateway client

use crate::config::MessagingConfig;
use crate::provider::{ProviderError, PushProvider};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Send response body
#[derive(Debug, Deserialize)]
struct SendResponse {
    message_id: String,
}

/// HTTP-backed [`PushProvider`]
#[derive(Clone)]
pub struct HttpPushProvider {
    inner: Client,
    config: Arc<MessagingConfig>,
}

impl HttpPushProvider {
    /// Create a new client from configuration
    pub fn new(config: MessagingConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("vietcal-messaging/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ProviderError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/messages:send",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl PushProvider for HttpPushProvider {
    #[instrument(skip(self, title, body), fields(request_id))]
    async fn send_to_topic(
        &self,
        topic: &str,
        title: &str,
        body: &str,
    ) -> Result<String, ProviderError> {
        let request_id = Uuid::new_v4().to_string();
        let payload = json!({
            "topic": topic,
            "notification": { "title": title, "body": body },
        });

        let mut request = self
            .inner
            .post(self.send_url())
            .header(X_REQUEST_ID, &request_id)
            .json(&payload);
        if let Some(ref server_key) = self.config.server_key {
            request = request.header(AUTHORIZATION, format!("Bearer {server_key}"));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.config.timeout)
            } else {
                ProviderError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::api_response(status.as_u16(), message));
        }

        let sent: SendResponse = response.json().await.map_err(ProviderError::Request)?;
        debug!(
            request_id = %request_id,
            topic = topic,
            message_id = %sent.message_id,
            "Notification sent"
        );
        Ok(sent.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let provider = HttpPushProvider::new(MessagingConfig::default());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = MessagingConfig::default().with_default_topic("");
        assert!(matches!(
            HttpPushProvider::new(config),
            Err(ProviderError::Config(_))
        ));
    }

    #[test]
    fn test_send_url_shape() {
        let config = MessagingConfig::default().with_base_url("http://localhost:9100/");
        let provider = HttpPushProvider::new(config).unwrap();
        assert_eq!(provider.send_url(), "http://localhost:9100/v1/messages:send");
    }

    #[test]
    fn test_send_response_parses() {
        let parsed: SendResponse =
            serde_json::from_str(r#"{"message_id":"abc123"}"#).unwrap();
        assert_eq!(parsed.message_id, "abc123");
    }
}
