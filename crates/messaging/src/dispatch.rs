//! Notification dispatch
//!
//! Single-shot, stateless: one dispatch call makes exactly one outbound
//! provider call and returns a structured result or a typed failure. The
//! provider handle is injected; the dispatcher holds no global state.

use crate::provider::{ProviderError, PushProvider};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use vietcal_core::NotificationMessage;

/// Fallback topic used when a message carries none.
pub const DEFAULT_TOPIC: &str = "general";

/// Successful dispatch: the provider's opaque message id plus the topic the
/// message actually went to (after defaulting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchResult {
    /// Provider-assigned message identifier.
    pub message_id: String,
    /// Resolved topic the notification was sent to.
    pub topic: String,
}

/// Dispatch failure. The provider cause is carried verbatim; the caller
/// decides how to frame it (the HTTP surface maps it to a 500 body).
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No usable topic even after defaulting.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// The provider failed; cause attached unmodified.
    #[error("push provider failed: {0}")]
    Provider(#[source] ProviderError),
}

/// Dispatches topic notifications through a [`PushProvider`].
pub struct NotificationDispatcher {
    provider: Arc<dyn PushProvider>,
    default_topic: String,
}

impl NotificationDispatcher {
    /// Create a dispatcher with the standard [`DEFAULT_TOPIC`] fallback.
    pub fn new(provider: Arc<dyn PushProvider>) -> Self {
        Self {
            provider,
            default_topic: DEFAULT_TOPIC.to_string(),
        }
    }

    /// Use a different fallback topic.
    #[must_use]
    pub fn with_default_topic(mut self, topic: impl Into<String>) -> Self {
        self.default_topic = topic.into();
        self
    }

    /// Send one notification. Empty topics fall back to the configured
    /// default before sending; empty title/body pass through (the provider
    /// may reject them). No retry here: the caller owns that policy.
    pub async fn dispatch(
        &self,
        message: &NotificationMessage,
    ) -> Result<DispatchResult, DispatchError> {
        let topic = if message.topic.trim().is_empty() {
            self.default_topic.as_str()
        } else {
            message.topic.as_str()
        };
        if topic.trim().is_empty() {
            return Err(DispatchError::EmptyTopic);
        }

        match self
            .provider
            .send_to_topic(topic, &message.title, &message.body)
            .await
        {
            Ok(message_id) => {
                debug!(topic = topic, message_id = %message_id, "Dispatch succeeded");
                Ok(DispatchResult {
                    message_id,
                    topic: topic.to_string(),
                })
            }
            Err(cause) => {
                warn!(topic = topic, error = %cause, "Dispatch failed");
                Err(DispatchError::Provider(cause))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Stubbed provider recording the topics it was asked to send to.
    struct StubProvider {
        response: Result<String, ProviderError>,
        topics_seen: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn ok(id: &str) -> Self {
            Self {
                response: Ok(id.to_string()),
                topics_seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: ProviderError) -> Self {
            Self {
                response: Err(error),
                topics_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PushProvider for StubProvider {
        async fn send_to_topic(
            &self,
            topic: &str,
            _title: &str,
            _body: &str,
        ) -> Result<String, ProviderError> {
            self.topics_seen.lock().unwrap().push(topic.to_string());
            match &self.response {
                Ok(id) => Ok(id.clone()),
                Err(ProviderError::Timeout(d)) => Err(ProviderError::Timeout(*d)),
                Err(ProviderError::ApiResponse { status, message }) => {
                    Err(ProviderError::api_response(*status, message.clone()))
                }
                Err(ProviderError::Config(msg)) => Err(ProviderError::config(msg.clone())),
                Err(ProviderError::Request(_)) => unreachable!("stub never holds request errors"),
            }
        }
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let provider = Arc::new(StubProvider::ok("abc123"));
        let dispatcher = NotificationDispatcher::new(provider);

        let result = dispatcher
            .dispatch(&NotificationMessage::new("general", "T", "B"))
            .await
            .unwrap();
        assert_eq!(result.message_id, "abc123");
        assert_eq!(result.topic, "general");
    }

    #[tokio::test]
    async fn test_empty_topic_defaults_before_sending() {
        let provider = Arc::new(StubProvider::ok("abc123"));
        let dispatcher = NotificationDispatcher::new(provider.clone());

        let result = dispatcher
            .dispatch(&NotificationMessage::new("", "T", "B"))
            .await
            .unwrap();
        assert_eq!(result.topic, "general");
        assert_eq!(*provider.topics_seen.lock().unwrap(), vec!["general"]);
    }

    #[tokio::test]
    async fn test_custom_default_topic() {
        let provider = Arc::new(StubProvider::ok("abc123"));
        let dispatcher =
            NotificationDispatcher::new(provider).with_default_topic("announcements");

        let result = dispatcher
            .dispatch(&NotificationMessage::new("  ", "T", "B"))
            .await
            .unwrap();
        assert_eq!(result.topic, "announcements");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_cause() {
        let provider = Arc::new(StubProvider::failing(ProviderError::Timeout(
            Duration::from_secs(30),
        )));
        let dispatcher = NotificationDispatcher::new(provider);

        let err = dispatcher
            .dispatch(&NotificationMessage::new("general", "T", "B"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Provider(ProviderError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_default_topic_rejected() {
        let provider = Arc::new(StubProvider::ok("abc123"));
        let dispatcher = NotificationDispatcher::new(provider.clone()).with_default_topic("");

        let err = dispatcher
            .dispatch(&NotificationMessage::new("", "T", "B"))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::EmptyTopic));
        assert!(provider.topics_seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_title_and_body_pass_through() {
        let provider = Arc::new(StubProvider::ok("abc123"));
        let dispatcher = NotificationDispatcher::new(provider);

        let result = dispatcher
            .dispatch(&NotificationMessage::new("general", "", ""))
            .await;
        assert!(result.is_ok());
    }
}
