//! HTTP document-store client
//!
//! Talks to the remote document store (or a local emulator) over its REST
//! surface. The store owns the merge and timestamp-if-absent semantics; a
//! backend without native support must emulate them with a read followed by
//! a conditional write, which leaves a documented race window.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::{DocumentFields, DocumentStore, WriteOutcome};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Merge-set response body
#[derive(Debug, Deserialize)]
struct MergeResponse {
    status: MergeStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MergeStatus {
    Created,
    Updated,
}

/// HTTP-backed [`DocumentStore`]
#[derive(Clone)]
pub struct HttpStore {
    inner: Client,
    config: Arc<StoreConfig>,
}

impl HttpStore {
    /// Create a new client from configuration
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("vietcal-store/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(StoreError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/v1/{}/{}?merge=true",
            self.config.base_url.trim_end_matches('/'),
            collection,
            key
        )
    }

    async fn handle_response(&self, response: Response) -> StoreResult<MergeResponse> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(StoreError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(StoreError::api_response(status.as_u16(), message))
        }
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    #[instrument(skip(self, fields), fields(request_id))]
    async fn merge_set(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
    ) -> StoreResult<WriteOutcome> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.document_url(collection, key);

        let mut request = self
            .inner
            .patch(&url)
            .header(X_REQUEST_ID, &request_id)
            .json(&fields);
        if let Some(ref service_key) = self.config.service_key {
            request = request.header(AUTHORIZATION, format!("Bearer {service_key}"));
        }

        let response = request.send().await.map_err(StoreError::from_request)?;
        let merged = self.handle_response(response).await?;

        let outcome = match merged.status {
            MergeStatus::Created => WriteOutcome::Created,
            MergeStatus::Updated => WriteOutcome::Updated,
        };
        debug!(
            request_id = %request_id,
            collection = collection,
            key = key,
            outcome = ?outcome,
            "Merge write applied"
        );
        Ok(outcome)
    }
}
