//! Route handlers

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Query;
use axum::routing::any;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vietcal_core::NotificationMessage;

/// Defaults matching the original trigger's fixed test message.
const DEFAULT_TITLE: &str = "Test Notification";
const DEFAULT_BODY: &str = "This is a test message from Cloud Functions";

/// Query parameters for the trigger endpoint. All optional.
#[derive(Debug, Default, Deserialize)]
pub struct SendParams {
    /// Target topic; the dispatcher falls back to its default when absent.
    pub topic: Option<String>,
    /// Notification title override.
    pub title: Option<String>,
    /// Notification body override.
    pub body: Option<String>,
}

/// Success body shape: `{"result": "..."}`, matching the original trigger.
#[derive(Debug, Serialize)]
pub struct SendResponse {
    /// Provider-assigned message identifier.
    pub result: String,
}

pub(crate) fn router() -> Router {
    // method-agnostic on purpose: the original trigger accepted any verb
    Router::new().route("/sendTopicNotification", any(send_topic_notification))
}

#[tracing::instrument(level = "info", skip_all, fields(topic = params.topic.as_deref().unwrap_or("")))]
async fn send_topic_notification(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SendParams>,
) -> Result<Json<SendResponse>, ApiError> {
    let message = NotificationMessage::new(
        params.topic.unwrap_or_default(),
        params.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        params.body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
    );
    let dispatched = state.dispatcher.dispatch(&message).await?;
    Ok(Json(SendResponse {
        result: dispatched.message_id,
    }))
}
