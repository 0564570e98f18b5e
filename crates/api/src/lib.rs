//! HTTP trigger surface for VietCal notification dispatch
//!
//! One method-agnostic endpoint, `/sendTopicNotification`, forwarding a
//! push notification to a messaging topic. Responds `200 {"result": …}` on
//! success and `500 {"error": …}` on dispatch failure; that status/body
//! contract is load-bearing for existing callers and must not change.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod routes;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use vietcal_messaging::NotificationDispatcher;

/// Shared state behind the routes. The dispatcher is constructed once by
/// the surrounding application and injected, never reached through globals.
pub struct AppState {
    /// Notification dispatcher used by the trigger endpoint.
    pub dispatcher: NotificationDispatcher,
}

impl AppState {
    /// Create application state around a dispatcher.
    pub fn new(dispatcher: NotificationDispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    routes::router()
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
