//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vietcal_messaging::DispatchError;

/// Error body shape: `{"error": "..."}`, matching the original trigger.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// Route-level errors.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Dispatch failed; the provider cause is inside, unmodified.
    #[error("{0}")]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // the trigger contract frames every dispatch failure as a 500
            ApiError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vietcal_messaging::ProviderError;

    #[test]
    fn test_dispatch_error_maps_to_500() {
        let err = ApiError::Dispatch(DispatchError::Provider(ProviderError::api_response(
            502,
            "bad gateway",
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_keeps_cause() {
        let err = ApiError::Dispatch(DispatchError::Provider(ProviderError::Timeout(
            std::time::Duration::from_secs(30),
        )));
        assert!(err.to_string().contains("timeout"));
    }
}
