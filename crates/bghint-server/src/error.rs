//! API error type with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the wire-level
//! error body `{"detail": <text>}` with HTTP 500. Engine failures of every
//! kind collapse into this single observable category; the distinction
//! between them survives only in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bghint_engine::EngineError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Engine invocation failed (500). Carries the textual failure detail
    /// relayed to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Internal(detail) = self;
        let body = serde_json::json!({ "detail": detail });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            // the detail for an engine-reported failure is its stderr text
            EngineError::Failed { code, stderr } => {
                tracing::error!(?code, "engine reported failure");
                ApiError::Internal(stderr)
            }
            other => {
                tracing::error!(error = %other, "engine invocation failed");
                ApiError::Internal(other.to_string())
            }
        }
    }
}
