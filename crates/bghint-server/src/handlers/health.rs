//! Root health probe handler.

use axum::Json;

use crate::schema::health::HealthResponse;

/// Returns the constant health payload. Cannot fail and touches no state.
///
/// `GET /`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
