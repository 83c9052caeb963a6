//! Health probe response type.

use serde::Serialize;

/// Response for the root health probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
}

impl HealthResponse {
    /// The constant healthy payload.
    pub fn ok() -> Self {
        HealthResponse { status: "ok" }
    }
}
