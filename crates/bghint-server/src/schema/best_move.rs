//! Best-move request/response types.

use serde::{Deserialize, Serialize};

/// Request to analyse a board position.
#[derive(Debug, Clone, Deserialize)]
pub struct BestMoveRequest {
    /// Opaque board-position encoding (e.g. an XGID-like identifier).
    /// Passed through to the engine verbatim; no structural validation
    /// happens on this side.
    pub position: String,
}

/// Response carrying the engine's analysis.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveResponse {
    /// Unparsed standard output text of the analysis engine.
    pub output: String,
}
