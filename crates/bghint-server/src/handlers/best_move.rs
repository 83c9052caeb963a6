//! Best-move analysis handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::best_move::{BestMoveRequest, BestMoveResponse};
use crate::state::AppState;

/// Forwards a position to the analysis engine and relays its raw output.
///
/// The position string is opaque to this handler; the engine decides
/// whether it is a valid board encoding. Any engine failure maps to a
/// single 500 response via [`ApiError`].
///
/// `POST /best-move`
pub async fn best_move(
    State(state): State<AppState>,
    Json(req): Json<BestMoveRequest>,
) -> Result<Json<BestMoveResponse>, ApiError> {
    let output = state.engine.analyse(&req.position).await?;
    Ok(Json(BestMoveResponse { output }))
}
