//! Handler for digest runs triggered over HTTP.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use relay_notify::DigestOutcome;
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET|POST /api/v1/digest/run
///
/// Run one digest pass: fetch all unprocessed feedback, email the
/// summary, mark the batch processed. With nothing to report the run is
/// a no-op and says so.
pub async fn run_digest(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    match state.digest.run().await? {
        DigestOutcome::Empty => Ok(Json(json!({
            "message": "no unprocessed feedback to report"
        }))),
        DigestOutcome::Sent { .. } => Ok(Json(json!({ "success": true }))),
    }
}
