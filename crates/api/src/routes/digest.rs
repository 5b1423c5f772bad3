//! Route definitions for digest runs.

use axum::routing::get;
use axum::Router;

use crate::handlers::digest;
use crate::state::AppState;

/// Routes mounted at `/digest`.
///
/// Both methods map to the same handler: cron-style schedulers differ
/// in which one they emit.
///
/// ```text
/// GET  /run -> run_digest
/// POST /run -> run_digest
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/run", get(digest::run_digest).post(digest::run_digest))
}
