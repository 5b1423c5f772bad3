//! Route definitions for the database webhook endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback_hook;
use crate::state::AppState;

/// Routes mounted at `/hooks`.
///
/// ```text
/// POST /feedback -> notify_feedback_inserted
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/feedback", post(feedback_hook::notify_feedback_inserted))
}
