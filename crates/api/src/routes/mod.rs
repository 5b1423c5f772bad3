pub mod digest;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hooks/feedback    POST        row-insert webhook, instant notification
/// /digest/run        GET, POST   run a digest pass now
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Database webhook endpoints.
        .nest("/hooks", feedback::router())
        // Digest trigger (cron or manual).
        .nest("/digest", digest::router())
}
