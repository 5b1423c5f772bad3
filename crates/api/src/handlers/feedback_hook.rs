//! Handler for the feedback row-insert webhook.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use relay_db::models::feedback::FeedbackInsertEvent;
use relay_notify::InstantOutcome;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/hooks/feedback
///
/// Notify the maintainer about a freshly inserted feedback record. An
/// event without a record is a 200 no-op; on success the provider's
/// receipt is echoed back to the webhook runner.
///
/// The body is read raw and parsed here: an unparseable body must
/// surface as a server error with the parse message, not as the
/// extractor's default rejection.
pub async fn notify_feedback_inserted(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> AppResult<impl IntoResponse> {
    let event: FeedbackInsertEvent =
        serde_json::from_slice(&body).map_err(|e| AppError::Payload(e.to_string()))?;

    match state.notifier.notify(&event).await? {
        InstantOutcome::Skipped => Ok(Json(json!({
            "message": "no feedback record in payload"
        }))),
        InstantOutcome::Sent(receipt) => Ok(Json(receipt)),
    }
}
