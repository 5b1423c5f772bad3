//! Feedback row model and webhook DTOs.

use relay_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// FeedbackRecord
// ---------------------------------------------------------------------------

/// A row from the `app_feedback` table as fetched by the digest flow.
///
/// The processed flag is not carried: the digest only ever fetches rows
/// where it is false and flips it through the store's mark-processed
/// update.
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRecord {
    pub id: DbId,
    /// Category value. Open string on the wire; `bug` and `idea` are the
    /// recognized values.
    pub kind: String,
    /// User-submitted message, stored verbatim.
    pub content: String,
    pub user_id: Option<Uuid>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Webhook DTOs
// ---------------------------------------------------------------------------

/// Envelope posted by the database's row-insert webhook.
///
/// The webhook sends the full event (`type`, `table`, `schema`, the new
/// row, ...); only the new row matters here, and an envelope without one
/// means there is nothing to notify.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackInsertEvent {
    #[serde(default)]
    pub record: Option<InsertedFeedback>,
}

/// The newly inserted feedback row as embedded in the webhook envelope.
///
/// Every field is optional or defaulted; the notifier degrades to the
/// fallback presentation rather than rejecting a sparse row.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertedFeedback {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
