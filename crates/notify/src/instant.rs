//! Instant notification flow: one email per inserted feedback record.

use std::sync::Arc;

use relay_db::models::feedback::FeedbackInsertEvent;
use relay_mailer::Mailer;

use crate::render;
use crate::NotifyError;

/// Outcome of handling one insert event.
#[derive(Debug)]
pub enum InstantOutcome {
    /// The event carried no record; nothing to notify.
    Skipped,
    /// The email went out; holds the provider's response payload.
    Sent(serde_json::Value),
}

// ---------------------------------------------------------------------------
// InstantNotifier
// ---------------------------------------------------------------------------

/// Sends one notification email per inserted feedback record.
pub struct InstantNotifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    recipient: String,
}

impl InstantNotifier {
    /// Create a notifier that sends from `from` to the maintainer
    /// `recipient`.
    pub fn new(mailer: Arc<dyn Mailer>, from: String, recipient: String) -> Self {
        Self {
            mailer,
            from,
            recipient,
        }
    }

    /// Handle one insert event.
    ///
    /// An event without a record is "nothing to notify", not an error.
    /// Send failures propagate to the caller; the insert that triggered
    /// the event is never affected either way.
    pub async fn notify(&self, event: &FeedbackInsertEvent) -> Result<InstantOutcome, NotifyError> {
        let Some(record) = &event.record else {
            tracing::info!("Insert event without a feedback record, nothing to notify");
            return Ok(InstantOutcome::Skipped);
        };

        tracing::info!(
            kind = record.kind.as_deref().unwrap_or("none"),
            "Sending feedback notification email"
        );

        let email = render::instant_email(&self.from, &self.recipient, record);
        let receipt = self.mailer.send(&email).await?;

        Ok(InstantOutcome::Sent(receipt))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
