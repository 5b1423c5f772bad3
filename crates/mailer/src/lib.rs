//! Transactional email delivery for the feedback relay.
//!
//! [`Mailer`] abstracts the provider call so the notification flows can
//! run against the feature-gated [`mock`] in tests. [`ResendMailer`] is
//! the production implementation over the provider's HTTP API.

pub mod resend;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use resend::{MailerConfig, ResendMailer};

use async_trait::async_trait;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider rejected the send. `body` carries the provider's
    /// error text so the reason survives into logs and responses.
    #[error("Email service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// OutboundEmail
// ---------------------------------------------------------------------------

/// One email as handed to the provider.
///
/// Field names follow the provider's send API, so the struct serializes
/// directly into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    /// RFC 5322 sender, e.g. `Feedback Relay <feedback@example.com>`.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    pub subject: String,
    /// Fully rendered HTML body.
    pub html: String,
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends emails through the transactional email service.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email.
    ///
    /// On success the provider's response payload is returned untouched;
    /// the instant notification endpoint echoes it back to its caller.
    async fn send(&self, email: &OutboundEmail) -> Result<serde_json::Value, MailerError>;
}
