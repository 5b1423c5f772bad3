//! Notification flows for the feedback relay.
//!
//! Two flows share the same store and mailer seams:
//!
//! - [`InstantNotifier`] formats one freshly inserted feedback record as
//!   an HTML email and sends it immediately.
//! - [`DigestService`] batches every unprocessed record into a summary
//!   email and marks the batch processed. [`DigestScheduler`] can run it
//!   periodically in the background.

pub mod config;
pub mod digest;
pub mod instant;
pub mod render;

pub use config::NotifyConfig;
pub use digest::{DigestOutcome, DigestScheduler, DigestService};
pub use instant::{InstantNotifier, InstantOutcome};

use relay_db::StoreError;
use relay_mailer::MailerError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type shared by both notification flows.
///
/// Transparent over the store and mailer errors; their messages are the
/// diagnostics the operator sees, so nothing is rewrapped.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Mailer(#[from] MailerError),
}
