//! Notification configuration from environment variables.

/// Recipient and scheduling configuration for the notification flows.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Maintainer address that receives every notification and digest.
    pub recipient: String,
    /// Background digest interval. `None` disables the scheduler and
    /// leaves digest runs to the HTTP endpoint (external cron or
    /// manual).
    pub digest_interval_secs: Option<u64>,
}

impl NotifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `FEEDBACK_RECIPIENT` is not set; there is no
    /// sensible default for where notifications should go.
    ///
    /// | Variable               | Required | Default                |
    /// |------------------------|----------|------------------------|
    /// | `FEEDBACK_RECIPIENT`   | yes      | —                      |
    /// | `DIGEST_INTERVAL_SECS` | no       | unset (no scheduler)   |
    pub fn from_env() -> Option<Self> {
        let recipient = std::env::var("FEEDBACK_RECIPIENT").ok()?;
        Some(Self {
            recipient,
            digest_interval_secs: std::env::var("DIGEST_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0),
        })
    }
}
