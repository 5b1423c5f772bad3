//! Email delivery via the Resend HTTP API.
//!
//! [`ResendMailer`] posts an [`OutboundEmail`] to `{api_url}/emails`
//! with a bearer key. Non-success responses have their body text
//! captured into [`MailerError::Api`]; the send is never retried here,
//! callers decide what a failed send means for their flow.

use std::time::Duration;

use async_trait::async_trait;

use crate::{Mailer, MailerError, OutboundEmail};

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default provider endpoint.
const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Default sender when `FEEDBACK_FROM` is not set. The provider accepts
/// this address for accounts without a verified domain.
const DEFAULT_FROM_ADDRESS: &str = "Feedback Relay <onboarding@resend.dev>";

// ---------------------------------------------------------------------------
// MailerConfig
// ---------------------------------------------------------------------------

/// Configuration for the email provider.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Provider API base URL.
    pub api_url: String,
    /// Provider API key (bearer token).
    pub api_key: String,
    /// RFC 5322 "From" for every outgoing email.
    pub from_address: String,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `RESEND_API_KEY` is not set, signalling that
    /// startup must abort; the service cannot do anything useful without
    /// a way to send email.
    ///
    /// | Variable         | Required | Default                                  |
    /// |------------------|----------|------------------------------------------|
    /// | `RESEND_API_KEY` | yes      | —                                        |
    /// | `RESEND_API_URL` | no       | `https://api.resend.com`                 |
    /// | `FEEDBACK_FROM`  | no       | `Feedback Relay <onboarding@resend.dev>` |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        Some(Self {
            api_url: std::env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key,
            from_address: std::env::var("FEEDBACK_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// ResendMailer
// ---------------------------------------------------------------------------

/// [`Mailer`] over the provider's HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl ResendMailer {
    /// Create a mailer with a pre-configured HTTP client.
    pub fn new(config: MailerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    fn send_url(&self) -> String {
        format!("{}/emails", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<serde_json::Value, MailerError> {
        let response = self
            .client
            .post(self.send_url())
            .bearer_auth(&self.config.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json::<serde_json::Value>().await?;
        tracing::info!(subject = %email.subject, "Email accepted by provider");
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
