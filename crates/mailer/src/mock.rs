//! In-memory mock mailer for tests.
//!
//! Enabled through the `test-utils` feature, mirroring the mock store in
//! `relay-db`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::{Mailer, MailerError, OutboundEmail};

/// Records sent emails instead of calling the provider.
///
/// Clones share state; scripted failures apply to every subsequent
/// send.
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_with: Arc<Mutex<Option<(u16, String)>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail with a provider-style error.
    pub fn fail_with(&self, status: u16, body: &str) {
        *self.fail_with.lock().unwrap() = Some((status, body.to_string()));
    }

    /// All emails handed to `send`, in order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<serde_json::Value, MailerError> {
        if let Some((status, body)) = self.fail_with.lock().unwrap().clone() {
            return Err(MailerError::Api { status, body });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(json!({ "id": format!("mock-email-{}", sent.len()) }))
    }
}
