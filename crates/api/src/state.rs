use std::sync::Arc;

use relay_db::FeedbackStore;
use relay_notify::{DigestService, InstantNotifier};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Feedback store handle, used directly by the health check; the
    /// flows hold their own.
    pub store: Arc<dyn FeedbackStore>,
    /// Instant notification flow.
    pub notifier: Arc<InstantNotifier>,
    /// Digest flow (shared with the background scheduler when enabled).
    pub digest: Arc<DigestService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
