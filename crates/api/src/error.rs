use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relay_notify::NotifyError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`NotifyError`] for flow errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
///
/// Messages are surfaced verbatim, upstream failure text included. The
/// callers are the database's webhook runner, the cron trigger and the
/// maintainer, and the response body is the only diagnostics channel
/// they get. Every variant maps to 500; the `code` field in the body
/// distinguishes the failure class.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be parsed as a feedback insert event.
    #[error("Invalid payload: {0}")]
    Payload(String),

    /// A notification flow failed (store or email service).
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Payload(_) => "INVALID_PAYLOAD",
            AppError::Notify(NotifyError::Store(_)) => "STORE_ERROR",
            AppError::Notify(NotifyError::Mailer(_)) => "MAILER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        };
        let message = self.to_string();

        tracing::error!(code, error = %message, "Request failed");

        let body = json!({
            "error": message,
            "code": code,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
