//! Tests for `AppError` → HTTP response mapping.
//!
//! Each variant must map to 500 with its error code and a verbatim
//! message. No HTTP server involved -- these call `IntoResponse`
//! directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use relay_api::error::AppError;
use relay_db::StoreError;
use relay_mailer::MailerError;
use relay_notify::NotifyError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: AppError::Payload maps to 500 with INVALID_PAYLOAD code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payload_error_returns_500() {
    let err = AppError::Payload("expected value at line 1 column 1".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INVALID_PAYLOAD");
    assert_eq!(
        json["error"],
        "Invalid payload: expected value at line 1 column 1"
    );
}

// ---------------------------------------------------------------------------
// Test: store errors map to 500 with STORE_ERROR and a verbatim message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_error_returns_500_with_message() {
    let err = AppError::Notify(NotifyError::Store(StoreError::Database(
        sqlx::Error::PoolClosed,
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Database error:"));
    assert!(message.contains("closed pool"));
}

// ---------------------------------------------------------------------------
// Test: mailer errors map to 500 with MAILER_ERROR and the provider text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mailer_error_returns_500_with_provider_text() {
    let err = AppError::Notify(NotifyError::Mailer(MailerError::Api {
        status: 422,
        body: "The from address is not verified".into(),
    }));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "MAILER_ERROR");
    assert_eq!(
        json["error"],
        "Email service returned HTTP 422: The from address is not verified"
    );
}

// ---------------------------------------------------------------------------
// Test: AppError::Internal maps to 500 and keeps its message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_with_message() {
    let err = AppError::Internal("scheduler wedged".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Internal error: scheduler wedged");
}
