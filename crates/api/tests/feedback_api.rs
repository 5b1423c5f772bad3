//! Integration tests for the feedback insert webhook.
//!
//! Drives POST /api/v1/hooks/feedback through the full middleware stack
//! and asserts on both the HTTP response and the emails captured by the
//! mock mailer.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, post_json, TEST_FROM, TEST_RECIPIENT};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: payload without a record is a 200 no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payload_without_record_is_a_no_op() {
    let test_app = common::build_test_app();

    let response = post_json(test_app.app, "/api/v1/hooks/feedback", "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "no feedback record in payload");

    assert!(test_app.mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Test: bug record sends a styled email and echoes the provider receipt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bug_record_sends_styled_email() {
    let test_app = common::build_test_app();

    let payload = json!({
        "type": "INSERT",
        "table": "app_feedback",
        "record": {
            "id": 7,
            "type": "bug",
            "content": "Crash on save",
            "user_id": "8e7f54cc-8e2c-4a0f-a8d6-4b0866bb1e1e",
        },
    });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    // The provider receipt is echoed back verbatim.
    let json = body_json(response).await;
    assert_eq!(json, json!({ "id": "mock-email-1" }));

    let sent = test_app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, TEST_FROM);
    assert_eq!(sent[0].to, vec![TEST_RECIPIENT.to_string()]);
    assert_eq!(sent[0].subject, "\u{1F6A8} New Bug Report!");
    assert!(sent[0].html.contains("#e74c3c"));
    assert!(sent[0].html.contains("Crash on save"));
    assert!(sent[0].html.contains("Type: <strong>bug</strong>"));
}

// ---------------------------------------------------------------------------
// Test: unrecognized type falls back to the default presentation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unrecognized_type_uses_default_presentation() {
    let test_app = common::build_test_app();

    let payload = json!({
        "record": { "type": "complaint", "content": "Too slow" },
    });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let sent = test_app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "\u{1F4E2} New Message");
    assert!(sent[0].html.contains("#333"));
}

// ---------------------------------------------------------------------------
// Test: record without a type still notifies with the default presentation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn record_without_type_uses_default_presentation() {
    let test_app = common::build_test_app();

    let payload = json!({
        "record": { "content": "Hello there" },
    });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let sent = test_app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "\u{1F4E2} New Message");
    assert!(sent[0].html.contains("User ID: unknown"));
}

// ---------------------------------------------------------------------------
// Test: user-submitted content is escaped in the email HTML
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_is_escaped_in_email_html() {
    let test_app = common::build_test_app();

    let payload = json!({
        "record": { "type": "bug", "content": "<script>alert(\"x\")</script>" },
    });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let sent = test_app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("&lt;script&gt;"));
    assert!(!sent[0].html.contains("<script>"));
}

// ---------------------------------------------------------------------------
// Test: malformed JSON body returns 500 with INVALID_PAYLOAD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_500() {
    let test_app = common::build_test_app();

    let response = post_json(test_app.app, "/api/v1/hooks/feedback", "not json {").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_PAYLOAD");
    assert_matches!(
        json["error"].as_str(),
        Some(msg) if msg.starts_with("Invalid payload:")
    );

    assert!(test_app.mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Test: structurally wrong record returns 500 with INVALID_PAYLOAD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrongly_shaped_record_returns_500() {
    let test_app = common::build_test_app();

    // `content` must be a string.
    let payload = json!({ "record": { "content": 42 } });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_PAYLOAD");

    assert!(test_app.mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Test: send failure surfaces the provider's error text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_failure_surfaces_provider_error() {
    let test_app = common::build_test_app();
    test_app.mailer.fail_with(401, "invalid api key");

    let payload = json!({
        "record": { "type": "bug", "content": "Crash on save" },
    });

    let response = post_json(
        test_app.app,
        "/api/v1/hooks/feedback",
        &payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MAILER_ERROR");
    assert_eq!(
        json["error"],
        "Email service returned HTTP 401: invalid api key"
    );
}
