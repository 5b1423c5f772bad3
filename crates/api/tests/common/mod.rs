// Compiled separately into each integration test binary; helpers unused
// by one binary would otherwise warn there.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use relay_api::config::ServerConfig;
use relay_api::routes;
use relay_api::state::AppState;
use relay_db::mock::MockFeedbackStore;
use relay_db::FeedbackStore;
use relay_mailer::mock::MockMailer;
use relay_mailer::Mailer;
use relay_notify::{DigestService, InstantNotifier};

pub const TEST_FROM: &str = "Feedback Relay <feedback@test.local>";
pub const TEST_RECIPIENT: &str = "maintainer@test.local";

/// Build a test `ServerConfig` with the permissive wildcard CORS
/// default and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// A test application plus handles to the mocks behind it.
///
/// The store and mailer handles share state with the app, so tests can
/// seed records and assert on sent emails after driving requests.
pub struct TestApp {
    pub app: Router,
    pub store: MockFeedbackStore,
    pub mailer: MockMailer,
}

/// Build the full application router with all middleware layers, wired
/// to fresh mocks.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses, without a database or
/// network.
pub fn build_test_app() -> TestApp {
    let store_mock = MockFeedbackStore::new();
    let mailer_mock = MockMailer::new();

    let store: Arc<dyn FeedbackStore> = Arc::new(store_mock.clone());
    let mailer: Arc<dyn Mailer> = Arc::new(mailer_mock.clone());

    let notifier = Arc::new(InstantNotifier::new(
        Arc::clone(&mailer),
        TEST_FROM.to_string(),
        TEST_RECIPIENT.to_string(),
    ));
    let digest = Arc::new(DigestService::new(
        Arc::clone(&store),
        Arc::clone(&mailer),
        TEST_FROM.to_string(),
        TEST_RECIPIENT.to_string(),
    ));

    let state = AppState {
        store,
        notifier,
        digest,
        config: Arc::new(test_config()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestApp {
        app,
        store: store_mock,
        mailer: mailer_mock,
    }
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a raw JSON string body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
