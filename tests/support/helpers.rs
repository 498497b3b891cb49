// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use codercat_server::application::notifications::NotificationSettings;
use codercat_server::application::ports::{MailSenderPort, TemplateRendererPort};
use codercat_server::application::services::ApplicationServices;
use codercat_server::domain::post::PostRepository;
use codercat_server::domain::subscriber::SubscriberRepository;
use codercat_server::presentation::http::routes::build_router;
use codercat_server::presentation::http::state::HttpState;

use super::mocks;

pub const TEST_BASE_URL: &str = "https://blog.test";

pub fn test_settings() -> NotificationSettings {
    NotificationSettings {
        base_url: TEST_BASE_URL.to_string(),
        send_timeout: Duration::from_secs(5),
    }
}

pub fn build_services(
    posts: Arc<dyn PostRepository>,
    subscribers: Arc<dyn SubscriberRepository>,
    renderer: Arc<TemplateRendererPort>,
    mailer: Arc<MailSenderPort>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        posts,
        subscribers,
        renderer,
        mailer,
        test_settings(),
    ))
}

/// Services over empty in-memory stores with a recording mailer.
pub fn default_services() -> Arc<ApplicationServices> {
    let (mailer, _rx) = mocks::RecordingMailSender::new();
    build_services(
        Arc::new(mocks::InMemoryPostRepo::new()),
        Arc::new(mocks::InMemorySubscriberRepo::new()),
        Arc::new(mocks::RecordingRenderer::default()),
        Arc::new(mailer),
    )
}

pub fn make_router(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services }, &[])
}

pub fn make_test_router() -> axum::Router {
    make_router(default_services())
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let msg = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(!msg.is_empty(), "expected non-empty message field in ErrorResponse");
}
