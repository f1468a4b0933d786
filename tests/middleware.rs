//! Integration tests for the middleware chain: CORS, request-ID
//! tagging, cache suppression, body size limiting, and the request
//! logger's body replay and level/GET-skip configuration.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{json, Value};
use spacelink::middleware::{request_logger, RequestLogLevel, RequestLoggerConfig};
use spacelink::server::{self, ServerOptions};
use tower::ServiceExt;
use tracing::instrument::WithSubscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Echoes back what the handler actually saw, so tests can observe the
/// request-side effects of the middleware chain.
async fn inspect_handler(headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "request_id": headers
            .get("x-spacelink-request-id")
            .and_then(|v| v.to_str().ok()),
        "has_if_none_match": headers.contains_key("if-none-match"),
        "has_etag": headers.contains_key("etag"),
        "has_if_modified_since": headers.contains_key("if-modified-since"),
        "body": body,
    }))
}

async fn start_test_server(
    options: ServerOptions,
) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let api = Router::new().route("/inspect", any(inspect_handler));
    let router = server::build_router(api, &options, RequestLoggerConfig::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .await
        .unwrap();
    });

    (addr, shutdown_tx)
}

#[tokio::test]
async fn cors_reflects_origin() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://{addr}/ping"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    let headers = resp.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://example.com"
    );
    assert_eq!(headers.get("access-control-max-age").unwrap(), "600");
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "POST, GET, PUT, DELETE, PATCH"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );

    let _ = shutdown.send(());
}

#[tokio::test]
async fn allow_origin_set_even_without_origin_header() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let resp = reqwest::get(format!("http://{addr}/ping")).await.unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        ""
    );

    let _ = shutdown.send(());
}

#[tokio::test]
async fn options_preflight_short_circuits() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    // No route matches this path; a 200 proves the preflight never
    // reached the 404 fallback.
    let client = reqwest::Client::new();
    let resp = client
        .request(
            reqwest::Method::OPTIONS,
            format!("http://{addr}/nonexistent"),
        )
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Headers", "x-custom-header")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("access-control-allow-headers").unwrap(),
        "x-custom-header"
    );

    let _ = shutdown.send(());
}

#[tokio::test]
async fn request_id_identical_on_request_and_response() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .send()
        .await
        .unwrap();

    let response_id = resp
        .headers()
        .get("x-spacelink-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    uuid::Uuid::parse_str(&response_id).expect("request ID should be a UUID");

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["request_id"], response_id.as_str());

    let _ = shutdown.send(());
}

#[tokio::test]
async fn no_cache_headers_set_on_response() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let resp = reqwest::get(format!("http://{addr}/ping")).await.unwrap();

    let headers = resp.headers();
    assert_eq!(
        headers.get("expires").unwrap(),
        "Thu, 01 Jan 1970 00:00:00 GMT"
    );
    assert_eq!(
        headers.get("cache-control").unwrap(),
        "no-cache, no-store, no-transform, must-revalidate, private, max-age=0"
    );
    assert_eq!(headers.get("pragma").unwrap(), "no-cache");
    assert_eq!(headers.get("x-accel-expires").unwrap(), "0");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn conditional_request_headers_stripped_before_handler() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .header("If-None-Match", "\"abc123\"")
        .header("ETag", "\"abc123\"")
        .header("If-Modified-Since", "Wed, 21 Oct 2015 07:28:00 GMT")
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["has_if_none_match"], false);
    assert_eq!(body["has_etag"], false);
    assert_eq!(body["has_if_modified_since"], false);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn logged_body_is_replayed_to_the_handler() {
    let (addr, shutdown) = start_test_server(ServerOptions::default()).await;

    let client = reqwest::Client::new();

    // Valid JSON body passes through the logger's buffer intact
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .header("Content-Type", "application/json")
        .body(r#"{"name":"ada"}"#)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["body"], r#"{"name":"ada"}"#);

    // Malformed JSON falls back to raw logging but still reaches the handler
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .header("Content-Type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["body"], "not json at all");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn oversized_body_rejected_before_handler() {
    let options = ServerOptions {
        max_body: 64,
        ..ServerOptions::default()
    };
    let (addr, shutdown) = start_test_server(options).await;

    let client = reqwest::Client::new();

    // The limit layer sits outside the logger, so neither buffers this
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .body("x".repeat(1024))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 413);

    // Under the limit everything still flows through
    let resp = client
        .post(format!("http://{addr}/inspect"))
        .body("small")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["body"], "small");

    let _ = shutdown.send(());
}

// -- Request logger configuration --
//
// These drive the logger directly through `Router::oneshot` with a
// capturing subscriber attached to the future, mirroring the level and
// GET-skip matrix of the logger's config surface.

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

async fn run_logged_request(
    config: RequestLoggerConfig,
    method: Method,
    body: &'static str,
) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(capture.clone())
        .with_max_level(tracing::level_filters::LevelFilter::TRACE)
        .finish();

    let router = Router::new()
        .route("/test", any(|| async { "ok" }))
        .layer(axum::middleware::from_fn_with_state(
            config,
            request_logger::log_request,
        ));

    let req = Request::builder()
        .method(method)
        .uri("/test")
        .body(Body::from(body))
        .unwrap();

    let response = router
        .oneshot(req)
        .with_subscriber(subscriber)
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    capture.contents()
}

#[tokio::test]
async fn off_level_suppresses_request_logging() {
    let config = RequestLoggerConfig {
        log_get_requests: true,
        level: RequestLogLevel::Off,
    };
    let logs = run_logged_request(config, Method::POST, "{}").await;
    assert!(logs.is_empty(), "expected no output, got: {logs}");
}

#[tokio::test]
async fn get_requests_skipped_unless_enabled() {
    let logs = run_logged_request(RequestLoggerConfig::default(), Method::GET, "").await;
    assert!(logs.is_empty(), "expected no output, got: {logs}");

    let config = RequestLoggerConfig {
        log_get_requests: true,
        level: RequestLogLevel::Info,
    };
    let logs = run_logged_request(config, Method::GET, "").await;
    assert!(logs.contains("HTTP request"));
    assert!(logs.contains("\"level\":\"INFO\""));
}

#[tokio::test]
async fn post_logged_at_configured_level() {
    let config = RequestLoggerConfig {
        log_get_requests: false,
        level: RequestLogLevel::Debug,
    };
    let logs = run_logged_request(config, Method::POST, r#"{"a":1}"#).await;
    assert!(logs.contains("HTTP request"));
    assert!(logs.contains("\"level\":\"DEBUG\""));

    let config = RequestLoggerConfig {
        log_get_requests: false,
        level: RequestLogLevel::Info,
    };
    let logs = run_logged_request(config, Method::POST, r#"{"a":1}"#).await;
    assert!(logs.contains("\"level\":\"INFO\""));
}
