//! Structured request logging.
//!
//! Buffers the request body, replays it for the inner handler, and
//! emits one event per request with method, path, status, content
//! length, referrer, user agent, and the body. JSON bodies are logged
//! in compact structured form; anything that fails to parse falls back
//! to the raw string. `multipart/form-data` bodies are never buffered,
//! only the literal content type is logged.
//!
//! GET requests are skipped unless [`RequestLoggerConfig::log_get_requests`]
//! is set; the whole middleware can be silenced with
//! [`RequestLogLevel::Off`].

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLogLevel {
    Off,
    Debug,
    Info,
}

#[derive(Debug, Clone, Copy)]
pub struct RequestLoggerConfig {
    /// Log GET requests too. Off by default to keep health probes quiet.
    pub log_get_requests: bool,
    pub level: RequestLogLevel,
}

impl Default for RequestLoggerConfig {
    fn default() -> Self {
        Self {
            log_get_requests: false,
            level: RequestLogLevel::Info,
        }
    }
}

pub async fn log_request(
    State(config): State<RequestLoggerConfig>,
    req: Request,
    next: Next,
) -> Response {
    let should_log = config.level != RequestLogLevel::Off
        && (config.log_get_requests || req.method() != Method::GET);
    if !should_log {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let length = content_length(req.headers());
    let referrer = header_str(req.headers(), header::REFERER);
    let user_agent = header_str(req.headers(), header::USER_AGENT);

    let (req, body) = match buffer_body(req).await {
        Ok(buffered) => buffered,
        Err(response) => return response,
    };
    let response = next.run(req).await;
    let status = response.status().as_u16();

    match config.level {
        RequestLogLevel::Info => tracing::info!(
            method = %method,
            path = %path,
            status,
            length,
            referrer = %referrer,
            useragent = %user_agent,
            body = %body,
            "HTTP request"
        ),
        RequestLogLevel::Debug => tracing::debug!(
            method = %method,
            path = %path,
            status,
            length,
            referrer = %referrer,
            useragent = %user_agent,
            body = %body,
            "HTTP request"
        ),
        RequestLogLevel::Off => {}
    }

    response
}

/// Read the whole body and hand back an equivalent request plus the
/// rendering to log. Multipart uploads are passed through untouched.
///
/// Reads go through the body-limit layer wrapping this middleware, so
/// buffering never allocates past the configured cap; an over-limit
/// body surfaces here as a 413.
async fn buffer_body(req: Request) -> Result<(Request, String), Response> {
    if is_multipart(req.headers()) {
        return Ok((req, "multipart/form-data".to_string()));
    }

    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return Err(crate::response::payload_too_large(
                "request body too large",
                Vec::new(),
            ))
        }
    };
    let rendered = render_body(&bytes);
    Ok((Request::from_parts(parts, Body::from(bytes)), rendered))
}

/// Compact JSON when the body parses, raw string otherwise.
fn render_body(bytes: &Bytes) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}

fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_renders_compact() {
        let bytes = Bytes::from_static(b"{\n  \"name\": \"ada\",\n  \"age\": 36\n}");
        assert_eq!(render_body(&bytes), r#"{"age":36,"name":"ada"}"#);
    }

    #[test]
    fn malformed_body_falls_back_to_raw_string() {
        let bytes = Bytes::from_static(b"not json at all {{{");
        assert_eq!(render_body(&bytes), "not json at all {{{");
    }

    #[test]
    fn multipart_detected_by_content_type_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "multipart/form-data; boundary=xyz".parse().unwrap(),
        );
        assert!(is_multipart(&headers));

        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(!is_multipart(&headers));
    }

    #[test]
    fn default_config_skips_get_at_info() {
        let config = RequestLoggerConfig::default();
        assert!(!config.log_get_requests);
        assert_eq!(config.level, RequestLogLevel::Info);
    }
}
