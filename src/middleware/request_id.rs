//! `X-Spacelink-Request-ID` tagging.
//!
//! A fresh UUIDv4 is generated for every request and stamped on both
//! the inbound request headers (so downstream handlers and log lines
//! can pick it up) and the outbound response headers (so callers can
//! report it back). The same value appears in both places.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Header carrying the per-request ID on both request and response.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-spacelink-request-id");

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();

    // A hyphenated UUID is always a valid header value
    let Ok(value) = HeaderValue::from_str(&id) else {
        return next.run(req).await;
    };

    req.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
    response
}
