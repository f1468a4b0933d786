//! Cache suppression.
//!
//! Strips conditional-request headers from the inbound request so
//! handlers never serve a `304`, then marks the response as
//! uncacheable for browsers and intermediate caches (nginx honors
//! `X-Accel-Expires`).

use std::sync::LazyLock;

use axum::extract::Request;
use axum::http::{header, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Unix epoch in HTTP-date format, used to expire responses immediately.
const EPOCH: HeaderValue = HeaderValue::from_static("Thu, 01 Jan 1970 00:00:00 GMT");

const CACHE_CONTROL: HeaderValue =
    HeaderValue::from_static("no-cache, no-store, no-transform, must-revalidate, private, max-age=0");

/// ETag and conditional request headers removed before the handler runs.
static CONDITIONAL_REQUEST: LazyLock<Vec<HeaderName>> = LazyLock::new(|| {
    [
        "etag",
        "if-modified-since",
        "if-match",
        "if-none-match",
        "if-range",
        "if-unmodified-since",
    ]
    .iter()
    .filter_map(|name| name.parse::<HeaderName>().ok())
    .collect()
});

pub async fn no_cache(mut req: Request, next: Next) -> Response {
    for name in CONDITIONAL_REQUEST.iter() {
        req.headers_mut().remove(name);
    }

    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(header::EXPIRES, EPOCH);
    headers.insert(header::CACHE_CONTROL, CACHE_CONTROL);
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(
        HeaderName::from_static("x-accel-expires"),
        HeaderValue::from_static("0"),
    );

    response
}
