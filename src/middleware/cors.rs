//! CORS header population.
//!
//! Reflects the inbound `Origin` into `Access-Control-Allow-Origin`
//! verbatim (empty when the request carried no `Origin`), advertises
//! the allowed methods/headers, and answers `OPTIONS` preflight
//! requests with a bare 200 without invoking the inner handler.

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("POST, GET, PUT, DELETE, PATCH");
const MAX_AGE: HeaderValue = HeaderValue::from_static("600");
const WILDCARD: HeaderValue = HeaderValue::from_static("*");
const ALLOW_CREDENTIALS: HeaderValue = HeaderValue::from_static("true");
const EMPTY: HeaderValue = HeaderValue::from_static("");

pub async fn cors(req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned().unwrap_or(EMPTY);
    let allow_headers = req
        .headers()
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned()
        .unwrap_or(WILDCARD);

    let mut response = if req.method() == Method::OPTIONS {
        // Preflight: answer 200 directly, the inner handler never runs
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, MAX_AGE);
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS);
    headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, WILDCARD);
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
    headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, ALLOW_CREDENTIALS);

    response
}
