//! Standardized JSON success/error responses.
//!
//! Submodules hold the response-code table ([`code`]) and the envelope
//! types ([`envelope`]). The free functions here are the everyday
//! surface for handlers: `success(data)`, `error(code, message, details)`
//! and per-status convenience wrappers. The HTTP status of an error is
//! always derived from its [`Code`], never passed separately.

pub mod code;
pub mod envelope;

pub use code::Code;
pub use envelope::{ApiResponse, ErrorBody};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// 200 OK with `data` serialized as the whole body.
pub fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 204 No Content.
#[must_use]
pub fn success_no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Error response with the HTTP status derived from `code`.
pub fn error(code: Code, message: &str, details: Vec<Value>) -> Response {
    (
        code.http_status(),
        Json(ErrorBody::new(code, message, details)),
    )
        .into_response()
}

/// Generic 500-style error using [`Code::Internal`].
pub fn unknown_error(message: &str, details: Vec<Value>) -> Response {
    error(Code::Internal, message, details)
}

/// HTTP 400 Bad Request style error.
pub fn bad_request(message: &str, details: Vec<Value>) -> Response {
    error(Code::BadRequest, message, details)
}

/// HTTP 415 Unsupported Media Type style error.
pub fn unsupported_media_type(message: &str, details: Vec<Value>) -> Response {
    error(Code::UnsupportedMediaType, message, details)
}

/// HTTP 406 Not Acceptable style error.
pub fn not_acceptable(message: &str, details: Vec<Value>) -> Response {
    error(Code::NotAcceptable, message, details)
}

/// HTTP 413 Payload Too Large style error.
pub fn payload_too_large(message: &str, details: Vec<Value>) -> Response {
    error(Code::PayloadTooLarge, message, details)
}

/// HTTP 429 Too Many Requests style error.
pub fn too_many_requests(message: &str, details: Vec<Value>) -> Response {
    error(Code::TooManyRequests, message, details)
}

/// HTTP 422 Unprocessable Content style error.
pub fn unprocessable_content(message: &str, details: Vec<Value>) -> Response {
    error(Code::UnprocessableContent, message, details)
}
