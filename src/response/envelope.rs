//! JSON envelope types returned to clients.
//!
//! [`ApiResponse`] is the full four-field envelope
//! (`code`/`message`/`description`/`details`); [`ErrorBody`] is the
//! lighter rest-style error shape (`code`/`message`/`details`). Both
//! are built once per request, serialized, and discarded — the HTTP
//! status rides along outside the JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::code::Code;

/// Standard API response envelope.
///
/// A "nil" response is the bare success marker: it serializes as the
/// JSON string `"success"` with HTTP 200 instead of the full envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub code: String,
    pub message: String,
    pub description: String,
    pub details: Value,
    #[serde(skip)]
    status: StatusCode,
    #[serde(skip)]
    nil: bool,
}

impl ApiResponse {
    /// Build an envelope for `code`; the HTTP status is fixed here from
    /// the code table and never changes afterwards.
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            description: String::new(),
            details: Value::Null,
            status: code.http_status(),
            nil: false,
        }
    }

    /// The bare success marker.
    #[must_use]
    pub fn nil() -> Self {
        Self {
            code: String::new(),
            message: String::new(),
            description: String::new(),
            details: Value::Null,
            status: StatusCode::OK,
            nil: true,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = details.into();
        self
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.nil
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        if self.nil {
            return (StatusCode::OK, Json("success")).into_response();
        }
        (self.status, Json(self)).into_response()
    }
}

/// Rest-style error envelope: `{"code", "message", "details"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Vec<Value>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>, details: Vec<Value>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details,
        }
    }
}
