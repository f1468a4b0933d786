//! Application-level response codes and their HTTP status mapping.
//!
//! [`Code`] is the enumeration carried in every error envelope. The
//! first block of variants mirrors the gRPC canonical codes; the second
//! block aligns directly with specific HTTP statuses. Both the status
//! mapping and the string labels are fixed tables — pure lookups with
//! no failure mode.

use axum::http::StatusCode;

/// Application-level response code.
///
/// Wire values received from callers that do not match a defined code
/// are preserved in [`Code::Unrecognized`] so the raw number survives
/// into logs and error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Success.
    Ok,
    /// Success with no additional content in the response body.
    OkNoContent,
    /// The operation was canceled, typically by the caller.
    Canceled,
    /// Unknown error.
    Unknown,
    /// The client specified an invalid argument.
    InvalidArgument,
    /// The operation expired before completion.
    DeadlineExceeded,
    /// A requested entity was not found.
    NotFound,
    /// An attempt to create an entity failed because one already exists.
    AlreadyExists,
    /// The caller does not have permission to execute the operation.
    PermissionDenied,
    /// Some resource has been exhausted.
    ResourceExhausted,
    /// The operation was rejected because the system is not in a required state.
    FailedPrecondition,
    /// The operation was aborted, typically due to a concurrency issue.
    Aborted,
    /// The operation was attempted past the valid range.
    OutOfRange,
    /// The operation is not implemented or not enabled in this service.
    Unimplemented,
    /// An invariant expected by the underlying system has been broken.
    Internal,
    /// The service is currently unavailable.
    Unavailable,
    /// Unrecoverable data loss or corruption.
    DataLoss,
    /// The request does not have valid authentication credentials.
    Unauthenticated,
    /// Maps to HTTP 400 Bad Request.
    BadRequest,
    /// Maps to HTTP 415 Unsupported Media Type.
    UnsupportedMediaType,
    /// Maps to HTTP 406 Not Acceptable.
    NotAcceptable,
    /// Maps to HTTP 413 Payload Too Large.
    PayloadTooLarge,
    /// Maps to HTTP 429 Too Many Requests.
    TooManyRequests,
    /// Maps to HTTP 422 Unprocessable Content.
    UnprocessableContent,
    /// Any numeric value outside the defined set.
    Unrecognized(u32),
}

impl Code {
    /// Map a raw wire value to its code. Undefined values are preserved
    /// as [`Code::Unrecognized`].
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Ok,
            1 => Self::OkNoContent,
            2 => Self::Canceled,
            3 => Self::Unknown,
            4 => Self::InvalidArgument,
            5 => Self::DeadlineExceeded,
            6 => Self::NotFound,
            7 => Self::AlreadyExists,
            8 => Self::PermissionDenied,
            9 => Self::ResourceExhausted,
            10 => Self::FailedPrecondition,
            11 => Self::Aborted,
            12 => Self::OutOfRange,
            13 => Self::Unimplemented,
            14 => Self::Internal,
            15 => Self::Unavailable,
            16 => Self::DataLoss,
            17 => Self::Unauthenticated,
            18 => Self::BadRequest,
            19 => Self::UnsupportedMediaType,
            20 => Self::NotAcceptable,
            21 => Self::PayloadTooLarge,
            22 => Self::TooManyRequests,
            23 => Self::UnprocessableContent,
            other => Self::Unrecognized(other),
        }
    }

    /// The HTTP status this code resolves to in an error envelope.
    #[must_use]
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::OkNoContent => StatusCode::NO_CONTENT,
            // 499 Client Closed Request (nginx convention, no http constant)
            Self::Canceled => {
                StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidArgument | Self::OutOfRange | Self::BadRequest => StatusCode::BAD_REQUEST,
            // Deliberately not the similarly named '412 Precondition Failed'
            Self::FailedPrecondition => StatusCode::BAD_REQUEST,
            Self::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::Aborted => StatusCode::CONFLICT,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::ResourceExhausted | Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnprocessableContent => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unknown | Self::Internal | Self::DataLoss | Self::Unrecognized(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::OkNoContent => "OKNoContent",
            Self::Canceled => "Canceled",
            Self::Unknown => "Unknown",
            Self::InvalidArgument => "InvalidArgument",
            Self::DeadlineExceeded => "DeadlineExceeded",
            Self::NotFound => "NotFound",
            Self::AlreadyExists => "AlreadyExists",
            Self::PermissionDenied => "PermissionDenied",
            Self::ResourceExhausted => "ResourceExhausted",
            Self::FailedPrecondition => "FailedPrecondition",
            Self::Aborted => "Aborted",
            Self::OutOfRange => "OutOfRange",
            Self::Unimplemented => "Unimplemented",
            Self::Internal => "Internal",
            Self::Unavailable => "Unavailable",
            Self::DataLoss => "DataLoss",
            Self::Unauthenticated => "Unauthenticated",
            Self::BadRequest => "BadRequest",
            Self::UnsupportedMediaType => "UnsupportedMediaType",
            Self::NotAcceptable => "NotAcceptable",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::TooManyRequests => "TooManyRequests",
            Self::UnprocessableContent => "UnprocessableContent",
            Self::Unrecognized(raw) => return write!(f, "Code({raw})"),
        };
        f.write_str(label)
    }
}
