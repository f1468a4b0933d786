//! Cross-cutting middleware applied around every request.
//!
//! Each middleware is a stateless `axum::middleware::from_fn` function
//! wrapping a single request/response pair:
//!
//! - [`cors`] -- CORS header population and `OPTIONS` preflight short-circuit.
//! - [`request_id`] -- `X-Spacelink-Request-ID` tagging on request and response.
//! - [`no_cache`] -- cache-suppression response headers and conditional
//!   request header stripping.
//! - [`request_logger`] -- structured method/path/status/body logging.
//!
//! Ordering is decided in [`server::build_router`](crate::server::build_router);
//! none of these depend on each other.

pub mod cors;
pub mod no_cache;
pub mod request_id;
pub mod request_logger;

pub use request_id::REQUEST_ID_HEADER;
pub use request_logger::{RequestLogLevel, RequestLoggerConfig};
