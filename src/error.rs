//! Unified error types for Spacelink.
//!
//! [`SpacelinkError`] covers CLI and bootstrap failures (bad listen
//! address, bind errors, health probe problems). Response formatting
//! itself is infallible and never appears here: every response code
//! resolves to a status through a total lookup table.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpacelinkError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Ping check failed with status {0}")]
    PingFailed(hyper::StatusCode),
}
