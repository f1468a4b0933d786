//! Axum router assembly and graceful shutdown.
//!
//! [`build_router`] merges caller-supplied routes with the built-in
//! `/ping` endpoint and JSON 404 fallback, then wraps everything in
//! the standard middleware chain (CORS outermost, then request-ID,
//! the request body size limit, request logging, and cache
//! suppression).
//! [`serve`] runs the router on a listener until [`shutdown_signal`]
//! fires.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use http::HeaderMap;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::SpacelinkError;
use crate::health::{not_found_handler, ping_handler};
use crate::middleware::{self, RequestLoggerConfig};

#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Register the built-in `GET /ping` endpoint.
    pub enable_ping: bool,
    /// Max request body size in bytes.
    pub max_body: usize,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            enable_ping: true,
            max_body: 1_048_576,
        }
    }
}

/// Wrap `api` routes in the standard Spacelink chain.
///
/// Layer order matters in three places: CORS must short-circuit
/// preflights before anything else runs, the panic catcher sits
/// outermost so a panicking handler still produces a response, and the
/// body limit wraps the request logger so the logger's body buffering
/// is bounded by `max_body`.
pub fn build_router(api: Router, options: &ServerOptions, logger: RequestLoggerConfig) -> Router {
    let mut router = api;
    if options.enable_ping {
        router = router.route("/ping", get(ping_handler));
    }

    // Applied as separate `Router::layer` calls (innermost first) rather
    // than one `ServiceBuilder` stack: `RequestBodyLimitLayer` changes the
    // request body type, and `Router::layer` re-wraps it into
    // `axum::body::Body` so the surrounding `from_fn` middlewares accept it.
    router
        .fallback(not_found_handler)
        .layer(axum::middleware::from_fn(middleware::no_cache::no_cache))
        .layer(axum::middleware::from_fn_with_state(
            logger,
            middleware::request_logger::log_request,
        ))
        .layer(RequestBodyLimitLayer::new(options.max_body))
        .layer(axum::middleware::from_fn(middleware::request_id::request_id))
        .layer(axum::middleware::from_fn(middleware::cors::cors))
        .layer(CatchPanicLayer::new())
}

/// Serve `router` until SIGTERM / Ctrl+C.
pub async fn serve(
    listener: tokio::net::TcpListener,
    router: Router,
) -> Result<(), SpacelinkError> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

/// Client IP as reported by `X-Forwarded-For`, falling back to the
/// peer address of the connection.
#[must_use]
pub fn client_ip(headers: &HeaderMap, remote: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| remote.ip().to_string(), String::from)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
