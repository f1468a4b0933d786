//! `spacelink run` — start the server.
//!
//! Initializes logging, assembles the router with the standard
//! middleware chain, binds the listener, and serves until SIGTERM or
//! Ctrl+C. Embedding services call
//! [`server::build_router`](crate::server::build_router) with their own
//! routes instead; this binary runs the shell bare, which is useful for
//! smoke-testing deployments.

use std::net::SocketAddr;

use axum::Router;

use crate::cli::RunArgs;
use crate::error::SpacelinkError;
use crate::logging;
use crate::middleware::RequestLoggerConfig;
use crate::server::{self, ServerOptions};

pub async fn execute(args: RunArgs) -> Result<(), SpacelinkError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let options = ServerOptions {
        enable_ping: !args.disable_ping,
        max_body: args.max_body,
    };
    let logger = RequestLoggerConfig {
        log_get_requests: args.log_get_requests,
        level: args.request_log_level.to_level(),
    };

    let router = server::build_router(Router::new(), &options, logger);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        ping = options.enable_ping,
        max_body = options.max_body,
        "spacelink started"
    );

    server::serve(listener, router).await?;

    tracing::info!("spacelink stopped");
    Ok(())
}
