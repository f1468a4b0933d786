//! Spacelink is a reusable REST API server shell.
//!
//! It wraps an Axum router with a standard set of cross-cutting
//! middlewares (CORS, request-ID tagging, cache suppression, structured
//! request logging), standardizes JSON success/error payloads, and maps
//! an application-level response-code enumeration to HTTP status codes.
//! Callers bring their own routes; Spacelink supplies the envelope
//! formatting, the middleware chain, a `GET /ping` health endpoint, and
//! graceful startup/shutdown.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health).
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /ping` endpoint handler and the JSON 404 fallback.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- CORS, request-ID, no-cache, and request-logger layers.
//! - [`response`] -- Response-code table and JSON envelope types/helpers.
//! - [`server`] -- Axum router assembly, client-IP resolution, and
//!   graceful shutdown.

// Public functions are consumed both by the binary and by embedding services.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod error;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod server;
