//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health), and their associated argument structs.
//! Every flag has an environment variable equivalent for container
//! deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::middleware::RequestLogLevel;

#[derive(Parser)]
#[command(
    name = "spacelink",
    version,
    about = "Reusable REST API server shell",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        spacelink run                        Start on 0.0.0.0:5555\n  \
        spacelink run -p 8080 --pretty       Local dev mode\n  \
        spacelink health                     Probe a running instance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the server
    Run(RunArgs),

    /// Check a running instance via its /ping endpoint
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        spacelink run                              Defaults (0.0.0.0:5555)\n  \
        spacelink run -p 8080 --pretty             Local dev mode\n  \
        spacelink run --disable-ping --json        Quiet container mode")]
pub struct RunArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 5555)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Disable the built-in GET /ping endpoint
    #[arg(long, env = "SPACELINK_DISABLE_PING")]
    pub disable_ping: bool,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    /// Log GET requests too (skipped by default)
    #[arg(
        long,
        env = "LOG_GET_REQUESTS",
        help_heading = "Request Logging"
    )]
    pub log_get_requests: bool,

    /// Level for per-request log events
    #[arg(
        long,
        env = "REQUEST_LOG_LEVEL",
        default_value = "info",
        help_heading = "Request Logging"
    )]
    pub request_log_level: RequestLogArg,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:5555")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum RequestLogArg {
    Off,
    Debug,
    Info,
}

impl RequestLogArg {
    #[must_use]
    pub const fn to_level(&self) -> RequestLogLevel {
        match self {
            Self::Off => RequestLogLevel::Off,
            Self::Debug => RequestLogLevel::Debug,
            Self::Info => RequestLogLevel::Info,
        }
    }
}
