//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`]. Each handler lives in
//! its own submodule.

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::SpacelinkError;

pub async fn dispatch(cli: Cli) -> Result<(), SpacelinkError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  spacelink v{version} \u{2014} reusable REST API server shell\n\n  \
         No command provided. To get started:\n\n    \
         spacelink run                     Start the server on 0.0.0.0:5555\n    \
         spacelink run -p 8080 --pretty    Local dev mode\n    \
         spacelink health                  Probe a running instance\n    \
         spacelink --help                  See all commands and options\n"
    );
}
