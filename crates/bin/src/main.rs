//! flatkv command line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("flatkv=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Flatten(args) => commands::flatten::run(args),
        Commands::Unflatten(args) => commands::unflatten::run(args),
    };

    if let Err(err) = result {
        tracing::debug!(module = err.module(), "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
