//! ByteSleuth — byte-level statistics for arbitrary files.
//!
//! Thin binary entry point. All logic lives in the `bytesleuth-core`
//! and `bytesleuth-cli` crates.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = bytesleuth_cli::Cli::parse();

    // Initialise structured logging on stderr so stdout carries only the report.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("ByteSleuth starting");

    bytesleuth_cli::run_cli(&cli)
}
