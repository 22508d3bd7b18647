//! ub - bootstrap utilities for service containers.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Render Java properties from the environment and run readiness checks
//!   through the shared library crates.
//! - Turn failures into structured exit codes.
//!
//! Does NOT handle:
//! - Property derivation or probing logic (see `crates/config`, `crates/probe`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Every run starts from a fresh environment snapshot and keeps no state.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
