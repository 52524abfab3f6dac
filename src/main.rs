// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kvtree` command-line entry point.
//!
//! Log output goes to stderr and is controlled with `RUST_LOG`
//! (for example `RUST_LOG=kvtree=debug`).

use clap::Parser;
use kvtree::adapters::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.run() {
        Ok(count) => {
            tracing::info!("Converted {} keys", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
