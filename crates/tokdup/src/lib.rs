//! # tokdup
//!
//! **CLI Binary**
//!
//! This is the entry point for the `tokdup` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install the log subscriber
//! * Load `tokdup.toml` and resolve it against the flags
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;
use tokdup_config::Cli;

/// Entry point used by the `tokdup` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global);

    let file = config::load_config(cli.global.config.as_deref())?;
    commands::dispatch(cli, file.as_ref())
}

/// Render an error with its context chain and remediation hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
