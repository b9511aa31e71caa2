//! Command implementations for the schedule processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod convert;
pub mod fetch;
pub mod inspect;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the schedule processor
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `fetch`: retrieve a published CSV source and render the schedule
/// - `convert`: render a local CSV file or stdin
/// - `inspect`: report how a CSV file parses
pub async fn run(args: Args) -> Result<RunSummary> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Convert(convert_args) => convert::run_convert(convert_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
    }
}
