//! Command-line argument definitions for the schedule processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, FALLBACK_DELAY_MS, MAX_RETRY_ATTEMPTS, RETRY_DELAY_MS,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the schedule processor
///
/// Converts published spreadsheet exports of multi-day event schedules from
/// CSV format into structured, day-grouped activity listings.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schedule-processor",
    version,
    about = "Convert published schedule sheets from CSV into day-grouped activity listings",
    long_about = "A tolerant processor for published spreadsheet exports of multi-day event \
                  schedules. Fetches or reads CSV data, maps messy columns onto day, time, \
                  activity, description, location, instructor, and notes fields, and renders \
                  the result as terminal cards, JSON, or normalized CSV. Rows that cannot be \
                  placed are skipped and reported instead of failing the whole document."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the schedule processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch a published CSV source and render the parsed schedule
    Fetch(FetchArgs),
    /// Convert a local CSV file into a rendered schedule
    Convert(ConvertArgs),
    /// Inspect a local CSV file and report how it parses
    Inspect(InspectArgs),
}

/// Arguments for the fetch command (live source retrieval)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// URL of the published CSV source
    ///
    /// Typically a published-to-web spreadsheet export link ending in
    /// output=csv. The response body is parsed as schedule CSV.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "URL of the published CSV source"
    )]
    pub url: String,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: u64,

    /// Total fetch attempts before giving up
    ///
    /// Transient transport failures are retried with a fixed delay between
    /// attempts. Error statuses and empty responses are not retried.
    #[arg(
        long = "retries",
        value_name = "COUNT",
        default_value_t = MAX_RETRY_ATTEMPTS,
        help = "Total fetch attempts before giving up"
    )]
    pub retries: usize,

    /// Delay between fetch attempts in milliseconds
    #[arg(
        long = "retry-delay",
        value_name = "MS",
        default_value_t = RETRY_DELAY_MS,
        help = "Delay between fetch attempts in milliseconds"
    )]
    pub retry_delay_ms: u64,

    /// Fail instead of falling back to the embedded sample schedule
    ///
    /// By default, a failed fetch or a source with no usable rows falls
    /// back to the embedded sample so there is always something to show.
    #[arg(
        long = "no-fallback",
        help = "Fail instead of falling back to the embedded sample schedule"
    )]
    pub no_fallback: bool,

    /// Delay before loading the sample fallback in milliseconds
    #[arg(
        long = "fallback-delay",
        value_name = "MS",
        default_value_t = FALLBACK_DELAY_MS,
        help = "Delay before loading the sample fallback in milliseconds"
    )]
    pub fallback_delay_ms: u64,

    /// Output format for the rendered schedule
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the rendered schedule"
    )]
    pub output_format: OutputFormat,

    /// Output file for the rendered schedule
    ///
    /// If not specified, outputs to stdout. Only json and csv formats can
    /// be written to a file.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the rendered schedule"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the convert command (local file conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input CSV file, or - for standard input
    #[arg(value_name = "FILE", help = "Input CSV file (use - for stdin)")]
    pub input: PathBuf,

    /// Output format for the rendered schedule
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the rendered schedule"
    )]
    pub output_format: OutputFormat,

    /// Output file for the rendered schedule
    ///
    /// If not specified, outputs to stdout. Only json and csv formats can
    /// be written to a file.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the rendered schedule"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (parse diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input CSV file to inspect
    #[arg(value_name = "FILE", help = "Input CSV file to inspect")]
    pub input: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for rendered schedules
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Colored day cards for the terminal
    Human,
    /// JSON format for scripting
    Json,
    /// Normalized CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::configuration("Source URL cannot be empty"));
        }

        if self.retries == 0 {
            return Err(Error::configuration(
                "Fetch attempt count must be greater than 0",
            ));
        }

        validate_output_target(&self.output_format, self.output_file.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the fetch spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.is_stdin() && !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        validate_output_target(&self.output_format, self.output_file.as_deref())
    }

    /// Check whether input should be read from standard input
    pub fn is_stdin(&self) -> bool {
        self.input == Path::new("-")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Shared checks for the rendered output target
///
/// Terminal output may be colored, so only the machine formats can go to a
/// file. The output directory must already exist.
fn validate_output_target(format: &OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let Some(output_file) = output_file else {
        return Ok(());
    };

    if matches!(format, OutputFormat::Human) {
        return Err(Error::configuration(
            "Human output is for the terminal; use --output-format json or csv with --output-file",
        ));
    }

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(Error::configuration(format!(
                "Output file directory does not exist: {}",
                parent.display()
            )));
        }
    }

    Ok(())
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: MAX_RETRY_ATTEMPTS,
            retry_delay_ms: RETRY_DELAY_MS,
            no_fallback: false,
            fallback_delay_ms: FALLBACK_DELAY_MS,
            output_format: OutputFormat::Human,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            output_format: OutputFormat::Human,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}
