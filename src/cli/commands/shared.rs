//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::models::Schedule;
use crate::app::services::renderer;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use chrono::Local;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Where the schedule data came from (URL, file path, or stdin)
    pub source: String,
    /// Number of distinct days in the parsed schedule
    pub days_found: usize,
    /// Number of activities across all days
    pub activities_found: usize,
    /// Number of rows that produced an activity
    pub rows_parsed: usize,
    /// Number of rows that were skipped
    pub rows_skipped: usize,
    /// Whether the embedded sample replaced the live source
    pub used_fallback: bool,
    /// Total run time
    pub processing_time: Duration,
}

impl RunSummary {
    /// Total number of data rows seen
    pub fn total_rows(&self) -> usize {
        self.rows_parsed + self.rows_skipped
    }
}

/// Set up structured logging for a command run
///
/// Later calls in the same process keep the first subscriber, so commands
/// can run back to back.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("schedule_processor={}", log_level)));

    let installed = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Render a schedule in the requested output format
pub fn render_schedule(schedule: &Schedule, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(renderer::render_human(schedule)),
        OutputFormat::Json => renderer::render_json(schedule),
        OutputFormat::Csv => Ok(renderer::render_csv(schedule)),
    }
}

/// Write rendered output to a file or stdout
pub fn write_rendered_output(rendered: &str, output_file: &Option<PathBuf>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|error| {
                Error::io(
                    format!("failed to write output file '{}'", path.display()),
                    error,
                )
            })?;
            info!("Rendered schedule written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Print the closing run summary for terminal output
pub fn print_run_summary(summary: &RunSummary) {
    let duration = HumanDuration(summary.processing_time);
    let finished_at = Local::now().format("%Y-%m-%d %H:%M:%S");

    println!("\n🎉 Schedule Processing Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Run Summary:");
    println!("   • Source: {}", summary.source);
    println!("   • Days found: {}", summary.days_found);
    println!("   • Activities found: {}", summary.activities_found);
    println!(
        "   • Rows parsed: {} of {}",
        summary.rows_parsed,
        summary.total_rows()
    );
    println!("   • Finished at: {}", finished_at);
    println!("   • Processing time: {}", duration);

    if summary.rows_skipped > 0 {
        println!("⚠️  Rows skipped: {}", summary.rows_skipped);
    }
    if summary.used_fallback {
        println!("⚠️  Live source unavailable, sample schedule shown instead");
    }

    println!();
}

/// Create a spinner for indeterminate fetch progress
pub fn create_fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}
