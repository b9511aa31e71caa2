//! Fetch command implementation
//!
//! Retrieves a published CSV source over HTTP, parses it into a day-grouped
//! schedule, and renders the result. A failed or empty source falls back to
//! the embedded sample schedule unless fallback is disabled.

use crate::app::services::fetcher::{self, ScheduleFetcher};
use crate::app::services::schedule_parser::{ParseResult, parse_schedule};
use crate::cli::args::{FetchArgs, OutputFormat};
use crate::cli::commands::shared::{self, RunSummary};
use crate::config::Config;
use crate::Result;
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

/// Execute the fetch command with the given arguments
pub async fn run_fetch(args: FetchArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    shared::setup_logging(args.get_log_level(), args.quiet)?;
    info!("Starting schedule fetch from {}", args.url);

    args.validate()?;

    let config = build_config(&args);
    config.validate()?;

    let (result, used_fallback) = load_schedule(&args, &config).await?;

    if result.stats.total_rows > 0 && !result.stats.is_successful() {
        warn!(
            "Low parse success rate: {:.1}%",
            result.stats.success_rate()
        );
    }

    let rendered = shared::render_schedule(&result.schedule, &args.output_format)?;
    shared::write_rendered_output(&rendered, &args.output_file)?;

    let summary = RunSummary {
        source: args.url.clone(),
        days_found: result.schedule.day_count(),
        activities_found: result.schedule.activity_count(),
        rows_parsed: result.stats.rows_parsed,
        rows_skipped: result.stats.rows_skipped,
        used_fallback,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Fetch completed in {:.2}s: {} days, {} activities",
        summary.processing_time.as_secs_f64(),
        summary.days_found,
        summary.activities_found
    );

    if matches!(args.output_format, OutputFormat::Human) && !args.quiet {
        shared::print_run_summary(&summary);
    }

    Ok(summary)
}

/// Map CLI arguments onto the runtime configuration
fn build_config(args: &FetchArgs) -> Config {
    let config = Config::default()
        .with_timeout_secs(args.timeout_secs)
        .with_max_retries(args.retries)
        .with_retry_delay_ms(args.retry_delay_ms);

    if args.no_fallback {
        config.without_fallback()
    } else {
        config.with_fallback_delay_ms(args.fallback_delay_ms)
    }
}

/// Fetch and parse the live source, falling back to the sample when allowed
///
/// The second element of the returned pair records whether the sample
/// replaced the live source.
async fn load_schedule(args: &FetchArgs, config: &Config) -> Result<(ParseResult, bool)> {
    let fetcher = ScheduleFetcher::new(&config.source)?;

    let spinner = if args.show_progress() {
        Some(shared::create_fetch_spinner("Fetching schedule data..."))
    } else {
        None
    };

    let fetched = fetcher.fetch(&args.url).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match fetched {
        Ok(csv_text) => {
            let result = parse_schedule(&csv_text);
            if result.schedule.is_empty() && config.fallback.enabled {
                warn!("No usable schedule rows at {}", args.url);
                return Ok((load_sample(config).await, true));
            }
            Ok((result, false))
        }
        Err(error) if config.fallback.enabled => {
            warn!("Fetch failed: {}", error);
            Ok((load_sample(config).await, true))
        }
        Err(error) => Err(error),
    }
}

/// Load the embedded sample schedule after the configured delay
async fn load_sample(config: &Config) -> ParseResult {
    info!(
        "Loading embedded sample schedule in {} ms",
        config.fallback.delay_ms
    );
    sleep(Duration::from_millis(config.fallback.delay_ms)).await;
    fetcher::fallback_schedule()
}
