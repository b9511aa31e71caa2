//! Convert command implementation
//!
//! Reads schedule CSV from a local file or stdin, parses it, and renders
//! the result in the requested output format.

use crate::app::services::schedule_parser::parse_schedule;
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::cli::commands::shared::{self, RunSummary};
use crate::{Error, Result};
use std::io::Read;
use std::time::Instant;
use tracing::{info, warn};

/// Execute the convert command with the given arguments
pub async fn run_convert(args: ConvertArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let source_label = if args.is_stdin() {
        "stdin".to_string()
    } else {
        args.input.display().to_string()
    };
    info!("Converting schedule data from {}", source_label);

    args.validate()?;

    let csv_text = read_input(&args)?;
    let result = parse_schedule(&csv_text);

    if result.stats.total_rows > 0 && !result.stats.is_successful() {
        warn!(
            "Low parse success rate: {:.1}%",
            result.stats.success_rate()
        );
    }

    let rendered = shared::render_schedule(&result.schedule, &args.output_format)?;
    shared::write_rendered_output(&rendered, &args.output_file)?;

    let summary = RunSummary {
        source: source_label,
        days_found: result.schedule.day_count(),
        activities_found: result.schedule.activity_count(),
        rows_parsed: result.stats.rows_parsed,
        rows_skipped: result.stats.rows_skipped,
        used_fallback: false,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Conversion completed in {:.2}s: {} days, {} activities",
        summary.processing_time.as_secs_f64(),
        summary.days_found,
        summary.activities_found
    );

    if matches!(args.output_format, OutputFormat::Human) && !args.quiet {
        shared::print_run_summary(&summary);
    }

    Ok(summary)
}

/// Read schedule CSV from the input file or stdin
fn read_input(args: &ConvertArgs) -> Result<String> {
    if args.is_stdin() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|error| Error::io("failed to read schedule data from stdin", error))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(&args.input).map_err(|error| {
            Error::io(
                format!("failed to read input file '{}'", args.input.display()),
                error,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_convert_writes_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("schedule.csv");
        std::fs::write(
            &input,
            "Day,Time,Activity\nMonday,9:00 AM,Yoga\nTuesday,2:00 PM,Climbing\n",
        )
        .unwrap();
        let output = temp_dir.path().join("schedule.json");

        let args = ConvertArgs {
            input,
            output_format: OutputFormat::Json,
            output_file: Some(output.clone()),
            quiet: true,
            ..Default::default()
        };

        let summary = run_convert(args).await.unwrap();
        assert_eq!(summary.days_found, 2);
        assert_eq!(summary.rows_parsed, 2);
        assert!(!summary.used_fallback);

        let written = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["Monday"][0]["activity"], "Yoga");
        assert_eq!(value["Tuesday"][0]["time"], "2:00 PM");
    }

    #[tokio::test]
    async fn test_run_convert_writes_csv_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("schedule.csv");
        std::fs::write(&input, "Day,Time,Activity\nMonday,9:00 AM,Yoga\n").unwrap();
        let output = temp_dir.path().join("normalized.csv");

        let args = ConvertArgs {
            input,
            output_format: OutputFormat::Csv,
            output_file: Some(output.clone()),
            quiet: true,
            ..Default::default()
        };

        run_convert(args).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("Day,Time,Activity"));
        assert!(written.contains("Monday,9:00 AM,Yoga"));
    }

    #[tokio::test]
    async fn test_run_convert_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();

        let args = ConvertArgs {
            input: temp_dir.path().join("missing.csv"),
            quiet: true,
            ..Default::default()
        };

        assert!(run_convert(args).await.is_err());
    }
}
