//! Inspect command implementation
//!
//! Reports how a local CSV file parses: header detection, row counts, day
//! grouping, skipped rows, a raw preview, and the full parsed structure.
//! Useful when a published sheet renders with missing or misplaced fields.

use crate::app::services::schedule_parser::{ParseResult, parse_schedule};
use crate::cli::args::InspectArgs;
use crate::cli::commands::shared::{self, RunSummary};
use crate::constants::INSPECT_PREVIEW_CHARS;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Execute the inspect command with the given arguments
pub async fn run_inspect(args: InspectArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    shared::setup_logging(args.get_log_level(), false)?;
    info!("Inspecting schedule source: {}", args.input.display());

    args.validate()?;

    let csv_text = std::fs::read_to_string(&args.input).map_err(|error| {
        Error::io(
            format!("failed to read input file '{}'", args.input.display()),
            error,
        )
    })?;

    let result = parse_schedule(&csv_text);
    let report = build_inspection_report(&args.input, &csv_text, &result)?;
    println!("{}", report);

    let summary = RunSummary {
        source: args.input.display().to_string(),
        days_found: result.schedule.day_count(),
        activities_found: result.schedule.activity_count(),
        rows_parsed: result.stats.rows_parsed,
        rows_skipped: result.stats.rows_skipped,
        used_fallback: false,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Inspection completed in {:.2}s",
        summary.processing_time.as_secs_f64()
    );

    Ok(summary)
}

/// Build the inspection report as a formatted string
fn build_inspection_report(path: &Path, csv_text: &str, result: &ParseResult) -> Result<String> {
    let mut report = String::new();

    report.push_str("🔍 Schedule Source Inspection\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str(&format!("File: {}\n", path.display()));
    report.push_str(&format!(
        "Size: {} bytes, {} lines\n",
        csv_text.len(),
        csv_text.lines().count()
    ));

    let first_line = csv_text.trim().lines().next().unwrap_or("");
    if result.stats.header_detected {
        report.push_str(&format!("Header row: {}\n", first_line));
    } else {
        report.push_str("Header row: none detected, first row treated as data\n");
    }

    report.push_str(&format!(
        "Rows: {} total, {} parsed, {} skipped ({:.1}% success)\n",
        result.stats.total_rows,
        result.stats.rows_parsed,
        result.stats.rows_skipped,
        result.stats.success_rate()
    ));

    if !result.schedule.is_empty() {
        report.push_str("\n📅 Days:\n");
        for (day_label, records) in result.schedule.days() {
            report.push_str(&format!("   • {}: {} activities\n", day_label, records.len()));
        }
    }

    if !result.stats.skip_reasons.is_empty() {
        report.push_str("\n⚠️  Skipped rows:\n");
        for reason in &result.stats.skip_reasons {
            report.push_str(&format!("   • {}\n", reason));
        }
    }

    report.push_str(&format!(
        "\n📄 Raw preview (first {} chars):\n",
        INSPECT_PREVIEW_CHARS
    ));
    let preview: String = csv_text.chars().take(INSPECT_PREVIEW_CHARS).collect();
    report.push_str(&preview);
    if csv_text.chars().nth(INSPECT_PREVIEW_CHARS).is_some() {
        report.push_str("\n...");
    }
    report.push('\n');

    report.push_str("\n📦 Parsed structure:\n");
    report.push_str(&serde_json::to_string_pretty(result)?);
    report.push('\n');

    Ok(report)
}
