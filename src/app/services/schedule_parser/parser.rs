//! Parsing orchestration over the line stream
//!
//! Turns a raw CSV payload into a day-grouped schedule. Parsing never fails:
//! unusable rows are skipped and recorded in the statistics, and an empty
//! payload yields an empty result.

use tracing::{debug, info};

use super::header::HeaderHints;
use super::row_classifier::classify_row;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize_line;
use crate::app::models::Schedule;

/// Parse a CSV payload into a day-grouped schedule with statistics
///
/// The payload is trimmed and split into lines. Row zero becomes the header
/// when it mentions a day or date; every following line is a candidate data
/// row. Blank lines and rows without any day, time, or activity content are
/// counted and skipped. Running the parser twice on the same payload
/// produces equal results.
pub fn parse_schedule(csv_text: &str) -> ParseResult {
    let trimmed = csv_text.trim();
    if trimmed.is_empty() {
        debug!("Empty payload, returning empty schedule");
        return ParseResult::empty();
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    debug!("Found {} lines in payload", lines.len());

    let mut schedule = Schedule::new();
    let mut stats = ParseStats::new();

    let first_row = tokenize_line(lines[0]);
    let (hints, start_row) = match HeaderHints::detect(&first_row) {
        Some(hints) => {
            debug!("Header row detected with {} labels", hints.len());
            (hints, 1)
        }
        None => {
            debug!("No header row detected, treating row zero as data");
            (HeaderHints::empty(), 0)
        }
    };
    stats.header_detected = start_row == 1;

    for (line_index, raw_line) in lines.iter().enumerate().skip(start_row) {
        stats.total_rows += 1;
        let line = raw_line.trim();

        if line.is_empty() {
            stats.rows_skipped += 1;
            stats
                .skip_reasons
                .push(format!("line {}: empty line", line_index));
            continue;
        }

        let fields = tokenize_line(line);
        match classify_row(&fields, &hints, line_index) {
            Some(classified) => {
                schedule.add_activity(classified.day_label, classified.record);
                stats.rows_parsed += 1;
            }
            None => {
                stats.rows_skipped += 1;
                stats
                    .skip_reasons
                    .push(format!("line {}: no day/date identifier found", line_index));
                debug!("Skipped line {}: no day/date identifier found", line_index);
            }
        }
    }

    info!(
        "Parsing complete: {}/{} valid rows, {} days",
        stats.rows_parsed,
        stats.total_rows,
        schedule.day_count()
    );

    ParseResult { schedule, stats }
}
