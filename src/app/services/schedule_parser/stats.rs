//! Parsing statistics and result structures
//!
//! This module provides types for tracking row-level parsing outcomes and
//! bundling the parsed schedule with its statistics for downstream use.

use serde::{Deserialize, Serialize};

use crate::app::models::Schedule;

/// Parsing result with the day-grouped schedule and statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Day-grouped activities
    pub schedule: Schedule,

    /// Row-level parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Result for an empty payload
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Row-level parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of candidate data rows examined, blank lines included
    pub total_rows: usize,

    /// Number of rows that produced an activity
    pub rows_parsed: usize,

    /// Number of rows skipped as blank or unclassifiable
    pub rows_skipped: usize,

    /// Whether row zero was treated as a header row
    pub header_detected: bool,

    /// Reasons for skipped rows, in source order
    pub skip_reasons: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_parsed: 0,
            rows_skipped: 0,
            header_detected: false,
            skip_reasons: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
