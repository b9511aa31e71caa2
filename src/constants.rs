//! Application constants for the schedule processor
//!
//! This module contains the heuristic keyword tables, content-pattern
//! definitions, default values, and the embedded sample schedule used
//! throughout the schedule processor application.

use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Header Keyword Tables
// =============================================================================

/// Header keyword lists for mapping column labels to semantic roles
///
/// A column label suggests a role when its lowercased form contains any of
/// the role's keywords as a substring.
pub mod keywords {
    /// Day/date column labels. Also used to decide whether row zero is a
    /// header row at all.
    pub const DAY: &[&str] = &["day", "date"];

    /// Time column labels
    pub const TIME: &[&str] = &["time", "hour"];

    /// Activity title column labels
    pub const ACTIVITY: &[&str] = &["activity", "event", "session", "title"];

    /// Description column labels. "note" also matches a "Notes" label; the
    /// description rule runs before the notes rule and wins the column.
    pub const DESCRIPTION: &[&str] = &["description", "detail", "note", "info"];

    /// Location column labels
    pub const LOCATION: &[&str] = &["location", "venue", "place", "room"];

    /// Instructor column labels
    pub const INSTRUCTOR: &[&str] = &["instructor", "teacher", "coach", "leader"];

    /// Notes column labels
    pub const NOTES: &[&str] = &["notes", "remarks", "comments"];
}

// =============================================================================
// Content Pattern Constants
// =============================================================================

/// Full weekday names matched case-insensitively inside day-like values.
/// Abbreviations ("Mon", "Tue") are deliberately absent; the positional
/// fallback covers first-column short forms.
pub const WEEKDAY_NAMES: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Month marker matched case-sensitively inside day-like values
pub const MONTH_MARKER: &str = "August";

/// Meridiem markers matched case-insensitively inside time-like values
pub const MERIDIEM_MARKERS: &[&str] = &["am", "pm"];

/// Numeric date fragment such as "8/12" or "12/08"
pub static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}/\d{1,2}").expect("valid date pattern"));

/// Clock time fragment such as "9:00" or "14:30"
pub static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid time pattern"));

// =============================================================================
// Grouping and Labeling Constants
// =============================================================================

/// Number of consecutive source lines grouped under one synthetic day label
pub const SYNTHETIC_DAY_GROUP_SIZE: usize = 10;

/// Prefix for synthetic day labels ("Day 1", "Day 2", ...)
pub const SYNTHETIC_DAY_PREFIX: &str = "Day";

/// Group label for rows that carry an activity but no day or time
pub const FALLBACK_GROUP_LABEL: &str = "Schedule";

/// Prefix for synthesized extras labels when a column has no header label
pub const SYNTHETIC_COLUMN_PREFIX: &str = "Column_";

// =============================================================================
// Fetch Configuration Defaults
// =============================================================================

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Retry constants for transient fetch errors
pub const MAX_RETRY_ATTEMPTS: usize = 3;
pub const RETRY_DELAY_MS: u64 = 1000;

/// Delay before rendering the embedded sample after a failed fetch
pub const FALLBACK_DELAY_MS: u64 = 1000;

/// User agent sent with schedule source requests
pub const USER_AGENT: &str = concat!("schedule-processor/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Inspection Constants
// =============================================================================

/// Maximum number of characters of raw payload shown by the inspector
pub const INSPECT_PREVIEW_CHARS: usize = 2000;

// =============================================================================
// Embedded Sample Schedule
// =============================================================================

/// Sample schedule used when the live source cannot be fetched.
/// Parsed through the normal pipeline, yielding two days of activities.
pub const SAMPLE_CSV: &str = r#"Day,Time,Activity,Description,Location,Instructor
Monday - August 12,9:00 AM,Registration & Welcome,"Check-in, get your gear, meet the instructors and fellow campers",Main Entrance,Team LOZ
Monday - August 12,10:00 AM,Basic Safety & Equipment,"Learn about protective gear, board selection, and safety fundamentals",Training Area A,
Monday - August 12,2:00 PM,Hill Practice - Beginner,"Start with gentle slopes, focus on balance and basic stance",Beginner Hill,
Tuesday - August 13,9:00 AM,Advanced Hill Techniques,Learn to navigate steeper inclines with confidence,Advanced Hill,
Tuesday - August 13,2:00 PM,Stopping Methods Workshop,Master different stopping techniques for various situations,,
"#;

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the synthetic day label for a source line index
///
/// Lines are grouped in blocks of [`SYNTHETIC_DAY_GROUP_SIZE`]; the index is
/// zero-based and counts every line of the trimmed payload, header included.
pub fn synthetic_day_label(line_index: usize) -> String {
    format!(
        "{} {}",
        SYNTHETIC_DAY_PREFIX,
        line_index / SYNTHETIC_DAY_GROUP_SIZE + 1
    )
}

/// Build the synthesized extras label for an unlabelled column (1-based)
pub fn synthetic_column_label(column_index: usize) -> String {
    format!("{}{}", SYNTHETIC_COLUMN_PREFIX, column_index + 1)
}
