//! Tolerant CSV parser for published schedule sheets
//!
//! This module turns messy spreadsheet exports into a structured, day-grouped
//! schedule. The parser favors recovering every usable row over strict format
//! validation: unknown columns, missing headers, and malformed quoting all
//! degrade gracefully instead of failing the document.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration over the line stream
//! - [`tokenizer`] - Quote-tolerant field splitting for single lines
//! - [`header`] - Header row detection and column label hints
//! - [`row_classifier`] - Mapping row fields to semantic activity slots
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use schedule_processor::app::services::schedule_parser::parse_schedule;
//!
//! let result = parse_schedule("Day,Time,Activity\nMonday,9:00 AM,Yoga\n");
//!
//! assert_eq!(result.schedule.day_count(), 1);
//! assert_eq!(result.stats.rows_parsed, 1);
//! ```

pub mod header;
pub mod parser;
pub mod row_classifier;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::HeaderHints;
pub use parser::parse_schedule;
pub use row_classifier::ClassifiedRow;
pub use stats::{ParseResult, ParseStats};
