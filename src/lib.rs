//! Schedule Processor Library
//!
//! A Rust library for converting published spreadsheet exports of multi-day
//! event schedules from CSV format into structured, day-grouped activity
//! listings.
//!
//! This library provides tools for:
//! - Tokenizing CSV lines with tolerance for quoted delimiters and sloppy quoting
//! - Detecting header rows and deriving per-column role hints from their labels
//! - Classifying row fields into day/time/activity/description/location/
//!   instructor/notes slots via header hints, content heuristics, and position
//! - Preserving unrecognized columns as labelled extras
//! - Grouping activities by day label in first-seen order
//! - Fetching published CSV sources with retries and a built-in sample fallback
//! - Rendering schedules as terminal cards, JSON, or normalized CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fetcher;
        pub mod renderer;
        pub mod schedule_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActivityRecord, Schedule, SemanticRole};
pub use app::services::schedule_parser::{ParseResult, ParseStats, parse_schedule};
pub use config::Config;

/// Result type alias for the schedule processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for schedule processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure while fetching the schedule source
    #[error("Transport error for '{url}': {message}")]
    Transport {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Schedule source responded with an empty body
    #[error("Empty payload from '{url}': source returned no data")]
    EmptyPayload { url: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output rendering error
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a transport error with context
    pub fn transport(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty payload error
    pub fn empty_payload(url: impl Into<String>) -> Self {
        Self::EmptyPayload { url: url.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a rendering error
    pub fn render(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::Render {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Transport {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Render {
            message: "JSON serialization failed".to_string(),
            source: Some(error),
        }
    }
}
