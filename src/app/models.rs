//! Data models for schedule processing
//!
//! This module contains the core data structures for representing a parsed
//! event schedule: the semantic roles a spreadsheet column can map to, a
//! single scheduled activity, and the day-grouped schedule itself.

use crate::constants::keywords;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Semantic Column Roles
// =============================================================================

/// Semantic roles a spreadsheet column can be mapped to
///
/// Roles are listed in rule-priority order: when several rules could claim
/// the same column, the earlier role wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Day,
    Time,
    Activity,
    Description,
    Location,
    Instructor,
    Notes,
}

impl SemanticRole {
    /// All roles in rule-priority order
    pub const ALL: [SemanticRole; 7] = [
        SemanticRole::Day,
        SemanticRole::Time,
        SemanticRole::Activity,
        SemanticRole::Description,
        SemanticRole::Location,
        SemanticRole::Instructor,
        SemanticRole::Notes,
    ];

    /// Header keyword list associated with this role
    pub fn header_keywords(self) -> &'static [&'static str] {
        match self {
            SemanticRole::Day => keywords::DAY,
            SemanticRole::Time => keywords::TIME,
            SemanticRole::Activity => keywords::ACTIVITY,
            SemanticRole::Description => keywords::DESCRIPTION,
            SemanticRole::Location => keywords::LOCATION,
            SemanticRole::Instructor => keywords::INSTRUCTOR,
            SemanticRole::Notes => keywords::NOTES,
        }
    }

    /// Lowercase role name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            SemanticRole::Day => "day",
            SemanticRole::Time => "time",
            SemanticRole::Activity => "activity",
            SemanticRole::Description => "description",
            SemanticRole::Location => "location",
            SemanticRole::Instructor => "instructor",
            SemanticRole::Notes => "notes",
        }
    }
}

impl std::fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Activity Record Structure
// =============================================================================

/// A single scheduled activity as extracted from one sheet row
///
/// The three core fields are always present and may be empty; the optional
/// fields are only set when the sheet provided content for them. Serializes
/// to a JSON object in the same shape, with absent optionals omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Start time as written in the sheet (may be empty)
    #[serde(default)]
    pub time: String,

    /// Activity title (may be empty)
    #[serde(default)]
    pub activity: String,

    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Venue or room
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,

    /// Person leading the activity
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instructor: Option<String>,

    /// Free-form remarks
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,

    /// Unrecognized columns, keyed by header label, in column order
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extras: Option<IndexMap<String, String>>,
}

impl ActivityRecord {
    /// Check whether no field carries any content
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
            && self.activity.is_empty()
            && self.description.is_empty()
            && self.location.is_none()
            && self.instructor.is_none()
            && self.notes.is_none()
            && self.extras.is_none()
    }

    /// Check whether the record has a title or time to display as a heading
    pub fn has_heading(&self) -> bool {
        !self.activity.is_empty() || !self.time.is_empty()
    }
}

// =============================================================================
// Day-Grouped Schedule Structure
// =============================================================================

/// Day-grouped schedule preserving first-seen day order
///
/// Serializes transparently as a JSON object whose keys are day labels and
/// whose values are arrays of activities, matching the published data shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: IndexMap<String, Vec<ActivityRecord>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a day group, creating the group on first use
    ///
    /// Day groups keep the order in which their labels were first seen;
    /// records keep source row order within each group.
    pub fn add_activity(&mut self, day_label: impl Into<String>, record: ActivityRecord) {
        self.days.entry(day_label.into()).or_default().push(record);
    }

    /// Number of day groups
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of activities across all days
    pub fn activity_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Check whether the schedule holds no day groups
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day labels in first-seen order
    pub fn day_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.days.keys().map(String::as_str)
    }

    /// Iterate day groups in first-seen order
    pub fn days(&self) -> impl Iterator<Item = (&str, &[ActivityRecord])> + '_ {
        self.days
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    /// Activities for one day label
    pub fn get(&self, day_label: &str) -> Option<&[ActivityRecord]> {
        self.days.get(day_label).map(Vec::as_slice)
    }
}
