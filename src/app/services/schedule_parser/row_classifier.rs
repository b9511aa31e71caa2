//! Mapping row fields to semantic activity slots
//!
//! Each data row walks a first-match rule chain per column: header keyword
//! hints, then content patterns, then column position. A slot takes at most
//! one column, and leftover values land in the extras map. A row is dropped
//! only when it ends up with no day, no time, and no activity.

use indexmap::IndexMap;

use super::header::HeaderHints;
use crate::app::models::{ActivityRecord, SemanticRole};
use crate::constants::{
    DATE_PATTERN, FALLBACK_GROUP_LABEL, MERIDIEM_MARKERS, MONTH_MARKER, TIME_PATTERN,
    WEEKDAY_NAMES, synthetic_day_label,
};

/// A data row mapped to a day label and an activity record
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    /// Day group the activity belongs to
    pub day_label: String,

    /// The extracted activity
    pub record: ActivityRecord,
}

/// Working slot values for one row. Empty means unclaimed.
#[derive(Debug, Default)]
struct SlotValues {
    day: String,
    time: String,
    activity: String,
    description: String,
    location: String,
    instructor: String,
    notes: String,
}

impl SlotValues {
    fn get(&self, role: SemanticRole) -> &str {
        match role {
            SemanticRole::Day => &self.day,
            SemanticRole::Time => &self.time,
            SemanticRole::Activity => &self.activity,
            SemanticRole::Description => &self.description,
            SemanticRole::Location => &self.location,
            SemanticRole::Instructor => &self.instructor,
            SemanticRole::Notes => &self.notes,
        }
    }

    fn set(&mut self, role: SemanticRole, value: &str) {
        let slot = match role {
            SemanticRole::Day => &mut self.day,
            SemanticRole::Time => &mut self.time,
            SemanticRole::Activity => &mut self.activity,
            SemanticRole::Description => &mut self.description,
            SemanticRole::Location => &mut self.location,
            SemanticRole::Instructor => &mut self.instructor,
            SemanticRole::Notes => &mut self.notes,
        };
        *slot = value.to_string();
    }
}

/// Classify one data row into a day label and activity record
///
/// `line_index` is the zero-based position of the row in the trimmed
/// payload (header row included); it feeds the synthetic day grouping for
/// rows that carry a time but no day. Returns `None` for rows with no day,
/// time, or activity content, which is the only way a row is dropped.
pub fn classify_row(
    fields: &[String],
    hints: &HeaderHints,
    line_index: usize,
) -> Option<ClassifiedRow> {
    let mut slots = SlotValues::default();

    for (index, value) in fields.iter().enumerate() {
        assign_column(&mut slots, hints, index, value);
    }

    let day_label = resolve_day_label(&slots, line_index)?;
    let extras = collect_extras(fields, hints, &slots, &day_label);

    let record = ActivityRecord {
        time: slots.time,
        activity: slots.activity,
        description: slots.description,
        location: non_empty(slots.location),
        instructor: non_empty(slots.instructor),
        notes: non_empty(slots.notes),
        extras,
    };

    Some(ClassifiedRow { day_label, record })
}

/// Check whether a value reads like a day or date
///
/// Matches full weekday names (any case), the month marker (exact case),
/// numeric date fragments like "8/12", or any hyphen. The hyphen rule is
/// broad on purpose: date ranges like "Monday - August 12" are common in
/// published sheets, and a first-column hyphenated value is usually a day.
pub fn looks_like_day(value: &str) -> bool {
    let lowered = value.to_lowercase();
    WEEKDAY_NAMES.iter().any(|name| lowered.contains(name))
        || value.contains(MONTH_MARKER)
        || DATE_PATTERN.is_match(value)
        || value.contains('-')
}

/// Check whether a value reads like a clock time
pub fn looks_like_time(value: &str) -> bool {
    let lowered = value.to_lowercase();
    TIME_PATTERN.is_match(value)
        || MERIDIEM_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Run one column through the rule chain
///
/// Roles are tried in priority order; the first role that is still
/// unclaimed and whose header hint or content pattern matches takes the
/// value, even when the value is empty. Columns no rule claims fall back to
/// position: the first four columns map to day, time, activity, and
/// description when those slots are still open and the value is non-empty.
fn assign_column(slots: &mut SlotValues, hints: &HeaderHints, index: usize, value: &str) {
    for role in SemanticRole::ALL {
        if !slots.get(role).is_empty() {
            continue;
        }
        if hints.suggests(index, role) || content_suggests(role, value) {
            slots.set(role, value);
            return;
        }
    }

    if value.is_empty() {
        return;
    }

    match index {
        0 if slots.day.is_empty() => slots.day = value.to_string(),
        1 if slots.time.is_empty() => slots.time = value.to_string(),
        2 if slots.activity.is_empty() => slots.activity = value.to_string(),
        3 if slots.description.is_empty() => slots.description = value.to_string(),
        _ => {}
    }
}

/// Content patterns that can claim a column without header support
fn content_suggests(role: SemanticRole, value: &str) -> bool {
    match role {
        SemanticRole::Day => looks_like_day(value),
        SemanticRole::Time => looks_like_time(value),
        _ => false,
    }
}

/// Resolve the day group label for a row
///
/// A row without a day value is grouped synthetically when it carries a
/// time, grouped under the generic label when it at least names an
/// activity, and dropped otherwise.
fn resolve_day_label(slots: &SlotValues, line_index: usize) -> Option<String> {
    if !slots.day.is_empty() {
        return Some(slots.day.clone());
    }
    if !slots.time.is_empty() {
        return Some(synthetic_day_label(line_index));
    }
    if !slots.activity.is_empty() {
        return Some(FALLBACK_GROUP_LABEL.to_string());
    }
    None
}

/// Collect values no slot absorbed into the extras map
///
/// A non-empty value is an extra unless it is identical to one of the
/// resolved slot values. Keys are header labels (or synthetic `Column_N`
/// names) in column order; a repeated key keeps its first position and
/// takes the later value.
fn collect_extras(
    fields: &[String],
    hints: &HeaderHints,
    slots: &SlotValues,
    day_label: &str,
) -> Option<IndexMap<String, String>> {
    let mut extras = IndexMap::new();

    for (index, value) in fields.iter().enumerate() {
        if value.is_empty() {
            continue;
        }

        let absorbed = value == day_label
            || *value == slots.time
            || *value == slots.activity
            || *value == slots.description
            || *value == slots.location
            || *value == slots.instructor
            || *value == slots.notes;

        if !absorbed {
            extras.insert(hints.extras_label(index), value.clone());
        }
    }

    if extras.is_empty() { None } else { Some(extras) }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
