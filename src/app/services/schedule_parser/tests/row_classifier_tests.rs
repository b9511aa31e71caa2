//! Tests for row-to-slot classification

use super::super::header::HeaderHints;
use super::super::row_classifier::{classify_row, looks_like_day, looks_like_time};
use super::create_fields;

fn hints_from(labels: &[&str]) -> HeaderHints {
    HeaderHints::detect(&create_fields(labels)).unwrap()
}

#[test]
fn test_looks_like_day_patterns() {
    assert!(looks_like_day("Monday"));
    assert!(looks_like_day("WEDNESDAY"));
    assert!(looks_like_day("August 12"));
    assert!(looks_like_day("8/12"));
    assert!(looks_like_day("Check-in"));

    assert!(!looks_like_day("Lunch"));
    // The month marker is matched with its exact case
    assert!(!looks_like_day("august 12"));
}

#[test]
fn test_looks_like_time_patterns() {
    assert!(looks_like_time("9:00"));
    assert!(looks_like_time("9:00 AM"));
    assert!(looks_like_time("2pm"));
    // Meridiem matching is a substring check, so ordinary words can pass
    assert!(looks_like_time("Camp"));

    assert!(!looks_like_time("Lunch"));
    assert!(!looks_like_time("9:5"));
}

#[test]
fn test_header_labels_claim_all_slots() {
    let hints = hints_from(&[
        "Day",
        "Time",
        "Activity",
        "Description",
        "Location",
        "Instructor",
        "Notes",
    ]);
    let fields = create_fields(&[
        "Monday",
        "9:00 AM",
        "Ropes",
        "Knot basics",
        "Hall",
        "Chen",
        "Bring gloves",
    ]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    assert_eq!(classified.day_label, "Monday");
    assert_eq!(classified.record.time, "9:00 AM");
    assert_eq!(classified.record.activity, "Ropes");
    assert_eq!(classified.record.description, "Knot basics");
    assert_eq!(classified.record.location, Some("Hall".to_string()));
    assert_eq!(classified.record.instructor, Some("Chen".to_string()));
    assert_eq!(classified.record.notes, Some("Bring gloves".to_string()));
    assert_eq!(classified.record.extras, None);
}

#[test]
fn test_positional_fallback_without_header() {
    let hints = HeaderHints::empty();
    let fields = create_fields(&["Crafts", "9:30", "Workshop", "Long session"]);

    let classified = classify_row(&fields, &hints, 0).unwrap();

    assert_eq!(classified.day_label, "Crafts");
    assert_eq!(classified.record.time, "9:30");
    assert_eq!(classified.record.activity, "Workshop");
    assert_eq!(classified.record.description, "Long session");
}

#[test]
fn test_day_slot_claimed_once() {
    // A second day-like value cannot displace the first; it falls through
    // to the positional rule instead
    let hints = HeaderHints::empty();
    let fields = create_fields(&["Monday - August 12", "Tuesday - August 13", "Opening"]);

    let classified = classify_row(&fields, &hints, 0).unwrap();

    assert_eq!(classified.day_label, "Monday - August 12");
    assert_eq!(classified.record.time, "Tuesday - August 13");
    assert_eq!(classified.record.activity, "Opening");
}

#[test]
fn test_hyphenated_value_claims_day_slot() {
    let hints = HeaderHints::empty();
    let fields = create_fields(&["Check-in", "9:00"]);

    let classified = classify_row(&fields, &hints, 0).unwrap();

    assert_eq!(classified.day_label, "Check-in");
    assert_eq!(classified.record.time, "9:00");
}

#[test]
fn test_meridiem_substring_claims_open_time_slot() {
    let hints = hints_from(&["Day", "Event", "Staff"]);
    let fields = create_fields(&["Monday", "Hike", "Camp Reception"]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    // "Camp" contains "am", so the unclaimed time slot takes the value
    assert_eq!(classified.record.activity, "Hike");
    assert_eq!(classified.record.time, "Camp Reception");
}

#[test]
fn test_notes_label_is_claimed_by_description_first() {
    let hints = hints_from(&["Day", "Notes"]);
    let fields = create_fields(&["Monday", "Remember towels"]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    assert_eq!(classified.record.description, "Remember towels");
    assert_eq!(classified.record.notes, None);
}

#[test]
fn test_synthetic_day_for_timed_rows() {
    let hints = hints_from(&["Day", "Time", "Activity"]);
    let fields = create_fields(&["", "8:15", ""]);

    let classified = classify_row(&fields, &hints, 23).unwrap();

    // Lines group in tens: line 23 lands in the third block
    assert_eq!(classified.day_label, "Day 3");
    assert_eq!(classified.record.time, "8:15");
}

#[test]
fn test_unclaimed_trailing_value_becomes_extra() {
    let hints = HeaderHints::empty();
    let fields = create_fields(&["9:00", "Standup"]);

    let classified = classify_row(&fields, &hints, 0).unwrap();

    assert_eq!(classified.day_label, "Day 1");
    assert_eq!(classified.record.time, "9:00");
    assert_eq!(classified.record.activity, "");

    let extras = classified.record.extras.unwrap();
    assert_eq!(extras.get("Column_2"), Some(&"Standup".to_string()));
}

#[test]
fn test_activity_only_rows_group_under_generic_label() {
    let hints = hints_from(&["Day", "Time", "Activity"]);
    let fields = create_fields(&["", "", "Closing Words"]);

    let classified = classify_row(&fields, &hints, 5).unwrap();

    assert_eq!(classified.day_label, "Schedule");
    assert_eq!(classified.record.activity, "Closing Words");
}

#[test]
fn test_rows_without_identity_are_dropped() {
    let hints = hints_from(&["Day", "Time", "Activity", "Description"]);

    // A description alone does not keep a row
    let fields = create_fields(&["", "", "", "Just text"]);
    assert!(classify_row(&fields, &hints, 2).is_none());

    let empty = create_fields(&["", "", ""]);
    assert!(classify_row(&empty, &HeaderHints::empty(), 2).is_none());
}

#[test]
fn test_empty_header_cell_leaves_slot_open() {
    let hints = hints_from(&["Day", "Time"]);
    let fields = create_fields(&["", "Friday Gala"]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    // The empty first column is consumed by the day rule but does not fill
    // the slot, so the weekday value still claims it
    assert_eq!(classified.day_label, "Friday Gala");
}

#[test]
fn test_extras_collect_unmapped_columns() {
    let hints = hints_from(&[
        "Day",
        "Time",
        "Activity",
        "Description",
        "Location",
        "Instructor",
        "Notes",
        "Gear",
    ]);
    let fields = create_fields(&[
        "Monday",
        "9:00",
        "Ropes",
        "Knot basics",
        "Hall",
        "Chen",
        "Bring gloves",
        "Static rope",
    ]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    let extras = classified.record.extras.unwrap();
    assert_eq!(extras.len(), 1);
    assert_eq!(extras.get("Gear"), Some(&"Static rope".to_string()));
}

#[test]
fn test_extras_skip_values_already_absorbed() {
    let hints = hints_from(&["Day", "Time", "Activity"]);
    let fields = create_fields(&["Monday", "9:00", "Gym", "Warmup", "Gym"]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    // The duplicate "Gym" matches the activity slot value, so nothing is
    // left over even though its column was never mapped
    assert_eq!(classified.record.description, "Warmup");
    assert_eq!(classified.record.extras, None);
}

#[test]
fn test_extras_repeated_label_keeps_first_position_and_last_value() {
    let hints = hints_from(&["Day", "Time", "Activity", "Description", "Tag", "Tag"]);
    let fields = create_fields(&["Monday", "9:00", "Gym", "Stretching", "red", "blue"]);

    let classified = classify_row(&fields, &hints, 1).unwrap();

    let extras = classified.record.extras.unwrap();
    assert_eq!(extras.len(), 1);
    assert_eq!(extras.get("Tag"), Some(&"blue".to_string()));
}
