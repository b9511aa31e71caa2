//! Schedule rendering for terminal, JSON, and CSV output
//!
//! This module turns a parsed schedule into its three output shapes: colored
//! day cards for the terminal, pretty-printed JSON in the published data
//! shape, and a normalized CSV export with one row per activity.

use colored::Colorize;

use crate::app::models::{ActivityRecord, Schedule};
use crate::{Error, Result};

/// Render the schedule as colored day cards for the terminal
///
/// Each day group becomes a card with an underlined header; activities show
/// their time and title lines followed by indented detail lines. Activities
/// with neither a title nor a time get a positional placeholder title.
pub fn render_human(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return "No schedule data found.\n".to_string();
    }

    let mut output = String::new();

    for (day_label, records) in schedule.days() {
        output.push_str(&format!("📅 {}\n", day_label.bold().cyan()));
        output.push_str(&format!("{}\n", "=".repeat(day_label.chars().count() + 3)));

        for (index, record) in records.iter().enumerate() {
            if !record.time.is_empty() {
                output.push_str(&format!("  {}\n", record.time.yellow()));
            }
            if !record.activity.is_empty() {
                output.push_str(&format!("  {}\n", record.activity.bold()));
            } else if record.time.is_empty() {
                let placeholder = format!("Activity {}", index + 1);
                output.push_str(&format!("  {}\n", placeholder.bold()));
            }

            for part in detail_parts(record) {
                output.push_str(&format!("    {}\n", part));
            }
            output.push('\n');
        }
    }

    output
}

/// Render the schedule as pretty-printed JSON
///
/// The output is an object keyed by day label, with days in first-seen
/// order and absent optional fields omitted.
pub fn render_json(schedule: &Schedule) -> Result<String> {
    serde_json::to_string_pretty(schedule)
        .map_err(|error| Error::render("failed to serialize schedule", Some(error)))
}

/// Render the schedule as a normalized CSV export
///
/// One row per activity with fixed columns; extras flatten into a single
/// `label: value` list column. Fields containing separators are quoted with
/// doubled inner quotes.
pub fn render_csv(schedule: &Schedule) -> String {
    let mut csv = String::new();
    csv.push_str("Day,Time,Activity,Description,Location,Instructor,Notes,Extras\n");

    for (day_label, records) in schedule.days() {
        for record in records {
            let extras = record.extras.as_ref().map_or_else(String::new, |extras| {
                extras
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join("; ")
            });

            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                csv_escape(day_label),
                csv_escape(&record.time),
                csv_escape(&record.activity),
                csv_escape(&record.description),
                csv_escape(record.location.as_deref().unwrap_or("")),
                csv_escape(record.instructor.as_deref().unwrap_or("")),
                csv_escape(record.notes.as_deref().unwrap_or("")),
                csv_escape(&extras)
            ));
        }
    }

    csv
}

/// Build the indented detail lines for one activity
fn detail_parts(record: &ActivityRecord) -> Vec<String> {
    let mut parts = Vec::new();

    if !record.description.is_empty() {
        parts.push(record.description.clone());
    }
    if let Some(location) = &record.location {
        parts.push(format!("📍 Location: {}", location));
    }
    if let Some(instructor) = &record.instructor {
        parts.push(format!("👨‍🏫 Instructor: {}", instructor));
    }
    if let Some(notes) = &record.notes {
        parts.push(format!("📝 Notes: {}", notes));
    }
    if let Some(extras) = &record.extras {
        for (key, value) in extras {
            parts.push(format!("{}: {}", key, value));
        }
    }

    parts
}

/// Escape CSV field values
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::schedule_parser::parse_schedule;

    fn sample_schedule() -> Schedule {
        let csv = "Day,Time,Activity,Description,Location,Instructor,Notes,Gear\n\
                   Monday,9:00 AM,Ropes,Knot basics,Hall,Chen,Bring gloves,Static rope\n\
                   Monday,,,Quiet reading corner open,,,,\n\
                   Tuesday,2:00 PM,\"Maps, compasses\",,,,,";
        parse_schedule(csv).schedule
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("simple"), "simple");
        assert_eq!(csv_escape("with,comma"), "\"with,comma\"");
        assert_eq!(csv_escape("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(csv_escape("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_render_human_shows_all_fields() {
        let output = render_human(&sample_schedule());

        assert!(output.contains("Monday"));
        assert!(output.contains("9:00 AM"));
        assert!(output.contains("Ropes"));
        assert!(output.contains("Knot basics"));
        assert!(output.contains("📍 Location: Hall"));
        assert!(output.contains("👨‍🏫 Instructor: Chen"));
        assert!(output.contains("📝 Notes: Bring gloves"));
        assert!(output.contains("Gear: Static rope"));
    }

    #[test]
    fn test_render_human_empty_schedule() {
        let output = render_human(&Schedule::new());
        assert_eq!(output, "No schedule data found.\n");
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample_schedule()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let monday = value.get("Monday").unwrap().as_array().unwrap();
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0]["activity"], "Ropes");
        assert_eq!(monday[0]["location"], "Hall");
        // Absent optionals are omitted, not null
        assert!(monday[1].get("location").is_none());
    }

    #[test]
    fn test_render_json_preserves_day_order() {
        let schedule = parse_schedule("Day,Time\nZebra Day,9:00\nAlpha Day,9:00").schedule;
        let json = render_json(&schedule).unwrap();

        let zebra = json.find("Zebra Day").unwrap();
        let alpha = json.find("Alpha Day").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn test_render_csv_rows_and_quoting() {
        let csv = render_csv(&sample_schedule());
        let lines: Vec<&str> = csv.trim_end().split('\n').collect();

        assert_eq!(
            lines[0],
            "Day,Time,Activity,Description,Location,Instructor,Notes,Extras"
        );
        // Header plus one row per activity
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Gear: Static rope"));
        // Activity titles containing commas are quoted on the way out
        assert!(lines[3].contains("\"Maps, compasses\""));
    }
}
