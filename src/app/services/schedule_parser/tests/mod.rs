//! Test utilities and fixtures for schedule parser testing
//!
//! This module provides shared CSV fixtures used across the parser test
//! modules. Fixture values are chosen so that no content pattern fires by
//! accident; tests that exercise the pattern quirks build their own rows.

mod row_classifier_tests;
mod tokenizer_tests;

/// Helper to create a well-formed headered schedule sheet
pub fn create_headered_csv() -> String {
    r#"Day,Time,Activity,Description,Location,Instructor
Monday,9:00 AM,Opening Circle,"Welcome, introductions, agenda",Great Hall,Rivera
Monday,11:30 AM,Knots Workshop,Figure eights and bowlines,Great Hall,Chen
Tuesday,9:00 AM,River Walk,Easy riverside loop,Trailhead,Rivera"#
        .to_string()
}

/// Helper to create a headerless sheet that relies on column positions
pub fn create_headerless_csv() -> String {
    r#"Crafts,9:30,Workshop
Juggling,10:15,Practice"#
        .to_string()
}

/// Helper to turn string slices into owned field vectors
pub fn create_fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
