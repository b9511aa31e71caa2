//! Tests for quote-tolerant line tokenization

use super::super::tokenizer::tokenize_line;

#[test]
fn test_plain_comma_split() {
    assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_quoted_field_protects_commas() {
    let fields = tokenize_line(r#"9:00 AM,"Breakfast, continental",Dining Hall"#);
    assert_eq!(
        fields,
        vec!["9:00 AM", "Breakfast, continental", "Dining Hall"]
    );
}

#[test]
fn test_quotes_never_reach_output() {
    assert_eq!(tokenize_line(r#""Quoted",plain"#), vec!["Quoted", "plain"]);
    // Adjacent quoted runs merge into one field
    assert_eq!(tokenize_line(r#""a""b""#), vec!["ab"]);
}

#[test]
fn test_unterminated_quote_keeps_rest_of_line() {
    let fields = tokenize_line(r#"Hall,"Open house, drop in any time"#);
    assert_eq!(fields, vec!["Hall", "Open house, drop in any time"]);
}

#[test]
fn test_trailing_separator_yields_empty_field() {
    assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
    assert_eq!(tokenize_line(",,"), vec!["", "", ""]);
}

#[test]
fn test_empty_line_yields_single_empty_field() {
    assert_eq!(tokenize_line(""), vec![""]);
}

#[test]
fn test_fields_are_whitespace_trimmed() {
    assert_eq!(tokenize_line("  a  ,  b  "), vec!["a", "b"]);
    assert_eq!(tokenize_line(" Main Hall "), vec!["Main Hall"]);
}

#[test]
fn test_carriage_return_is_trimmed() {
    assert_eq!(tokenize_line("Monday,9:00\r"), vec!["Monday", "9:00"]);
}
