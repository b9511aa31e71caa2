//! Quote-tolerant field splitting for single CSV lines
//!
//! Published sheet exports routinely break strict CSV rules: stray quotes,
//! quoted fields containing commas, and trailing separators all show up in
//! real documents. The tokenizer here recovers fields from such lines
//! instead of rejecting them.

/// Split one CSV line into trimmed field values
///
/// A quote character toggles comma protection and never appears in the
/// output. Commas outside quotes split fields, and the trailing buffer is
/// always emitted, so every line yields at least one field (an empty line
/// yields a single empty field). Each field is then stripped of at most one
/// leading and one trailing quote and whitespace-trimmed.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields.into_iter().map(|field| clean_field(&field)).collect()
}

/// Strip at most one leading and one trailing quote, then trim whitespace
fn clean_field(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.trim().to_string()
}
