//! Delimited-text record splitting.
//!
//! Catalog lines are comma separated, but titles such as
//! `"Data Structures, with Labs"` may carry the delimiter inside double
//! quotes. A doubled quote inside a quoted region is a literal `"`. An
//! unterminated quoted region is accepted as-is: the rest of the line becomes
//! part of the final field.

/// Field delimiter used by the bundled catalogs.
pub const DEFAULT_DELIMITER: char = ',';

/// Split one line into trimmed fields.
///
/// Always yields at least one field; an empty line produces `[""]`.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());
    fields
}
