//! Input Sanitization
//!
//! Normalizes untrusted form values before validation. This is not output
//! escaping: anything interpolated into HTML still goes through the
//! auto-escaping mail templates.

use serde_json::Value;

/// Maximum number of characters kept from any single field.
pub const MAX_FIELD_CHARS: usize = 1000;

/// Sanitize an arbitrary JSON value.
///
/// Only strings carry content; missing values and every other JSON type
/// sanitize to an empty string.
pub fn sanitize_value(input: Option<&Value>) -> String {
    match input {
        Some(Value::String(s)) => sanitize_str(s),
        _ => String::new(),
    }
}

/// Trim whitespace and byte-order marks, drop `<` and `>`, and keep at most
/// [`MAX_FIELD_CHARS`] characters.
pub fn sanitize_str(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .take(MAX_FIELD_CHARS)
        .collect()
}
