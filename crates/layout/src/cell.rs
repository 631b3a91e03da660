//! Scalar-to-display coercion for table cells.

use serde_json::Value;

/// Placeholder shown for values a flat cell cannot represent as text.
pub const NOT_VIEWABLE: &str = "Not viewable";

/// Reduces a record value to the string a table cell displays.
///
/// Strings pass through, numbers use their locale-free decimal form and
/// booleans become the literals `true`/`false`. Null and structured
/// values get the [`NOT_VIEWABLE`] placeholder.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => NOT_VIEWABLE.to_string(),
    }
}
