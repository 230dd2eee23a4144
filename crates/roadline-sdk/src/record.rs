use serde_json::Value;

/// Returns `true` if `value` counts as storable record content.
///
/// Only non-empty JSON containers qualify. Empty objects, empty arrays,
/// `null`, and bare scalars are rejected at the boundary with "content is
/// required": a record is a document, not a lone value.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}
