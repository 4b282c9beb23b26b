//! JSON value model
//!
//! The SDK decodes and encodes through `serde_json::Value` with insertion
//! order preserved, so query strings and aggregated error messages come out
//! in document order.

pub use serde_json::Value as JsonValue;

/// An ordered mapping from string keys to JSON values.
pub type JsonDictionary = serde_json::Map<String, JsonValue>;

/// Name of the JSON type of `value`, as used in decode errors.
pub fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Unwrap an object literal (usually from `json!`) into a dictionary.
///
/// Anything other than an object yields an empty dictionary.
pub(crate) fn dictionary(value: JsonValue) -> JsonDictionary {
    match value {
        JsonValue::Object(map) => map,
        _ => JsonDictionary::new(),
    }
}
