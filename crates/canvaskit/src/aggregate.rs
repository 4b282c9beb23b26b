//! Reduction of a JSON:API `errors` array into one message.

use crate::json::JsonValue;

/// Aggregate server errors into a single message.
///
/// Each entry contributes its `detail` string verbatim, then one
/// `"<Field> <message>."` line per message in its `meta` mapping. Lines are
/// joined with a single space. Returns `None` when nothing could be
/// extracted.
///
/// ```
/// use canvaskit::aggregate_errors;
/// use serde_json::json;
///
/// let errors = [json!({"meta": {"username": ["is taken"]}})];
/// assert_eq!(aggregate_errors(&errors).as_deref(), Some("Username is taken."));
/// ```
pub fn aggregate_errors(errors: &[JsonValue]) -> Option<String> {
    let mut lines = Vec::new();

    for error in errors {
        if let Some(detail) = error.get("detail").and_then(JsonValue::as_str) {
            lines.push(detail.to_string());
        }

        let Some(meta) = error.get("meta").and_then(JsonValue::as_object) else {
            continue;
        };
        for (field, messages) in meta {
            let Some(messages) = messages.as_array() else {
                continue;
            };
            let field = capitalize(field);
            lines.extend(
                messages
                    .iter()
                    .filter_map(JsonValue::as_str)
                    .map(|message| format!("{field} {message}.")),
            );
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

/// Upper-case the first letter of each word and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!([{"meta": {"username": ["is taken"]}}]), Some("Username is taken."))]
    #[case(json!([{"detail": "Not found"}]), Some("Not found"))]
    #[case(
        json!([{"meta": {"email": ["is invalid", "is taken"]}}]),
        Some("Email is invalid. Email is taken.")
    )]
    #[case(
        json!([{"detail": "Bad request", "meta": {"password": ["is too short"]}}, {"detail": "Try again"}]),
        Some("Bad request Password is too short. Try again")
    )]
    #[case(json!([{"meta": {"first name": ["is blank"]}}]), Some("First Name is blank."))]
    #[case(json!([{"meta": {"eMAIL": ["is blank"]}}]), Some("Email is blank."))]
    #[case(json!([{"status": "422"}]), None)]
    #[case(json!([]), None)]
    #[case(json!([{"meta": {"username": "is taken"}}]), None)]
    fn test_aggregate_errors(#[case] errors: JsonValue, #[case] expected: Option<&str>) {
        let errors = errors.as_array().cloned().unwrap_or_default();
        assert_eq!(aggregate_errors(&errors).as_deref(), expected);
    }

    #[test]
    fn test_meta_fields_keep_document_order() {
        let errors = [json!({"meta": {"username": ["is taken"], "email": ["is invalid"]}})];
        assert_eq!(
            aggregate_errors(&errors).as_deref(),
            Some("Username is taken. Email is invalid.")
        );
    }

    #[rstest]
    #[case("username", "Username")]
    #[case("user_name", "User_Name")]
    #[case("ALL CAPS", "All Caps")]
    #[case("", "")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
