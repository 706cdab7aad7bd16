//! Best-effort response pretty-printing.

/// Re-serialize `text` with 2-space indentation when it parses as JSON;
/// return it unchanged otherwise.
///
/// Never fails: a non-JSON response is a legitimate, displayable outcome,
/// not an error.
#[must_use]
pub fn prettify(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_json() {
        assert_eq!(prettify(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_prettify_non_json_returned_unchanged() {
        assert_eq!(prettify("plain text"), "plain text");
        assert_eq!(prettify(""), "");
        assert_eq!(prettify("{broken"), "{broken");
    }

    #[test]
    fn test_prettify_nested() {
        assert_eq!(
            prettify(r#"{"ids":[1,2]}"#),
            "{\n  \"ids\": [\n    1,\n    2\n  ]\n}"
        );
    }
}
