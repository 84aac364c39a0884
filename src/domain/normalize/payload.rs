//! Extraction of the JSON value embedded in raw provider text.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("provider returned empty content")]
    Empty,

    #[error("provider content contains no JSON value")]
    NoJson,

    #[error("provider content is not valid JSON: {0}")]
    Invalid(String),
}

/// Returns the body of the first markdown code fence, or the whole text.
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after = &text[open + 3..];
    // Skip an info string such as `json` on the opening fence line.
    let body = match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => after,
    };
    match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    }
}

/// Extracts the first parseable JSON object or array from `text`.
///
/// Tolerates markdown code fences and prose around the value.
pub fn extract_json(text: &str) -> Result<Value, PayloadError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PayloadError::Empty);
    }

    let body = strip_code_fence(trimmed);
    let mut last_error = None;

    for (start, _) in body.char_indices().filter(|(_, c)| *c == '{' || *c == '[') {
        let mut stream = serde_json::Deserializer::from_str(&body[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => return Ok(value),
            Some(Err(e)) => last_error = Some(e.to_string()),
            None => {}
        }
    }

    Err(match last_error {
        Some(message) => PayloadError::Invalid(message),
        None => PayloadError::NoJson,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json() {
        assert_eq!(extract_json(r#"{"morale": 0.2}"#).unwrap(), json!({"morale": 0.2}));
    }

    #[test]
    fn fenced_json_with_language_tag() {
        let text = "Here is the analysis:\n```json\n[{\"title\": \"Hold\"}]\n```\nLet me know.";
        assert_eq!(extract_json(text).unwrap(), json!([{"title": "Hold"}]));
    }

    #[test]
    fn prose_before_and_after() {
        let text = "Sure! {\"approval\": -0.1} Hope this helps.";
        assert_eq!(extract_json(text).unwrap(), json!({"approval": -0.1}));
    }

    #[test]
    fn skips_unparseable_braces() {
        let text = "Note {this} then {\"a\": 1}";
        assert_eq!(extract_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn failures() {
        assert_eq!(extract_json("   "), Err(PayloadError::Empty));
        assert_eq!(extract_json("no structure here"), Err(PayloadError::NoJson));
        assert!(matches!(extract_json("{\"a\": "), Err(PayloadError::Invalid(_))));
    }
}
