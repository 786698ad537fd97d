//! Response parser: turns a free-text model reply into a validated value.
//!
//! Pipeline: trim → isolate a ```json fenced block if one exists → decode with
//! serde_json → run the target type's `Validate` checks. Nothing is repaired.

use serde::de::DeserializeOwned;
use thiserror::Error;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Structural checks that serde alone cannot express (fixed lengths, ranges,
/// cross-field consistency).
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reply is not valid JSON for the expected shape: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("reply violates the response schema: {reason}")]
    Schema { reason: String, raw: String },
}

impl ParseError {
    /// The untouched model reply, kept for diagnostics.
    pub fn raw(&self) -> &str {
        match self {
            ParseError::Decode { raw, .. } | ParseError::Schema { raw, .. } => raw,
        }
    }
}

/// Decodes `raw` into `T` and validates it.
pub fn parse_reply<T>(raw: &str) -> Result<T, ParseError>
where
    T: DeserializeOwned + Validate,
{
    let payload = extract_json_payload(raw);

    let value: T = serde_json::from_str(payload).map_err(|source| ParseError::Decode {
        source,
        raw: raw.to_string(),
    })?;

    value.validate().map_err(|reason| ParseError::Schema {
        reason,
        raw: raw.to_string(),
    })?;

    Ok(value)
}

/// Returns the body of the first ```json fence, or the trimmed reply when
/// there is none. An unclosed fence runs to the end of the reply.
pub fn extract_json_payload(raw: &str) -> &str {
    let text = raw.trim();
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lowered = text.to_ascii_lowercase();

    let Some(open) = lowered.find(JSON_FENCE_OPEN) else {
        return text;
    };

    let body = &text[open + JSON_FENCE_OPEN.len()..];
    match body.find(FENCE_CLOSE) {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        key: String,
        count: u8,
    }

    impl Validate for Probe {
        fn validate(&self) -> Result<(), String> {
            if self.count > 3 {
                return Err(format!("count must be at most 3, got {}", self.count));
            }
            Ok(())
        }
    }

    #[test]
    fn test_extract_plain_json() {
        assert_eq!(extract_json_payload("  {\"key\": 1}\n"), "{\"key\": 1}");
    }

    #[test]
    fn test_extract_fenced_json_inside_prose() {
        let raw = "Sure! Here you go:\n```json\n{\"key\": 1}\n```\nGood luck.";
        assert_eq!(extract_json_payload(raw), "{\"key\": 1}");
    }

    #[test]
    fn test_extract_uppercase_fence_tag() {
        let raw = "```JSON\n[1, 2]\n```";
        assert_eq!(extract_json_payload(raw), "[1, 2]");
    }

    #[test]
    fn test_extract_unclosed_fence_runs_to_end() {
        let raw = "```json\n{\"key\": 1}";
        assert_eq!(extract_json_payload(raw), "{\"key\": 1}");
    }

    #[test]
    fn test_untagged_fence_is_left_alone() {
        let raw = "```\n{\"key\": 1}\n```";
        assert_eq!(extract_json_payload(raw), raw);
    }

    #[test]
    fn test_parse_reply_accepts_valid_value() {
        let probe: Probe = parse_reply("```json\n{\"key\": \"a\", \"count\": 2}\n```").unwrap();
        assert_eq!(
            probe,
            Probe {
                key: "a".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn test_parse_reply_reports_decode_error_with_raw_text() {
        let raw = "I could not produce JSON today.";
        let err = parse_reply::<Probe>(raw).unwrap_err();
        assert!(matches!(err, ParseError::Decode { .. }));
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn test_parse_reply_reports_schema_violation() {
        let raw = "{\"key\": \"a\", \"count\": 9}";
        let err = parse_reply::<Probe>(raw).unwrap_err();
        assert!(matches!(err, ParseError::Schema { .. }));
        assert!(err.to_string().contains("at most 3"));
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn test_parse_reply_does_not_coerce_types() {
        let err = parse_reply::<Probe>("{\"key\": \"a\", \"count\": \"2\"}").unwrap_err();
        assert!(matches!(err, ParseError::Decode { .. }));
    }
}
