//! Reply extraction - reading a JSON object out of free-text model output.
//!
//! Models are told to answer with JSON only, but routinely wrap the object in
//! a markdown fence or surround it with prose. Extraction order:
//!
//! 1. Reject oversized replies
//! 2. Strip control characters (newlines and tabs survive)
//! 3. Prefer the body of the first code fence, if it holds an object
//! 4. Otherwise take the first balanced `{ ... }` in the text

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Maximum accepted reply length (100KB).
pub const MAX_REPLY_LENGTH: usize = 100_000;

/// Errors that can occur while reading a reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Reply too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },

    #[error("No JSON object found in reply")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    ParseError(String),
}

/// Extracts the first JSON object from `reply` and deserializes it.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, ExtractionError> {
    if reply.len() > MAX_REPLY_LENGTH {
        return Err(ExtractionError::TooLong {
            max: MAX_REPLY_LENGTH,
            actual: reply.len(),
        });
    }

    let cleaned = remove_control_chars(reply);
    let json = extract_json_object(&cleaned).ok_or(ExtractionError::NoJsonObject)?;

    serde_json::from_str(json).map_err(|e| ExtractionError::ParseError(e.to_string()))
}

fn remove_control_chars(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == '\r')
        .collect()
}

fn extract_json_object(s: &str) -> Option<&str> {
    if let Some(body) = extract_from_code_block(s) {
        if let Some(json) = extract_balanced_object(body) {
            return Some(json);
        }
    }
    extract_balanced_object(s)
}

/// Body of the first ```` ``` ```` fence, with an optional language tag skipped.
fn extract_from_code_block(s: &str) -> Option<&str> {
    let open = s.find("```")?;
    let after_ticks = &s[open + 3..];
    let body_start = after_ticks.find('\n').map(|i| i + 1).unwrap_or(0);
    let tag = after_ticks[..body_start].trim();
    if !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        // Fence opened and closed on one line, e.g. ```{"a":1}```
        let close = after_ticks.find("```")?;
        return Some(after_ticks[..close].trim());
    }
    let body = &after_ticks[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

/// First `{` through its matching `}`, ignoring braces inside strings.
fn extract_balanced_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        matches: bool,
        confidence: f64,
    }

    #[test]
    fn parses_bare_json() {
        let probe: Probe = parse_reply(r#"{"matches": true, "confidence": 0.9}"#).unwrap();
        assert_eq!(probe, Probe { matches: true, confidence: 0.9 });
    }

    #[test]
    fn parses_fenced_json() {
        let reply = "Here is my assessment:\n```json\n{\"matches\": false, \"confidence\": 0.2}\n```\nThanks.";
        let probe: Probe = parse_reply(reply).unwrap();
        assert_eq!(probe, Probe { matches: false, confidence: 0.2 });
    }

    #[test]
    fn parses_untagged_fence() {
        let reply = "```\n{\"matches\": true, \"confidence\": 0.5}\n```";
        let probe: Probe = parse_reply(reply).unwrap();
        assert!(probe.matches);
    }

    #[test]
    fn parses_single_line_fence() {
        let probe: Probe = parse_reply("```{\"matches\": true, \"confidence\": 0.4}```").unwrap();
        assert_eq!(probe.confidence, 0.4);
    }

    #[test]
    fn parses_json_surrounded_by_prose() {
        let reply = "Sure! {\"matches\": true, \"confidence\": 0.7} Let me know.";
        let probe: Probe = parse_reply(reply).unwrap();
        assert_eq!(probe.confidence, 0.7);
    }

    #[test]
    fn ignores_braces_inside_strings() {
        #[derive(Deserialize)]
        struct Reasoned {
            reasoning: String,
        }
        let reply = r#"{"reasoning": "uses {curly} \"quoted\" text"} trailing }"#;
        let parsed: Reasoned = parse_reply(reply).unwrap();
        assert_eq!(parsed.reasoning, "uses {curly} \"quoted\" text");
    }

    #[test]
    fn handles_multibyte_text_before_object() {
        let reply = "Értékelés: {\"matches\": true, \"confidence\": 0.66}";
        let probe: Probe = parse_reply(reply).unwrap();
        assert_eq!(probe.confidence, 0.66);
    }

    #[test]
    fn reports_missing_object() {
        let err = parse_reply::<Probe>("I cannot help with that.").unwrap_err();
        assert_eq!(err, ExtractionError::NoJsonObject);
    }

    #[test]
    fn reports_unbalanced_object() {
        let err = parse_reply::<Probe>("{\"matches\": true").unwrap_err();
        assert_eq!(err, ExtractionError::NoJsonObject);
    }

    #[test]
    fn reports_schema_mismatch_as_parse_error() {
        let err = parse_reply::<Probe>("{\"verdict\": \"yes\"}").unwrap_err();
        assert!(matches!(err, ExtractionError::ParseError(_)));
    }

    #[test]
    fn rejects_oversized_reply() {
        let reply = "x".repeat(MAX_REPLY_LENGTH + 1);
        assert!(matches!(
            parse_reply::<Probe>(&reply),
            Err(ExtractionError::TooLong { .. })
        ));
    }
}
