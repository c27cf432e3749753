//! MatchVerdict - the model's judgment of one document against one requirement.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Confidence;

/// Upper bound on quoted evidence excerpts kept per verdict.
pub const MAX_RELEVANT_SECTIONS: usize = 2;

/// Reasoning carried by the fallback verdict.
pub const FALLBACK_REASONING: &str = "AI service unavailable - using fallback verdict";

const FALLBACK_MISSING_ELEMENT: &str = "Additional evidence needed";

/// Structured verdict for a (document, requirement) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMatchVerdict")]
pub struct MatchVerdict {
    pub matches: bool,
    pub confidence: Confidence,
    pub relevant_sections: Vec<String>,
    pub reasoning: String,
    pub missing_elements: MissingElements,
}

impl MatchVerdict {
    /// The verdict substituted when the model cannot be consulted.
    pub fn fallback(confidence: Confidence) -> Self {
        Self {
            matches: true,
            confidence,
            relevant_sections: Vec::new(),
            reasoning: FALLBACK_REASONING.to_string(),
            missing_elements: MissingElements::List(vec![FALLBACK_MISSING_ELEMENT.to_string()]),
        }
    }
}

/// Wire shape of the reply; normalized into [`MatchVerdict`].
#[derive(Deserialize)]
struct RawMatchVerdict {
    matches: bool,
    confidence: f64,
    #[serde(default)]
    relevant_sections: Vec<String>,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    missing_elements: MissingElements,
}

impl From<RawMatchVerdict> for MatchVerdict {
    fn from(raw: RawMatchVerdict) -> Self {
        let mut relevant_sections = raw.relevant_sections;
        relevant_sections.truncate(MAX_RELEVANT_SECTIONS);
        Self {
            matches: raw.matches,
            confidence: Confidence::new(raw.confidence),
            relevant_sections,
            reasoning: raw.reasoning,
            missing_elements: raw.missing_elements,
        }
    }
}

/// What the model says is still needed; it answers with prose or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissingElements {
    Text(String),
    List(Vec<String>),
}

impl MissingElements {
    pub fn text(text: impl Into<String>) -> Self {
        MissingElements::Text(text.into())
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions(',').is_empty()
    }

    /// Splits into one suggestion per line.
    ///
    /// Lists are taken item by item; prose is split on `delimiter`.
    /// Blank fragments are dropped.
    pub fn suggestions(&self, delimiter: char) -> Vec<String> {
        let items: Vec<&str> = match self {
            MissingElements::Text(text) => text.split(delimiter).collect(),
            MissingElements::List(items) => items.iter().map(String::as_str).collect(),
        };
        items
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for MissingElements {
    fn default() -> Self {
        MissingElements::Text(String::new())
    }
}

impl fmt::Display for MissingElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingElements::Text(text) => write!(f, "{}", text),
            MissingElements::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reply_with_prose_missing_elements() {
        let json = r#"{
            "matches": true,
            "confidence": 0.82,
            "relevant_sections": ["Passwords expire every 90 days"],
            "reasoning": "Policy covers rotation",
            "missing_elements": "Enforcement evidence, audit logs"
        }"#;
        let verdict: MatchVerdict = serde_json::from_str(json).unwrap();
        assert!(verdict.matches);
        assert_eq!(verdict.confidence.value(), 0.82);
        assert_eq!(
            verdict.missing_elements.suggestions(','),
            vec!["Enforcement evidence", "audit logs"]
        );
    }

    #[test]
    fn parses_reply_with_list_missing_elements() {
        let json = r#"{"matches": false, "confidence": 0.1, "missing_elements": ["A", " B "]}"#;
        let verdict: MatchVerdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.missing_elements.suggestions('.'), vec!["A", "B"]);
        assert_eq!(verdict.missing_elements.to_string(), "A,  B ");
    }

    #[test]
    fn truncates_relevant_sections_to_two() {
        let json = r#"{"matches": true, "confidence": 0.9, "relevant_sections": ["a", "b", "c"]}"#;
        let verdict: MatchVerdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.relevant_sections, vec!["a", "b"]);
    }

    #[test]
    fn clamps_confidence() {
        let json = r#"{"matches": true, "confidence": 85}"#;
        let verdict: MatchVerdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.confidence, Confidence::FULL);
    }

    #[test]
    fn requires_matches_and_confidence() {
        assert!(serde_json::from_str::<MatchVerdict>(r#"{"confidence": 0.5}"#).is_err());
        assert!(serde_json::from_str::<MatchVerdict>(r#"{"matches": true}"#).is_err());
        assert!(serde_json::from_str::<MatchVerdict>(r#"{"matches": "yes", "confidence": 1}"#).is_err());
    }

    #[test]
    fn fallback_is_a_match_with_placeholder() {
        let verdict = MatchVerdict::fallback(Confidence::new(0.85));
        assert!(verdict.matches);
        assert_eq!(verdict.confidence.as_percent(), 85);
        assert_eq!(verdict.reasoning, FALLBACK_REASONING);
        assert!(!verdict.missing_elements.is_empty());
    }

    #[test]
    fn serialized_verdict_parses_back() {
        let verdict = MatchVerdict::fallback(Confidence::new(0.5));
        let json = serde_json::to_string(&verdict).unwrap();
        let back: MatchVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }

    #[test]
    fn blank_text_has_no_suggestions() {
        assert!(MissingElements::text(" , ").is_empty());
        assert!(MissingElements::default().is_empty());
    }
}
