//! Prompt templates for document summary and requirement matching.

/// System instruction sent with every request.
pub const SYSTEM_PROMPT: &str =
    "You are a compliance analysis expert. Always respond with valid JSON.";

/// First `max_chars` characters of `text`, never splitting a character.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Prompt asking for the upload-time summary of a document.
pub fn document_summary_prompt(document_text: &str, excerpt_chars: usize) -> String {
    format!(
        r#"Analyze this compliance document and identify key security controls and policies.

DOCUMENT CONTENT:
{}

Return JSON with:
{{
  "document_type": "type of document (password policy, incident plan, etc.)",
  "security_controls": ["list of security controls mentioned"],
  "compliance_areas": ["relevant compliance areas"],
  "completeness_score": 0.0-1.0,
  "key_points": ["main security points covered"]
}}"#,
        excerpt(document_text, excerpt_chars)
    )
}

/// Prompt asking whether a document evidences one requirement.
pub fn requirement_match_prompt(
    document_text: &str,
    requirement: &str,
    hints: &[String],
    excerpt_chars: usize,
) -> String {
    format!(
        r#"Analyze if this document provides evidence for the compliance requirement.

DOCUMENT CONTENT:
{}

REQUIREMENT:
{}

HINTS FOR MATCHING:
{}

Return JSON:
{{
  "matches": boolean,
  "confidence": 0.0-1.0,
  "relevant_sections": ["array of relevant quotes (max 2)"],
  "reasoning": "brief explanation",
  "missing_elements": "what's still needed"
}}"#,
        excerpt(document_text, excerpt_chars),
        requirement,
        hints.join(", ")
    )
}
