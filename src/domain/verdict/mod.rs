//! Verdicts returned by the AI model and the plumbing to read them.
//!
//! # Module Organization
//!
//! - `assessment` - Tags a value as genuinely assessed or as a degraded fallback
//! - `match_verdict` - Structured judgment of one document against one requirement
//! - `extractor` - Pulls the first JSON object out of a free-text model reply

mod assessment;
mod extractor;
mod match_verdict;

pub use assessment::Assessment;
pub use extractor::{parse_reply, ExtractionError, MAX_REPLY_LENGTH};
pub use match_verdict::{MatchVerdict, MissingElements, FALLBACK_REASONING, MAX_RELEVANT_SECTIONS};
