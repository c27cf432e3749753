//! Mapping of documents onto checklist controls.
//!
//! # Module Organization
//!
//! - `result` - Per-pair mapping results and their source documents
//! - `aggregator` - Per-control best-match reduction across documents
//! - `summary` - Counts and compliance rate over a result set
//! - `prompts` - Prompt templates sent to the model

mod aggregator;
mod prompts;
mod result;
mod summary;

pub use aggregator::{
    best_matches, unevaluated_controls, AggregatedResult, Aggregation, NO_MATCH_MISSING_ELEMENTS,
    NO_MATCH_REASONING,
};
pub use prompts::{document_summary_prompt, excerpt, requirement_match_prompt, SYSTEM_PROMPT};
pub use result::{MappingResult, SourceDocument};
pub use summary::{compliance_rate, MappingSummary};
