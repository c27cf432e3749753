//! Verdict Client Port - Turns a composed prompt into a structured verdict.
//!
//! Unlike [`AIProvider`](super::AIProvider), this port never fails: any
//! collaborator failure comes back as [`Assessment::Degraded`] carrying a
//! substitute value and the reason, so evaluation loops always terminate.

use async_trait::async_trait;

use crate::domain::document::DocumentSummary;
use crate::domain::verdict::{Assessment, MatchVerdict};

/// Port for obtaining structured verdicts from a language model.
#[async_trait]
pub trait VerdictClient: Send + Sync {
    /// Judge whether a document satisfies a requirement.
    ///
    /// `prompt` is fully composed and already embeds the document excerpt.
    async fn assess_match(&self, prompt: &str) -> Assessment<MatchVerdict>;

    /// Produce the initial summary of an uploaded document.
    async fn summarize_document(&self, prompt: &str) -> Assessment<DocumentSummary>;
}
