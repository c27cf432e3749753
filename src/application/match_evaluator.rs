//! Match evaluation of one document against one requirement.

use std::sync::Arc;

use crate::domain::checklist::Control;
use crate::domain::document::Document;
use crate::domain::mapping::{requirement_match_prompt, MappingResult, SourceDocument};
use crate::domain::verdict::{Assessment, MatchVerdict};
use crate::ports::VerdictClient;

/// Builds the match prompt and delegates to the verdict client.
///
/// No caching and no retry; the verdict comes back unchanged.
#[derive(Clone)]
pub struct MatchEvaluator {
    verdicts: Arc<dyn VerdictClient>,
    excerpt_chars: usize,
}

impl MatchEvaluator {
    pub fn new(verdicts: Arc<dyn VerdictClient>, excerpt_chars: usize) -> Self {
        Self {
            verdicts,
            excerpt_chars,
        }
    }

    /// Judges `document_text` against a free-text requirement.
    pub async fn evaluate(
        &self,
        document_text: &str,
        requirement: &str,
        hints: &[String],
    ) -> Assessment<MatchVerdict> {
        let prompt =
            requirement_match_prompt(document_text, requirement, hints, self.excerpt_chars);
        self.verdicts.assess_match(&prompt).await
    }

    /// Judges a document against a catalog control, tagging provenance.
    pub async fn evaluate_control(
        &self,
        document: &Document,
        source: &SourceDocument,
        control: &Control,
    ) -> MappingResult {
        let assessment = self
            .evaluate(document.content(), &control.requirement, &control.hints)
            .await;
        MappingResult::from_assessment(control, source, assessment)
    }
}
