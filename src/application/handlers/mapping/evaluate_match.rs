//! EvaluateMatchHandler - Judges one stored document against a requirement.

use std::sync::Arc;

use crate::application::{AnalysisError, MatchEvaluator};
use crate::domain::foundation::DocumentId;
use crate::domain::verdict::{Assessment, MatchVerdict};
use crate::ports::DocumentStore;

use super::checklist_lookup::load_document;

/// Command to evaluate a free-text requirement.
#[derive(Debug, Clone)]
pub struct EvaluateMatchCommand {
    pub document_id: DocumentId,
    pub requirement: String,
    pub hints: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EvaluateMatchResult {
    pub document_id: DocumentId,
    pub requirement: String,
    pub verdict: Assessment<MatchVerdict>,
}

pub struct EvaluateMatchHandler {
    store: Arc<dyn DocumentStore>,
    evaluator: MatchEvaluator,
}

impl EvaluateMatchHandler {
    pub fn new(store: Arc<dyn DocumentStore>, evaluator: MatchEvaluator) -> Self {
        Self { store, evaluator }
    }

    #[tracing::instrument(skip(self, cmd), fields(document_id = %cmd.document_id))]
    pub async fn handle(
        &self,
        cmd: EvaluateMatchCommand,
    ) -> Result<EvaluateMatchResult, AnalysisError> {
        if cmd.requirement.trim().is_empty() {
            return Err(AnalysisError::validation("requirement", "cannot be empty"));
        }

        let entry = load_document(self.store.as_ref(), &cmd.document_id).await?;
        let verdict = self
            .evaluator
            .evaluate(entry.document.content(), &cmd.requirement, &cmd.hints)
            .await;

        Ok(EvaluateMatchResult {
            document_id: cmd.document_id,
            requirement: cmd.requirement,
            verdict,
        })
    }
}
