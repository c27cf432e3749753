//! MapDocumentHandler - Maps one document onto every control of a checklist.

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::application::{AnalysisError, AnalysisOptions, MatchEvaluator};
use crate::domain::foundation::{ChecklistId, DocumentId, Timestamp};
use crate::domain::mapping::{MappingResult, MappingSummary, SourceDocument};
use crate::domain::report::render_document_report;
use crate::ports::{ChecklistCatalog, DocumentStore};

use super::checklist_lookup::{load_checklist, load_document, source_of};

/// Command to map a single document.
#[derive(Debug, Clone)]
pub struct MapDocumentCommand {
    pub document_id: DocumentId,
    /// Falls back to the configured default checklist.
    pub checklist_id: Option<ChecklistId>,
}

/// One result per catalog control, plus the rendered report.
#[derive(Debug, Clone)]
pub struct DocumentMapping {
    pub checklist_id: ChecklistId,
    pub checklist_name: String,
    pub source: SourceDocument,
    pub results: Vec<MappingResult>,
    pub summary: MappingSummary,
    pub analyzed_at: Timestamp,
    pub report: String,
}

impl DocumentMapping {
    pub fn matched(&self) -> impl Iterator<Item = &MappingResult> {
        self.results.iter().filter(|r| r.matches)
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &MappingResult> {
        self.results.iter().filter(|r| !r.matches)
    }
}

pub struct MapDocumentHandler {
    store: Arc<dyn DocumentStore>,
    catalog: Arc<dyn ChecklistCatalog>,
    evaluator: MatchEvaluator,
    options: AnalysisOptions,
}

impl MapDocumentHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        catalog: Arc<dyn ChecklistCatalog>,
        evaluator: MatchEvaluator,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            store,
            catalog,
            evaluator,
            options,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(document_id = %cmd.document_id))]
    pub async fn handle(&self, cmd: MapDocumentCommand) -> Result<DocumentMapping, AnalysisError> {
        let entry = load_document(self.store.as_ref(), &cmd.document_id).await?;
        let checklist_id = cmd
            .checklist_id
            .unwrap_or_else(|| self.options.default_checklist_id.clone());
        let checklist = load_checklist(self.catalog.as_ref(), &checklist_id).await?;
        let source = source_of(&entry);

        // Every catalog entry is evaluated, duplicates included.
        let pending: Vec<_> = checklist
            .items
            .iter()
            .map(|control| {
                self.evaluator
                    .evaluate_control(&entry.document, &source, control)
            })
            .collect();
        let results: Vec<MappingResult> = stream::iter(pending)
            .buffered(self.options.max_concurrent_evaluations.max(1))
            .collect()
            .await;

        let summary = MappingSummary::from_results(&results);
        let analyzed_at = Timestamp::now();
        let report = render_document_report(&checklist.name, &source, &results, analyzed_at);

        tracing::info!(
            checklist_id = %checklist_id,
            total = summary.total_controls,
            matched = summary.matched_controls,
            degraded = summary.degraded_verdicts,
            "document mapped"
        );

        Ok(DocumentMapping {
            checklist_id,
            checklist_name: checklist.name,
            source,
            results,
            summary,
            analyzed_at,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{LlmVerdictClient, MockAIProvider, VerdictClientConfig};
    use crate::adapters::checklist::BuiltinChecklistCatalog;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::document::{Document, DocumentSummary};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::verdict::Assessment;
    use crate::ports::StoredDocument;

    async fn setup(provider: MockAIProvider) -> (MapDocumentHandler, DocumentId) {
        let store = InMemoryDocumentStore::new();
        let document = Document::new("password-policy.txt", "Passwords rotate.").unwrap();
        let id = document.id();
        store
            .put(StoredDocument::new(
                document,
                Assessment::assessed(DocumentSummary {
                    document_type: "password policy".to_string(),
                    ..DocumentSummary::unknown()
                }),
            ))
            .await
            .unwrap();
        let client = LlmVerdictClient::new(Arc::new(provider), VerdictClientConfig::default());
        let handler = MapDocumentHandler::new(
            Arc::new(store),
            Arc::new(BuiltinChecklistCatalog::new()),
            MatchEvaluator::new(Arc::new(client), 1500),
            AnalysisOptions::default(),
        );
        (handler, id)
    }

    #[tokio::test]
    async fn evaluates_every_control_once() {
        let provider = MockAIProvider::new()
            .when_prompt_contains(
                "Password policy documented",
                r#"{"matches": true, "confidence": 0.9}"#,
            )
            .when_prompt_contains("REQUIREMENT:", r#"{"matches": false, "confidence": 0.1}"#);
        let (handler, id) = setup(provider.clone()).await;

        let mapping = handler
            .handle(MapDocumentCommand {
                document_id: id,
                checklist_id: None,
            })
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 8);
        assert_eq!(mapping.results.len(), 8);
        assert_eq!(mapping.matched().count(), 1);
        assert_eq!(mapping.unmatched().count(), 7);
        assert_eq!(mapping.summary.compliance_rate, 12.5);
        assert_eq!(mapping.source.document_type.as_deref(), Some("password policy"));
        assert_eq!(mapping.checklist_name, "ISO 27001 Essential Controls");
        assert!(mapping.report.contains("Source document: password-policy.txt"));
    }

    #[tokio::test]
    async fn results_follow_catalog_order() {
        let (handler, id) = setup(MockAIProvider::new()).await;

        let mapping = handler
            .handle(MapDocumentCommand {
                document_id: id,
                checklist_id: None,
            })
            .await
            .unwrap();

        let ids: Vec<&str> = mapping.results.iter().map(|r| r.control_id.as_str()).collect();
        assert_eq!(ids, vec!["AC-1", "AC-2", "AC-3", "IM-1", "IM-2", "DP-1", "DP-2", "DP-3"]);
        // Unparsable default replies degrade every verdict.
        assert_eq!(mapping.summary.degraded_verdicts, 8);
    }

    #[tokio::test]
    async fn unknown_checklist_is_not_found() {
        let (handler, id) = setup(MockAIProvider::new()).await;

        let err = handler
            .handle(MapDocumentCommand {
                document_id: id,
                checklist_id: Some(ChecklistId::new("soc2").unwrap()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ChecklistNotFound);
    }

    #[tokio::test]
    async fn unknown_document_is_not_found() {
        let (handler, _) = setup(MockAIProvider::new()).await;

        let err = handler
            .handle(MapDocumentCommand {
                document_id: DocumentId::new(),
                checklist_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::DocumentNotFound);
    }
}
