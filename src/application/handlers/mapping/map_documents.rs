//! MapDocumentsHandler - Maps several documents and keeps the best match per control.

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::application::{AnalysisError, AnalysisOptions, MatchEvaluator};
use crate::domain::foundation::{ChecklistId, DocumentId, Timestamp};
use crate::domain::mapping::{Aggregation, MappingResult, MappingSummary, SourceDocument};
use crate::domain::report::render_aggregated_report;
use crate::ports::{ChecklistCatalog, DocumentStore, StoredDocument};

use super::checklist_lookup::{load_checklist, load_document, source_of};

/// Command to map several documents against one checklist.
#[derive(Debug, Clone)]
pub struct MapDocumentsCommand {
    /// Evaluated in the given order; repeated ids are evaluated once.
    pub document_ids: Vec<DocumentId>,
    pub checklist_id: Option<ChecklistId>,
}

/// Best match per control across all documents, plus the rendered report.
#[derive(Debug, Clone)]
pub struct MultiDocumentMapping {
    pub checklist_id: ChecklistId,
    pub checklist_name: String,
    pub sources: Vec<SourceDocument>,
    pub aggregation: Aggregation,
    pub summary: MappingSummary,
    /// Number of (document, control) verdicts requested.
    pub evaluated_pairs: usize,
    pub analyzed_at: Timestamp,
    pub report: String,
}

pub struct MapDocumentsHandler {
    store: Arc<dyn DocumentStore>,
    catalog: Arc<dyn ChecklistCatalog>,
    evaluator: MatchEvaluator,
    options: AnalysisOptions,
}

impl MapDocumentsHandler {
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

    #[tracing::instrument(skip(self, cmd), fields(documents = cmd.document_ids.len()))]
    pub async fn handle(
        &self,
        cmd: MapDocumentsCommand,
    ) -> Result<MultiDocumentMapping, AnalysisError> {
        let mut document_ids: Vec<DocumentId> = Vec::with_capacity(cmd.document_ids.len());
        for id in cmd.document_ids {
            if !document_ids.contains(&id) {
                document_ids.push(id);
            }
        }
        if document_ids.is_empty() {
            return Err(AnalysisError::NoDocumentsSelected);
        }

        let mut entries: Vec<(StoredDocument, SourceDocument)> = Vec::new();
        for id in &document_ids {
            let entry = load_document(self.store.as_ref(), id).await?;
            let source = source_of(&entry);
            entries.push((entry, source));
        }

        let checklist_id = cmd
            .checklist_id
            .unwrap_or_else(|| self.options.default_checklist_id.clone());
        let checklist = load_checklist(self.catalog.as_ref(), &checklist_id).await?;

        // Document-major order: every control of the first document, then the next.
        let mut pending = Vec::with_capacity(entries.len() * checklist.items.len());
        for (entry, source) in &entries {
            for control in &checklist.items {
                pending.push(
                    self.evaluator
                        .evaluate_control(&entry.document, source, control),
                );
            }
        }
        let results: Vec<MappingResult> = stream::iter(pending)
            .buffered(self.options.max_concurrent_evaluations.max(1))
            .collect()
            .await;

        let aggregation = Aggregation::build(&checklist, &results);
        let summary = MappingSummary::from_results(aggregation.rows());
        let sources: Vec<SourceDocument> = entries.into_iter().map(|(_, source)| source).collect();
        let analyzed_at = Timestamp::now();
        let report = render_aggregated_report(&checklist.name, &sources, &aggregation, analyzed_at);

        tracing::info!(
            checklist_id = %checklist_id,
            pairs = results.len(),
            controls = summary.total_controls,
            matched = summary.matched_controls,
            degraded = summary.degraded_verdicts,
            "documents mapped"
        );

        Ok(MultiDocumentMapping {
            checklist_id,
            checklist_name: checklist.name,
            sources,
            aggregation,
            summary,
            evaluated_pairs: results.len(),
            analyzed_at,
            report,
        })
    }
}
