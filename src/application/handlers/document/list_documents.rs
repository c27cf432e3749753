//! ListDocumentsHandler - Query handler for stored documents.

use std::sync::Arc;

use crate::application::AnalysisError;
use crate::domain::document::DocumentSummary;
use crate::domain::foundation::{DocumentId, Timestamp};
use crate::domain::verdict::Assessment;
use crate::ports::DocumentStore;

/// One row of the document listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentListing {
    pub id: DocumentId,
    pub filename: String,
    pub uploaded_at: Timestamp,
    /// False when the summary is the fallback rather than a model answer.
    pub has_analysis: bool,
    pub analysis: Assessment<DocumentSummary>,
}

/// Handler for listing stored documents, oldest first.
pub struct ListDocumentsHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListDocumentsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<DocumentListing>, AnalysisError> {
        let entries = self.store.list().await?;
        Ok(entries
            .into_iter()
            .map(|entry| DocumentListing {
                id: entry.document.id(),
                filename: entry.document.filename().to_string(),
                uploaded_at: entry.document.uploaded_at(),
                has_analysis: !entry.summary.is_degraded(),
                analysis: entry.summary,
            })
            .collect())
    }
}
