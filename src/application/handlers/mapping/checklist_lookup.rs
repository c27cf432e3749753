//! Checklist and document resolution shared by the mapping handlers.

use crate::application::AnalysisError;
use crate::domain::checklist::Checklist;
use crate::domain::foundation::{ChecklistId, DocumentId};
use crate::domain::mapping::SourceDocument;
use crate::ports::{ChecklistCatalog, DocumentStore, StoredDocument};

/// Fetches a checklist, rejecting unknown ids and empty catalogs.
pub(crate) async fn load_checklist(
    catalog: &dyn ChecklistCatalog,
    id: &ChecklistId,
) -> Result<Checklist, AnalysisError> {
    let checklist = catalog
        .get(id)
        .await?
        .ok_or_else(|| AnalysisError::ChecklistNotFound(id.clone()))?;

    if checklist.is_empty() {
        return Err(AnalysisError::EmptyChecklist(id.clone()));
    }

    let duplicates = checklist.duplicate_control_ids();
    if !duplicates.is_empty() {
        tracing::warn!(
            checklist_id = %id,
            duplicate_control_ids = ?duplicates,
            "checklist contains duplicate control ids"
        );
    }
    Ok(checklist)
}

/// Fetches a stored document or reports it missing.
pub(crate) async fn load_document(
    store: &dyn DocumentStore,
    id: &DocumentId,
) -> Result<StoredDocument, AnalysisError> {
    store
        .get(id)
        .await?
        .ok_or(AnalysisError::DocumentNotFound(*id))
}

/// Provenance for results, with the type only when the summary is genuine.
pub(crate) fn source_of(entry: &StoredDocument) -> SourceDocument {
    let document_type = if entry.summary.is_degraded() {
        None
    } else {
        Some(entry.summary.value().document_type.clone())
    };
    SourceDocument::from_document(&entry.document, document_type)
}
