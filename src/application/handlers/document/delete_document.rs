//! DeleteDocumentHandler - Command handler for removing a document.

use std::sync::Arc;

use crate::application::AnalysisError;
use crate::domain::foundation::DocumentId;
use crate::ports::DocumentStore;

/// Command to delete a document and its summary.
#[derive(Debug, Clone)]
pub struct DeleteDocumentCommand {
    pub document_id: DocumentId,
}

pub struct DeleteDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl DeleteDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self), fields(document_id = %cmd.document_id))]
    pub async fn handle(&self, cmd: DeleteDocumentCommand) -> Result<DocumentId, AnalysisError> {
        if !self.store.delete(&cmd.document_id).await? {
            return Err(AnalysisError::DocumentNotFound(cmd.document_id));
        }
        tracing::info!("document deleted");
        Ok(cmd.document_id)
    }
}
