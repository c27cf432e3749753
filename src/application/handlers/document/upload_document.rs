//! UploadDocumentHandler - Command handler for storing a new document.

use std::sync::Arc;

use crate::application::AnalysisError;
use crate::domain::document::{Document, DocumentSummary};
use crate::domain::foundation::{DocumentId, ValidationError};
use crate::domain::mapping::document_summary_prompt;
use crate::domain::verdict::Assessment;
use crate::ports::{DocumentStore, StoredDocument, VerdictClient};

/// Command to upload a document.
#[derive(Debug, Clone)]
pub struct UploadDocumentCommand {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadDocumentResult {
    pub document_id: DocumentId,
    pub filename: String,
    pub analysis: Assessment<DocumentSummary>,
}

/// Decodes, summarizes and stores an uploaded document.
pub struct UploadDocumentHandler {
    store: Arc<dyn DocumentStore>,
    verdicts: Arc<dyn VerdictClient>,
    summary_excerpt_chars: usize,
}

impl UploadDocumentHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        verdicts: Arc<dyn VerdictClient>,
        summary_excerpt_chars: usize,
    ) -> Self {
        Self {
            store,
            verdicts,
            summary_excerpt_chars,
        }
    }

    #[tracing::instrument(skip(self, cmd), fields(filename = %cmd.filename, bytes = cmd.bytes.len()))]
    pub async fn handle(
        &self,
        cmd: UploadDocumentCommand,
    ) -> Result<UploadDocumentResult, AnalysisError> {
        let document = Document::from_upload(cmd.filename, &cmd.bytes).map_err(|e| match e {
            ValidationError::InvalidFormat { reason, .. } => AnalysisError::InvalidEncoding(reason),
            other => other.into(),
        })?;

        let prompt = document_summary_prompt(document.content(), self.summary_excerpt_chars);
        let analysis = self.verdicts.summarize_document(&prompt).await;

        let result = UploadDocumentResult {
            document_id: document.id(),
            filename: document.filename().to_string(),
            analysis: analysis.clone(),
        };
        self.store.put(StoredDocument::new(document, analysis)).await?;

        tracing::info!(
            document_id = %result.document_id,
            degraded = result.analysis.is_degraded(),
            "document stored"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{LlmVerdictClient, MockAIProvider, MockError, VerdictClientConfig};
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::foundation::ErrorCode;

    fn handler(provider: MockAIProvider, store: InMemoryDocumentStore) -> UploadDocumentHandler {
        let verdicts = LlmVerdictClient::new(Arc::new(provider), VerdictClientConfig::default());
        UploadDocumentHandler::new(Arc::new(store), Arc::new(verdicts), 2000)
    }

    fn command(filename: &str, bytes: &[u8]) -> UploadDocumentCommand {
        UploadDocumentCommand {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[tokio::test]
    async fn stores_document_with_summary() {
        let store = InMemoryDocumentStore::new();
        let provider = MockAIProvider::new()
            .with_response(r#"{"document_type": "backup policy", "completeness_score": 0.6}"#);

        let result = handler(provider, store.clone())
            .handle(command("backup.txt", b"Daily backups are kept for 30 days."))
            .await
            .unwrap();

        assert_eq!(result.filename, "backup.txt");
        assert_eq!(result.analysis.value().document_type, "backup policy");
        let stored = store.get(&result.document_id).await.unwrap().unwrap();
        assert_eq!(stored.document.content(), "Daily backups are kept for 30 days.");
        assert_eq!(stored.summary, result.analysis);
    }

    #[tokio::test]
    async fn ai_failure_still_stores_with_degraded_summary() {
        let store = InMemoryDocumentStore::new();
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 60 });

        let result = handler(provider, store.clone())
            .handle(command("a.txt", b"text"))
            .await
            .unwrap();

        assert!(result.analysis.is_degraded());
        assert_eq!(result.analysis.value().document_type, "unknown");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn rejects_non_utf8() {
        let store = InMemoryDocumentStore::new();
        let provider = MockAIProvider::new();

        let err = handler(provider.clone(), store.clone())
            .handle(command("bin.dat", &[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidEncoding);
        assert_eq!(provider.call_count(), 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_blank_filename() {
        let err = handler(MockAIProvider::new(), InMemoryDocumentStore::new())
            .handle(command("  ", b"text"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
