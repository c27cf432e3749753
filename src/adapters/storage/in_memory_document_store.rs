//! In-Memory Document Store Adapter
//!
//! Holds uploaded documents and their summaries for the life of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DocumentId;
use crate::ports::{DocumentStore, StoreError, StoredDocument};

/// In-memory document registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    entries: Arc<RwLock<HashMap<DocumentId, StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn put(&self, entry: StoredDocument) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.id(), entry);
        Ok(())
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<StoredDocument>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(id).cloned())
    }

    async fn delete(&self, id: &DocumentId) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let entries = self.entries.read().await;
        let mut all: Vec<StoredDocument> = entries.values().cloned().collect();
        all.sort_by_key(|e| (e.document.uploaded_at(), e.id()));
        Ok(all)
    }
}
