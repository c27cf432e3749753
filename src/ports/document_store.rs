//! Document Store Port - Keyed registry of uploaded documents.
//!
//! A document and its summary are stored as one entry, so deleting a
//! document removes its summary in the same step.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::document::{Document, DocumentSummary};
use crate::domain::foundation::DocumentId;
use crate::domain::verdict::Assessment;

/// An uploaded document together with its initial analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument {
    pub document: Document,
    pub summary: Assessment<DocumentSummary>,
}

impl StoredDocument {
    pub fn new(document: Document, summary: Assessment<DocumentSummary>) -> Self {
        Self { document, summary }
    }

    pub fn id(&self) -> DocumentId {
        self.document.id()
    }
}

/// Port for document persistence.
///
/// # Contract
///
/// - `put` replaces any entry with the same id (last writer wins)
/// - `delete` is immediately visible to subsequent `get` and `list`
/// - `list` is ordered by upload time, then id
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert or replace an entry.
    async fn put(&self, entry: StoredDocument) -> Result<(), StoreError>;

    /// Fetch an entry by id.
    async fn get(&self, id: &DocumentId) -> Result<Option<StoredDocument>, StoreError>;

    /// Remove an entry. Returns false when nothing was stored under `id`.
    async fn delete(&self, id: &DocumentId) -> Result<bool, StoreError>;

    /// All entries.
    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError>;
}

/// Errors raised by a document store backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}
