//! Checklist Catalog Port - Read-only access to control catalogs.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checklist::{Checklist, Gap};
use crate::domain::foundation::ChecklistId;

/// Port for looking up checklists by identifier.
#[async_trait]
pub trait ChecklistCatalog: Send + Sync {
    /// Fetch a checklist. `Ok(None)` means the catalog has no such id.
    async fn get(&self, id: &ChecklistId) -> Result<Option<Checklist>, CatalogError>;

    /// Requirements still lacking evidence for a checklist.
    async fn outstanding_gaps(&self, id: &ChecklistId) -> Result<Vec<Gap>, CatalogError>;
}

/// Errors raised while reading a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The catalog backend could not be reached or answered with an error.
    #[error("Checklist catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog answered with a body that could not be decoded.
    #[error("Invalid checklist payload: {0}")]
    InvalidPayload(String),
}
