//! HTTP checklist catalog - reads checklists from the checklist service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::builtin::outstanding_gaps;
use crate::domain::checklist::{Checklist, Gap};
use crate::domain::foundation::ChecklistId;
use crate::ports::{CatalogError, ChecklistCatalog};

/// Catalog that fetches `GET {base_url}/checklists/{id}`.
pub struct HttpChecklistCatalog {
    base_url: String,
    client: Client,
}

impl HttpChecklistCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn checklist_url(&self, id: &ChecklistId) -> String {
        format!("{}/checklists/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[async_trait]
impl ChecklistCatalog for HttpChecklistCatalog {
    async fn get(&self, id: &ChecklistId) -> Result<Option<Checklist>, CatalogError> {
        let url = self.checklist_url(id);
        tracing::debug!(url = %url, "fetching checklist");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response
                .json::<Checklist>()
                .await
                .map(Some)
                .map_err(|e| CatalogError::InvalidPayload(e.to_string())),
            status => Err(CatalogError::Unavailable(format!(
                "checklist service answered {}",
                status
            ))),
        }
    }

    // The checklist service has no gap endpoint; the fixed list is served.
    async fn outstanding_gaps(&self, _id: &ChecklistId) -> Result<Vec<Gap>, CatalogError> {
        Ok(outstanding_gaps())
    }
}
