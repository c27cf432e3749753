//! GetGapAnalysisHandler - Query handler for outstanding requirements.

use std::sync::Arc;

use crate::application::{AnalysisError, AnalysisOptions};
use crate::domain::checklist::Gap;
use crate::domain::foundation::{ChecklistId, Timestamp};
use crate::domain::report::{render_gap_report, GapReportContext};
use crate::ports::ChecklistCatalog;

/// Query for the gaps of a checklist.
#[derive(Debug, Clone, Default)]
pub struct GetGapAnalysisQuery {
    pub checklist_id: Option<ChecklistId>,
}

#[derive(Debug, Clone)]
pub struct GapAnalysis {
    pub checklist_id: ChecklistId,
    pub gaps: Vec<Gap>,
    pub analyzed_at: Timestamp,
}

impl GapAnalysis {
    /// Renders the downloadable gap report.
    pub fn render_report(&self) -> String {
        let context = GapReportContext {
            checklist_id: self.checklist_id.clone(),
            generated_at: self.analyzed_at,
        };
        render_gap_report(&context, &self.gaps)
    }
}

pub struct GetGapAnalysisHandler {
    catalog: Arc<dyn ChecklistCatalog>,
    options: AnalysisOptions,
}

impl GetGapAnalysisHandler {
    pub fn new(catalog: Arc<dyn ChecklistCatalog>, options: AnalysisOptions) -> Self {
        Self { catalog, options }
    }

    pub async fn handle(&self, query: GetGapAnalysisQuery) -> Result<GapAnalysis, AnalysisError> {
        let checklist_id = query
            .checklist_id
            .unwrap_or_else(|| self.options.default_checklist_id.clone());
        let gaps = self.catalog.outstanding_gaps(&checklist_id).await?;

        Ok(GapAnalysis {
            checklist_id,
            gaps,
            analyzed_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::checklist::BuiltinChecklistCatalog;

    fn handler() -> GetGapAnalysisHandler {
        GetGapAnalysisHandler::new(
            Arc::new(BuiltinChecklistCatalog::new()),
            AnalysisOptions::default(),
        )
    }

    #[tokio::test]
    async fn defaults_checklist_id() {
        let analysis = handler().handle(GetGapAnalysisQuery::default()).await.unwrap();
        assert_eq!(analysis.checklist_id.as_str(), "iso-27001-simplified");
        assert_eq!(analysis.gaps.len(), 2);
    }

    #[tokio::test]
    async fn report_names_requested_checklist() {
        let analysis = handler()
            .handle(GetGapAnalysisQuery {
                checklist_id: Some(ChecklistId::new("custom").unwrap()),
            })
            .await
            .unwrap();

        let report = analysis.render_report();
        assert!(report.contains("Checklist ID: custom"));
        assert!(report.contains("- Critical: 1\n- High: 1\n"));
    }
}
