//! Tunables shared by the analysis handlers.

use crate::domain::foundation::ChecklistId;

/// Excerpt sizes, fan-out and defaults for analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Characters of document text embedded in the summary prompt.
    pub summary_excerpt_chars: usize,
    /// Characters of document text embedded in each match prompt.
    pub match_excerpt_chars: usize,
    /// Upper bound on verdict requests in flight per mapping request.
    pub max_concurrent_evaluations: usize,
    /// Checklist used when a request names none.
    pub default_checklist_id: ChecklistId,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            summary_excerpt_chars: 2000,
            match_excerpt_chars: 1500,
            max_concurrent_evaluations: 1,
            default_checklist_id: ChecklistId::new("iso-27001-simplified")
                .expect("default checklist id is non-blank"),
        }
    }
}
