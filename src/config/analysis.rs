//! Analysis tunables

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::AnalysisOptions;
use crate::domain::foundation::ChecklistId;

/// Excerpt sizes, fallback confidence and fan-out for mapping requests
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_summary_excerpt_chars")]
    pub summary_excerpt_chars: usize,

    #[serde(default = "default_match_excerpt_chars")]
    pub match_excerpt_chars: usize,

    /// Confidence reported on verdicts produced without the AI
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence: f64,

    #[serde(default = "default_max_concurrent_evaluations")]
    pub max_concurrent_evaluations: usize,

    /// Checklist used when a request names none
    #[serde(default = "default_checklist_id")]
    pub default_checklist_id: String,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.fallback_confidence) {
            return Err(ValidationError::InvalidFallbackConfidence(
                self.fallback_confidence,
            ));
        }
        if self.max_concurrent_evaluations == 0 {
            return Err(ValidationError::MustBePositive("max_concurrent_evaluations"));
        }
        if self.summary_excerpt_chars == 0 {
            return Err(ValidationError::MustBePositive("summary_excerpt_chars"));
        }
        if self.match_excerpt_chars == 0 {
            return Err(ValidationError::MustBePositive("match_excerpt_chars"));
        }
        ChecklistId::new(self.default_checklist_id.clone())
            .map_err(|_| ValidationError::InvalidChecklistId(self.default_checklist_id.clone()))?;
        Ok(())
    }

    /// Convert into the options consumed by the application handlers
    pub fn to_options(&self) -> Result<AnalysisOptions, ValidationError> {
        let default_checklist_id = ChecklistId::new(self.default_checklist_id.clone())
            .map_err(|_| ValidationError::InvalidChecklistId(self.default_checklist_id.clone()))?;
        Ok(AnalysisOptions {
            summary_excerpt_chars: self.summary_excerpt_chars,
            match_excerpt_chars: self.match_excerpt_chars,
            max_concurrent_evaluations: self.max_concurrent_evaluations,
            default_checklist_id,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_excerpt_chars: default_summary_excerpt_chars(),
            match_excerpt_chars: default_match_excerpt_chars(),
            fallback_confidence: default_fallback_confidence(),
            max_concurrent_evaluations: default_max_concurrent_evaluations(),
            default_checklist_id: default_checklist_id(),
        }
    }
}

fn default_summary_excerpt_chars() -> usize {
    2000
}

fn default_match_excerpt_chars() -> usize {
    1500
}

fn default_fallback_confidence() -> f64 {
    0.85
}

fn default_max_concurrent_evaluations() -> usize {
    1
}

fn default_checklist_id() -> String {
    "iso-27001-simplified".to_string()
}
