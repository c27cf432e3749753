//! Summary counts over a set of mapping results.

use serde::{Deserialize, Serialize};

use super::MappingResult;

/// Percentage of controls with a match, rounded to two decimals.
///
/// An empty result set has a rate of zero.
pub fn compliance_rate(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = matched as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Headline numbers of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappingSummary {
    pub total_controls: usize,
    pub matched_controls: usize,
    pub unmatched_controls: usize,
    /// Results whose verdict is the fallback rather than a model answer.
    pub degraded_verdicts: usize,
    pub compliance_rate: f64,
}

impl MappingSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a MappingResult>) -> Self {
        let mut total = 0;
        let mut matched = 0;
        let mut degraded = 0;
        for result in results {
            total += 1;
            if result.matches {
                matched += 1;
            }
            if result.is_degraded() {
                degraded += 1;
            }
        }
        Self {
            total_controls: total,
            matched_controls: matched,
            unmatched_controls: total - matched,
            degraded_verdicts: degraded,
            compliance_rate: compliance_rate(matched, total),
        }
    }

    /// Rate as printed in reports, e.g. "37.50%".
    pub fn formatted_rate(&self) -> String {
        format!("{:.2}%", self.compliance_rate)
    }
}
