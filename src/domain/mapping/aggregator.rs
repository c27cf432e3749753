//! Best-match aggregation across documents.
//!
//! Every (document, control) pair yields one [`MappingResult`]. Aggregation
//! reduces them to exactly one row per distinct control id:
//!
//! - among results with `matches == true`, the highest confidence wins;
//!   on equal confidence the earliest result in evaluation order wins
//! - if no result matched, a synthetic non-match is produced from the first
//!   result recorded for that control, with zero confidence
//!
//! Rows come out in order of each control id's first appearance, so a fixed
//! result list always reduces to the same output.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::checklist::Checklist;
use crate::domain::foundation::{Confidence, ControlId};
use crate::domain::verdict::MissingElements;

use super::{MappingResult, MappingSummary};

/// Reasoning of a synthesized non-match.
pub const NO_MATCH_REASONING: &str = "No document satisfies this requirement.";

/// Missing elements of a synthesized non-match.
pub const NO_MATCH_MISSING_ELEMENTS: &str =
    "A document is needed that contains a policy or procedure satisfying this requirement.";

/// The single surviving row for one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Best match, or the synthesized non-match.
    pub result: MappingResult,
    /// How many (document, control) results were considered.
    pub evaluated_pairs: usize,
    /// How many of those matched.
    pub matching_pairs: usize,
}

impl AggregatedResult {
    /// True when no document matched and the row was synthesized.
    pub fn is_synthesized(&self) -> bool {
        self.matching_pairs == 0
    }
}

/// Reduces results to one row per distinct control id.
pub fn best_matches(results: &[MappingResult]) -> Vec<AggregatedResult> {
    let mut order: Vec<&ControlId> = Vec::new();
    let mut groups: HashMap<&ControlId, Vec<&MappingResult>> = HashMap::new();

    for result in results {
        groups
            .entry(&result.control_id)
            .or_insert_with(|| {
                order.push(&result.control_id);
                Vec::new()
            })
            .push(result);
    }

    order
        .into_iter()
        .filter_map(|control_id| groups.remove(control_id))
        .filter_map(|group| reduce_group(&group))
        .collect()
}

fn reduce_group(group: &[&MappingResult]) -> Option<AggregatedResult> {
    let first = group.first()?;
    let mut best: Option<&MappingResult> = None;
    let mut matching_pairs = 0;

    for candidate in group.iter().copied().filter(|r| r.matches) {
        matching_pairs += 1;
        best = match best {
            Some(current) if candidate.confidence > current.confidence => Some(candidate),
            Some(current) => Some(current),
            None => Some(candidate),
        };
    }

    let result = match best {
        Some(best) => best.clone(),
        None => synthesize_non_match(first),
    };

    Some(AggregatedResult {
        result,
        evaluated_pairs: group.len(),
        matching_pairs,
    })
}

fn synthesize_non_match(template: &MappingResult) -> MappingResult {
    MappingResult {
        matches: false,
        confidence: Confidence::ZERO,
        relevant_sections: Vec::new(),
        reasoning: NO_MATCH_REASONING.to_string(),
        missing_elements: MissingElements::text(NO_MATCH_MISSING_ELEMENTS),
        degraded_reason: None,
        ..template.clone()
    }
}

/// Catalog controls for which no result was recorded at all.
pub fn unevaluated_controls(checklist: &Checklist, results: &[MappingResult]) -> Vec<ControlId> {
    let evaluated: HashSet<&ControlId> = results.iter().map(|r| &r.control_id).collect();
    let mut missing = Vec::new();
    for control in &checklist.items {
        if !evaluated.contains(&control.id) && !missing.contains(&control.id) {
            missing.push(control.id.clone());
        }
    }
    missing
}

/// Aggregated view of a multi-document mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub results: Vec<AggregatedResult>,
    /// Catalog controls with no recorded result; excluded from `results`.
    pub unevaluated_controls: Vec<ControlId>,
}

impl Aggregation {
    pub fn build(checklist: &Checklist, results: &[MappingResult]) -> Self {
        Self {
            results: best_matches(results),
            unevaluated_controls: unevaluated_controls(checklist, results),
        }
    }

    /// Surviving rows as plain mapping results.
    pub fn rows(&self) -> impl Iterator<Item = &MappingResult> {
        self.results.iter().map(|r| &r.result)
    }

    pub fn summary(&self) -> MappingSummary {
        MappingSummary::from_results(self.rows())
    }
}
