//! Category frequency ranking.

use crate::domain::mapping::MappingResult;

/// Up to `limit` categories, most frequent first.
///
/// Equal counts keep the order in which categories first appear.
pub fn top_categories<'a>(
    results: impl IntoIterator<Item = &'a MappingResult>,
    limit: usize,
) -> Vec<String> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for result in results {
        match counts.iter_mut().find(|(c, _)| *c == result.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((&result.category, 1)),
        }
    }
    // Stable sort keeps first-appearance order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(c, _)| c.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Confidence, ControlId, DocumentId};
    use crate::domain::verdict::MissingElements;

    fn with_category(category: &str) -> MappingResult {
        MappingResult {
            control_id: ControlId::new("X-1").unwrap(),
            category: category.to_string(),
            requirement: String::new(),
            matches: true,
            confidence: Confidence::ZERO,
            relevant_sections: vec![],
            reasoning: String::new(),
            missing_elements: MissingElements::default(),
            source_document: String::new(),
            document_id: DocumentId::new(),
            degraded_reason: None,
        }
    }

    #[test]
    fn ranks_by_frequency() {
        let results: Vec<_> = ["A", "B", "B", "C", "C", "C"].iter().map(|c| with_category(c)).collect();
        assert_eq!(top_categories(&results, 3), vec!["C", "B", "A"]);
    }

    #[test]
    fn ties_keep_first_appearance() {
        let results: Vec<_> = ["Data", "Access", "Incident", "Backup"]
            .iter()
            .map(|c| with_category(c))
            .collect();
        assert_eq!(top_categories(&results, 3), vec!["Data", "Access", "Incident"]);
    }

    #[test]
    fn empty_input_has_no_categories() {
        assert!(top_categories(std::iter::empty(), 3).is_empty());
    }
}
