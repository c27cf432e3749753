//! Mapping report - matched/unmatched controls with recommendations.

use crate::domain::foundation::{ControlId, DocumentId, Timestamp};
use crate::domain::mapping::{Aggregation, MappingResult, MappingSummary, SourceDocument};

use super::{top_categories, REPORT_FOOTER};

const TOP_CATEGORY_LIMIT: usize = 3;

/// Source identification printed in the header.
enum Sources<'a> {
    Single(&'a SourceDocument),
    Multiple(&'a [SourceDocument]),
}

struct ReportLayout<'a> {
    checklist_name: &'a str,
    sources: Sources<'a>,
    generated_at: Timestamp,
    /// Splits prose missing-elements into suggestion lines.
    suggestion_delimiter: char,
    unevaluated_controls: &'a [ControlId],
}

/// Renders the report for one document mapped against a checklist.
pub fn render_document_report(
    checklist_name: &str,
    source: &SourceDocument,
    results: &[MappingResult],
    generated_at: Timestamp,
) -> String {
    let layout = ReportLayout {
        checklist_name,
        sources: Sources::Single(source),
        generated_at,
        suggestion_delimiter: ',',
        unevaluated_controls: &[],
    };
    render(&layout, results.iter().collect())
}

/// Renders the report for several documents reduced to one row per control.
pub fn render_aggregated_report(
    checklist_name: &str,
    sources: &[SourceDocument],
    aggregation: &Aggregation,
    generated_at: Timestamp,
) -> String {
    let layout = ReportLayout {
        checklist_name,
        sources: Sources::Multiple(sources),
        generated_at,
        suggestion_delimiter: '.',
        unevaluated_controls: &aggregation.unevaluated_controls,
    };
    render(&layout, aggregation.rows().collect())
}

fn render(layout: &ReportLayout<'_>, rows: Vec<&MappingResult>) -> String {
    let summary = MappingSummary::from_results(rows.iter().copied());
    let (matched, unmatched): (Vec<&MappingResult>, Vec<&MappingResult>) =
        rows.iter().copied().partition(|r| r.matches);

    let mut report = String::new();
    report.push_str(&header(layout));
    report.push_str(&summary_section(&summary));
    report.push_str("DETAILED MAPPING:\n");
    report.push_str("=================\n\n");
    report.push_str(&matched_section(&matched));
    report.push_str(&unmatched_section(&unmatched, layout.suggestion_delimiter));
    report.push_str(&unevaluated_section(layout.unevaluated_controls));
    if let Sources::Multiple(sources) = layout.sources {
        report.push_str(&per_document_section(sources, &matched));
    }
    report.push_str(&recommendations(layout, &matched, &unmatched));
    report
}

fn header(layout: &ReportLayout<'_>) -> String {
    let name = layout.checklist_name.to_uppercase();
    let mut section = match layout.sources {
        Sources::Single(source) => {
            let title = format!("{} MAPPING REPORT", name);
            format!(
                "{}\n{}\n\nSource document: {}\nDocument ID: {}\n",
                title,
                "=".repeat(title.chars().count()),
                source.filename,
                source.id
            )
        }
        Sources::Multiple(sources) => {
            let title = format!("{} MULTI-DOCUMENT MAPPING REPORT", name);
            let listed: Vec<String> = sources.iter().map(describe_source).collect();
            format!(
                "{}\n{}\n\nSource documents: {}\n",
                title,
                "=".repeat(title.chars().count()),
                listed.join(", ")
            )
        }
    };
    section.push_str(&format!(
        "Generated: {}\n\n",
        layout.generated_at.to_report_string()
    ));
    section
}

fn describe_source(source: &SourceDocument) -> String {
    match &source.document_type {
        Some(kind) => format!("{} ({})", source.filename, kind),
        None => source.filename.clone(),
    }
}

fn summary_section(summary: &MappingSummary) -> String {
    let mut section = String::from("SUMMARY:\n");
    section.push_str(&format!(
        "- Total controls checked: {}\n",
        summary.total_controls
    ));
    section.push_str(&format!("- Matched controls: {}\n", summary.matched_controls));
    section.push_str(&format!(
        "- Unmatched controls: {}\n",
        summary.unmatched_controls
    ));
    section.push_str(&format!("- Compliance rate: {}\n", summary.formatted_rate()));
    if summary.degraded_verdicts > 0 {
        section.push_str(&format!(
            "- Fallback verdicts (AI unavailable): {}\n",
            summary.degraded_verdicts
        ));
    }
    section.push('\n');
    section
}

fn matched_section(matched: &[&MappingResult]) -> String {
    if matched.is_empty() {
        return String::new();
    }

    let mut section = format!("MATCHED CONTROLS ({}):\n", matched.len());
    section.push_str("-----------------------------------\n\n");

    for (index, item) in matched.iter().enumerate() {
        section.push_str(&format!(
            "{}. Control: {} [{}]\n",
            index + 1,
            item.control_id,
            item.category
        ));
        section.push_str(&format!("   Requirement: {}\n", item.requirement));
        section.push_str(&format!("   Confidence: {}\n", item.confidence));
        section.push_str(&format!("   Reasoning: {}\n", item.reasoning));
        section.push_str(&format!("   Source document: {}\n", item.source_document));
        section.push_str(&degraded_line(item));

        if !item.relevant_sections.is_empty() {
            section.push_str("\n   Relevant sections:\n");
            for quote in &item.relevant_sections {
                section.push_str(&format!("   - \"{}\"\n", quote));
            }
        }
        section.push('\n');
    }
    section
}

fn unmatched_section(unmatched: &[&MappingResult], delimiter: char) -> String {
    if unmatched.is_empty() {
        return String::new();
    }

    let mut section = format!("UNMATCHED CONTROLS ({}):\n", unmatched.len());
    section.push_str("---------------------------------------\n\n");

    for (index, item) in unmatched.iter().enumerate() {
        section.push_str(&format!(
            "{}. Control: {} [{}]\n",
            index + 1,
            item.control_id,
            item.category
        ));
        section.push_str(&format!("   Requirement: {}\n", item.requirement));
        section.push_str(&format!("   Reasoning: {}\n", item.reasoning));
        section.push_str(&format!("   Missing elements: {}\n", item.missing_elements));
        section.push_str(&format!("   Source document: {}\n", item.source_document));
        section.push_str(&degraded_line(item));

        let suggestions = item.missing_elements.suggestions(delimiter);
        if !suggestions.is_empty() {
            section.push_str("\n   Suggestions:\n");
            for suggestion in suggestions {
                section.push_str(&format!("   - {}\n", suggestion));
            }
        }
        section.push('\n');
    }
    section
}

fn degraded_line(item: &MappingResult) -> String {
    match &item.degraded_reason {
        Some(reason) => format!("   Verdict: fallback, AI unavailable ({})\n", reason),
        None => String::new(),
    }
}

fn unevaluated_section(controls: &[ControlId]) -> String {
    if controls.is_empty() {
        return String::new();
    }

    let mut section = format!("NO RESULT AVAILABLE ({}):\n", controls.len());
    section.push_str("---------------------------------------\n\n");
    for control in controls {
        section.push_str(&format!("- {}\n", control));
    }
    section.push('\n');
    section
}

fn per_document_section(sources: &[SourceDocument], matched: &[&MappingResult]) -> String {
    // Keyed by document id: distinct uploads may share a filename.
    let mut counts: Vec<(DocumentId, &str, usize)> = Vec::new();
    for item in matched {
        match counts.iter_mut().find(|(id, _, _)| *id == item.document_id) {
            Some((_, _, n)) => *n += 1,
            None => counts.push((item.document_id, &item.source_document, 1)),
        }
    }

    let mut section = String::from("PER-DOCUMENT STATISTICS:\n");
    section.push_str("========================\n\n");
    for (id, filename, count) in counts {
        let kind = sources
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.document_type.as_deref())
            .unwrap_or("unknown");
        section.push_str(&format!(
            "- {} ({}): {} matched controls\n",
            filename, kind, count
        ));
    }
    section.push('\n');
    section
}

fn recommendations(
    layout: &ReportLayout<'_>,
    matched: &[&MappingResult],
    unmatched: &[&MappingResult],
) -> String {
    let subject = match layout.sources {
        Sources::Single(_) => "The document satisfies",
        Sources::Multiple(_) => "The documents satisfy",
    };
    let strongest = list_or_none(top_categories(matched.iter().copied(), TOP_CATEGORY_LIMIT));
    let weakest = list_or_none(top_categories(unmatched.iter().copied(), TOP_CATEGORY_LIMIT));

    let mut section = String::from("SUMMARY AND RECOMMENDATIONS:\n");
    section.push_str("============================\n\n");
    section.push_str("1. STRENGTHS:\n");
    section.push_str(&format!(
        "   - {} {} {} controls\n",
        subject,
        matched.len(),
        layout.checklist_name
    ));
    section.push_str(&format!("   - Strongest areas: {}\n\n", strongest));
    section.push_str("2. WEAKNESSES:\n");
    section.push_str(&format!(
        "   - Documentation is incomplete for {} controls\n",
        unmatched.len()
    ));
    section.push_str(&format!("   - Areas needing work: {}\n\n", weakest));
    section.push_str("3. RECOMMENDED ACTIONS:\n");
    section.push_str("   - Prepare missing documents for the unmatched controls\n");
    section.push_str("   - Extend existing documents with the missing elements\n");
    section.push_str("   - Review and update the documentation regularly\n\n");
    section.push_str(REPORT_FOOTER);
    section.push('\n');
    section
}

fn list_or_none(categories: Vec<String>) -> String {
    if categories.is_empty() {
        "none".to_string()
    } else {
        categories.join(", ")
    }
}
