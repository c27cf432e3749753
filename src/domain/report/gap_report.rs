//! Gap analysis report.

use crate::domain::checklist::{Gap, Priority};
use crate::domain::foundation::{ChecklistId, Timestamp};

use super::REPORT_FOOTER;

const NEXT_STEPS: [&str; 4] = [
    "Assign each gap to an owner",
    "Set deadlines",
    "Publish regular status reports",
    "Schedule a management review",
];

/// Identifies which checklist a gap report covers and when it was produced.
#[derive(Debug, Clone)]
pub struct GapReportContext {
    pub checklist_id: ChecklistId,
    pub generated_at: Timestamp,
}

/// Renders outstanding gaps grouped by remediation priority.
pub fn render_gap_report(context: &GapReportContext, gaps: &[Gap]) -> String {
    let count = |priority: Priority| gaps.iter().filter(|g| g.priority == priority).count();

    let mut report = String::from("COMPLIANCE GAP ANALYSIS REPORT\n");
    report.push_str(&"=".repeat(50));
    report.push_str("\n\n");
    report.push_str(&format!("Checklist ID: {}\n", context.checklist_id));
    report.push_str(&format!(
        "Report date: {}\n",
        context.generated_at.to_report_string()
    ));
    report.push_str(&format!("Total gaps: {}\n\n", gaps.len()));

    report.push_str("PRIORITY DISTRIBUTION:\n");
    for priority in Priority::ALL {
        report.push_str(&format!("- {}: {}\n", priority.label(), count(priority)));
    }
    report.push('\n');

    report.push_str("DETAILED GAPS:\n");
    report.push_str("==============\n\n");
    for (index, gap) in gaps.iter().enumerate() {
        report.push_str(&format!("{}. GAP\n", index + 1));
        report.push_str("--------------------\n");
        report.push_str(&format!("Requirement ID: {}\n", gap.requirement_id));
        report.push_str(&format!("Requirement: {}\n", gap.requirement));
        report.push_str(&format!("Status: {}\n", gap.status));
        report.push_str(&format!("Priority: {}\n\n", gap.priority));
        report.push_str("Suggested evidence:\n");
        for evidence in &gap.suggested_evidence {
            report.push_str(&format!("- {}\n", evidence));
        }
        report.push('\n');
    }

    report.push_str("SUMMARY AND RECOMMENDATIONS:\n");
    report.push_str("============================\n\n");
    report.push_str("Based on the gap analysis we recommend the following:\n\n");
    for (index, priority) in Priority::ALL.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} priority gaps ({}), close {}:\n",
            index + 1,
            priority.label(),
            count(*priority),
            priority.remediation_window()
        ));
        for action in priority.follow_up() {
            report.push_str(&format!("   - {}\n", action));
        }
        report.push('\n');
    }

    report.push_str("Next steps:\n");
    for step in NEXT_STEPS {
        report.push_str(&format!("- {}\n", step));
    }
    report.push('\n');
    report.push_str(REPORT_FOOTER);
    report.push('\n');
    report
}
