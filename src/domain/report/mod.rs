//! Plain-text report rendering.
//!
//! Reports are derived artifacts: rendered fresh from results plus source
//! metadata, never stored. Rendering is pure; the generation timestamp is
//! passed in so identical input renders byte-identical text.

mod categories;
mod gap_report;
mod mapping_report;

pub use categories::top_categories;
pub use gap_report::{render_gap_report, GapReportContext};
pub use mapping_report::{render_aggregated_report, render_document_report};

/// Closing line of every report.
pub const REPORT_FOOTER: &str =
    "This report was generated automatically by the Compliance Checker Service.";
