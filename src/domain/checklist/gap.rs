//! Outstanding requirements and their remediation priority.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ControlId;

/// Remediation priority of an outstanding requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// All tiers, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Target window for closing a gap of this priority.
    pub fn remediation_window(&self) -> &'static str {
        match self {
            Priority::Critical => "immediately",
            Priority::High => "within 30 days",
            Priority::Medium => "within 90 days",
            Priority::Low => "within 6 months",
        }
    }

    /// Follow-up actions recommended for this tier.
    pub fn follow_up(&self) -> &'static [&'static str] {
        match self {
            Priority::Critical => &[
                "Immediate intervention required",
                "Accountable management sign-off",
                "Resolve without delay",
            ],
            Priority::High => &["Resolution within 30 days", "Regular follow-up required"],
            Priority::Medium => &["Resolution within 90 days", "Quarterly review"],
            Priority::Low => &["Resolution within 6 months", "Semi-annual review"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_uppercase())
    }
}

/// A requirement still lacking evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub requirement_id: ControlId,
    pub requirement: String,
    pub status: String,
    pub priority: Priority,
    pub suggested_evidence: Vec<String>,
}
