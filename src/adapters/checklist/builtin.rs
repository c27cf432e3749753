//! Built-in checklist catalog.
//!
//! Serves the "ISO 27001 Essential Controls" checklist and its fixed list of
//! outstanding gaps without any external service.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::checklist::{Checklist, Control, Gap, Priority};
use crate::domain::foundation::{ChecklistId, ControlId};
use crate::ports::{CatalogError, ChecklistCatalog};

/// Identifier of the built-in ISO 27001 checklist.
pub const ISO_27001_SIMPLIFIED: &str = "iso-27001-simplified";

// (id, category, requirement, hints)
const ISO_CONTROLS: [(&str, &str, &str, [&str; 2]); 8] = [
    ("AC-1", "Access Control", "Password policy documented and enforced", ["password policy", "security guidelines"]),
    ("AC-2", "Access Control", "User access reviews quarterly", ["access review", "user permissions"]),
    ("AC-3", "Access Control", "Admin access logged", ["admin logging", "privilege access"]),
    ("IM-1", "Incident Management", "Incident response plan documented", ["incident response", "emergency plan"]),
    ("IM-2", "Incident Management", "Incident log maintained", ["incident log", "tracking"]),
    ("DP-1", "Data Protection", "Backup policy defined", ["backup policy", "data recovery"]),
    ("DP-2", "Data Protection", "Encryption standards documented", ["encryption", "security standards"]),
    ("DP-3", "Data Protection", "Data retention policy exists", ["data retention", "policy"]),
];

static ISO_CHECKLIST: Lazy<Checklist> = Lazy::new(|| Checklist {
    id: checklist_id(ISO_27001_SIMPLIFIED),
    name: "ISO 27001 Essential Controls".to_string(),
    items: ISO_CONTROLS
        .iter()
        .map(|(id, category, requirement, hints)| {
            Control::new(
                control_id(id),
                *category,
                *requirement,
                hints.iter().map(|h| h.to_string()).collect(),
            )
        })
        .collect(),
});

static OUTSTANDING_GAPS: Lazy<Vec<Gap>> = Lazy::new(|| {
    vec![
        Gap {
            requirement_id: control_id("AC-2"),
            requirement: "User access reviews quarterly".to_string(),
            status: "pending".to_string(),
            priority: Priority::High,
            suggested_evidence: vec![
                "User access review reports".to_string(),
                "Access review meeting minutes".to_string(),
            ],
        },
        Gap {
            requirement_id: control_id("IM-1"),
            requirement: "Incident response plan documented".to_string(),
            status: "pending".to_string(),
            priority: Priority::Critical,
            suggested_evidence: vec![
                "Incident response plan document".to_string(),
                "Emergency contact list".to_string(),
            ],
        },
    ]
});

fn control_id(id: &str) -> ControlId {
    ControlId::new(id).expect("built-in control ids are non-blank")
}

fn checklist_id(id: &str) -> ChecklistId {
    ChecklistId::new(id).expect("built-in checklist ids are non-blank")
}

/// The fixed list of outstanding gaps.
///
/// Gap tracking is not computed; every checklist reports the same list.
pub fn outstanding_gaps() -> Vec<Gap> {
    OUTSTANDING_GAPS.clone()
}

/// Catalog backed by compiled-in checklists.
#[derive(Debug, Clone, Default)]
pub struct BuiltinChecklistCatalog;

impl BuiltinChecklistCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChecklistCatalog for BuiltinChecklistCatalog {
    async fn get(&self, id: &ChecklistId) -> Result<Option<Checklist>, CatalogError> {
        if id.as_str() == ISO_27001_SIMPLIFIED {
            Ok(Some(ISO_CHECKLIST.clone()))
        } else {
            Ok(None)
        }
    }

    async fn outstanding_gaps(&self, _id: &ChecklistId) -> Result<Vec<Gap>, CatalogError> {
        Ok(outstanding_gaps())
    }
}
