//! Control and Checklist - read-only catalog entries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ChecklistId, ControlId};

/// A single compliance requirement (e.g. "AC-2: User access reviews quarterly").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: ControlId,
    pub category: String,
    pub requirement: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl Control {
    pub fn new(
        id: ControlId,
        category: impl Into<String>,
        requirement: impl Into<String>,
        hints: Vec<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            requirement: requirement.into(),
            hints,
        }
    }
}

/// An ordered catalog of controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Control>,
}

impl Checklist {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Control ids that occur more than once, in first-repeat order.
    pub fn duplicate_control_ids(&self) -> Vec<ControlId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for control in &self.items {
            if !seen.insert(&control.id) && !duplicates.contains(&control.id) {
                duplicates.push(control.id.clone());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(id: &str) -> Control {
        Control::new(ControlId::new(id).unwrap(), "Access Control", "req", vec![])
    }

    #[test]
    fn deserializes_checklist_service_payload() {
        let json = r#"{
            "id": "iso-27001-simplified",
            "name": "ISO 27001 Essential Controls",
            "items": [{
                "id": "AC-1",
                "category": "Access Control",
                "requirement": "Password policy documented and enforced",
                "hints": ["password policy"],
                "status": "pending",
                "evidence": []
            }]
        }"#;
        let checklist: Checklist = serde_json::from_str(json).unwrap();
        assert_eq!(checklist.items.len(), 1);
        assert_eq!(checklist.items[0].hints, vec!["password policy"]);
    }

    #[test]
    fn finds_duplicate_ids_once() {
        let checklist = Checklist {
            id: ChecklistId::new("c").unwrap(),
            name: "c".to_string(),
            items: vec![control("A"), control("B"), control("A"), control("A")],
        };
        assert_eq!(checklist.duplicate_control_ids(), vec![ControlId::new("A").unwrap()]);
    }

    #[test]
    fn unique_catalog_has_no_duplicates() {
        let checklist = Checklist {
            id: ChecklistId::new("c").unwrap(),
            name: "c".to_string(),
            items: vec![control("A"), control("B")],
        };
        assert!(checklist.duplicate_control_ids().is_empty());
        assert!(!checklist.is_empty());
    }
}
