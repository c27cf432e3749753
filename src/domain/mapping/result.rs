//! MappingResult - one evaluated (document, control) pair.

use serde::{Deserialize, Serialize};

use crate::domain::checklist::Control;
use crate::domain::document::Document;
use crate::domain::foundation::{Confidence, ControlId, DocumentId};
use crate::domain::verdict::{Assessment, MatchVerdict, MissingElements};

/// The document a result was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub filename: String,
    /// Document type from the upload-time summary, when known.
    pub document_type: Option<String>,
}

impl SourceDocument {
    pub fn from_document(document: &Document, document_type: Option<String>) -> Self {
        Self {
            id: document.id(),
            filename: document.filename().to_string(),
            document_type,
        }
    }
}

/// Verdict for one control against one document, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub control_id: ControlId,
    pub category: String,
    pub requirement: String,
    pub matches: bool,
    pub confidence: Confidence,
    pub relevant_sections: Vec<String>,
    pub reasoning: String,
    pub missing_elements: MissingElements,
    /// Filename of the document that produced this result.
    pub source_document: String,
    pub document_id: DocumentId,
    /// Set when the verdict is the fallback rather than a model answer.
    pub degraded_reason: Option<String>,
}

impl MappingResult {
    pub fn from_assessment(
        control: &Control,
        source: &SourceDocument,
        assessment: Assessment<MatchVerdict>,
    ) -> Self {
        let (verdict, degraded_reason) = assessment.into_parts();
        Self {
            control_id: control.id.clone(),
            category: control.category.clone(),
            requirement: control.requirement.clone(),
            matches: verdict.matches,
            confidence: verdict.confidence,
            relevant_sections: verdict.relevant_sections,
            reasoning: verdict.reasoning,
            missing_elements: verdict.missing_elements,
            source_document: source.filename.clone(),
            document_id: source.id,
            degraded_reason,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded_reason.is_some()
    }
}
