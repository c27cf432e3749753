//! Errors surfaced to callers of the analysis handlers.
//!
//! Only input problems and infrastructure faults appear here. AI failures
//! never do: they are absorbed into degraded verdicts.

use crate::domain::foundation::{
    ChecklistId, DocumentId, DomainError, ErrorCode, ValidationError,
};
use crate::ports::{CatalogError, StoreError};

/// Analysis handler errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No document is stored under the id.
    DocumentNotFound(DocumentId),
    /// The catalog has no checklist with the id.
    ChecklistNotFound(ChecklistId),
    /// The checklist exists but has no controls.
    EmptyChecklist(ChecklistId),
    /// A multi-document mapping was requested with no documents.
    NoDocumentsSelected,
    /// Uploaded bytes are not UTF-8.
    InvalidEncoding(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The checklist catalog could not be read.
    CatalogUnavailable(String),
    /// The document store failed.
    Storage(String),
}

impl AnalysisError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AnalysisError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::DocumentNotFound(_) => ErrorCode::DocumentNotFound,
            AnalysisError::ChecklistNotFound(_) => ErrorCode::ChecklistNotFound,
            AnalysisError::EmptyChecklist(_) => ErrorCode::EmptyChecklist,
            AnalysisError::NoDocumentsSelected => ErrorCode::NoDocumentsSelected,
            AnalysisError::InvalidEncoding(_) => ErrorCode::InvalidEncoding,
            AnalysisError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AnalysisError::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
            AnalysisError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AnalysisError::DocumentNotFound(id) => format!("Document not found: {}", id),
            AnalysisError::ChecklistNotFound(id) => format!("Checklist not found: {}", id),
            AnalysisError::EmptyChecklist(id) => format!("Checklist has no controls: {}", id),
            AnalysisError::NoDocumentsSelected => "No documents selected".to_string(),
            AnalysisError::InvalidEncoding(reason) => {
                format!("Document must be UTF-8 text: {}", reason)
            }
            AnalysisError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AnalysisError::CatalogUnavailable(msg) => {
                format!("Checklist catalog unavailable: {}", msg)
            }
            AnalysisError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AnalysisError {}

impl From<ValidationError> for AnalysisError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => {
                AnalysisError::validation(field, "cannot be empty")
            }
            ValidationError::InvalidFormat { field, reason } => {
                AnalysisError::validation(field, reason)
            }
        }
    }
}

impl From<StoreError> for AnalysisError {
    fn from(err: StoreError) -> Self {
        AnalysisError::Storage(err.to_string())
    }
}

impl From<CatalogError> for AnalysisError {
    fn from(err: CatalogError) -> Self {
        AnalysisError::CatalogUnavailable(err.to_string())
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            AnalysisError::DocumentNotFound(id) => domain.with_detail("document_id", id.to_string()),
            AnalysisError::ChecklistNotFound(id) | AnalysisError::EmptyChecklist(id) => {
                domain.with_detail("checklist_id", id.to_string())
            }
            AnalysisError::ValidationFailed { field, .. } => domain.with_detail("field", field),
            _ => domain,
        }
    }
}
