//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the evidence analysis domain.

mod confidence;
mod errors;
mod ids;
mod timestamp;

pub use confidence::Confidence;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChecklistId, ControlId, DocumentId};
pub use timestamp::Timestamp;
