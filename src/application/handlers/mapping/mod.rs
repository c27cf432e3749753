//! Mapping command handlers.

mod checklist_lookup;
mod evaluate_match;
mod map_document;
mod map_documents;

pub use evaluate_match::{EvaluateMatchCommand, EvaluateMatchHandler, EvaluateMatchResult};
pub use map_document::{DocumentMapping, MapDocumentCommand, MapDocumentHandler};
pub use map_documents::{MapDocumentsCommand, MapDocumentsHandler, MultiDocumentMapping};
