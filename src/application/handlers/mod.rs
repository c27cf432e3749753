//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod document;
pub mod gap;
pub mod mapping;

pub use document::{
    DeleteDocumentCommand, DeleteDocumentHandler, DocumentListing, ListDocumentsHandler,
    UploadDocumentCommand, UploadDocumentHandler, UploadDocumentResult,
};
pub use gap::{GapAnalysis, GetGapAnalysisHandler, GetGapAnalysisQuery};
pub use mapping::{
    DocumentMapping, EvaluateMatchCommand, EvaluateMatchHandler, EvaluateMatchResult,
    MapDocumentCommand, MapDocumentHandler, MapDocumentsCommand, MapDocumentsHandler,
    MultiDocumentMapping,
};
