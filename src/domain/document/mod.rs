//! Uploaded documents and their initial AI-derived summary.

mod document;
mod summary;

pub use document::Document;
pub use summary::DocumentSummary;
