//! Checklist catalog adapters.
//!
//! - `BuiltinChecklistCatalog` - compiled-in ISO 27001 checklist
//! - `HttpChecklistCatalog` - checklists served by the checklist service

mod builtin;
mod http_catalog;

pub use builtin::{outstanding_gaps, BuiltinChecklistCatalog, ISO_27001_SIMPLIFIED};
pub use http_catalog::HttpChecklistCatalog;
