//! HTTP adapter for document analysis.
//!
//! Exposes upload, requirement matching, checklist mapping and gap reports
//! via REST endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalysisAppState;
pub use routes::analysis_router;
