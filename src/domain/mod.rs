//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `document` - Uploaded documents and their summaries
//! - `checklist` - Controls, catalogs and outstanding gaps
//! - `verdict` - Model verdicts and reply parsing
//! - `mapping` - Document-to-control mapping and best-match aggregation
//! - `report` - Plain-text mapping and gap reports

pub mod checklist;
pub mod document;
pub mod foundation;
pub mod mapping;
pub mod report;
pub mod verdict;
