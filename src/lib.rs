//! Evidence Analyzer - Compliance Evidence Matching Service
//!
//! Uploaded policy documents are assessed by an LLM against checklist
//! controls. Results are aggregated across documents, rendered as plain-text
//! mapping and gap reports, and served over HTTP. When the model is
//! unreachable, verdicts degrade to marked fallbacks instead of failing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
