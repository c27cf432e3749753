//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (Gemini, OpenAI, mock) and the verdict client
//! - `checklist` - Built-in and remote checklist catalogs
//! - `http` - Axum REST API
//! - `storage` - In-memory document store

pub mod ai;
pub mod checklist;
pub mod http;
pub mod storage;
