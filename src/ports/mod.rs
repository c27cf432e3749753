//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Raw text completion against an LLM backend
//! - `VerdictClient` - Structured, never-failing verdicts built on a provider
//! - `DocumentStore` - Registry of uploaded documents and their summaries
//! - `ChecklistCatalog` - Read-only control catalogs and outstanding gaps

mod ai_provider;
mod checklist_catalog;
mod document_store;
mod verdict_client;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, RequestPurpose, TokenUsage,
};
pub use checklist_catalog::{CatalogError, ChecklistCatalog};
pub use document_store::{DocumentStore, StoredDocument, StoreError};
pub use verdict_client::VerdictClient;
