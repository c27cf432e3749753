//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryDocumentStore** - Process-lifetime registry behind a `RwLock`

mod in_memory_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
