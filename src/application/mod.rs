//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (upload, delete, map) and queries (list, gaps) each get a handler.

mod errors;
pub mod handlers;
mod match_evaluator;
mod options;

pub use errors::AnalysisError;
pub use handlers::*;
pub use match_evaluator::MatchEvaluator;
pub use options::AnalysisOptions;
