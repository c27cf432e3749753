//! Gap analysis query handlers.

mod get_gap_analysis;

pub use get_gap_analysis::{GapAnalysis, GetGapAnalysisHandler, GetGapAnalysisQuery};
