//! Analysis command handlers.
//!
//! Handlers that load a decision model and run the AHP pipeline over it.

mod compute_analysis;

pub use compute_analysis::{ComputeAnalysisCommand, ComputeAnalysisHandler, ComputeAnalysisResult};
