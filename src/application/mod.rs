//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod errors;
pub mod handlers;

pub use errors::AnalysisError;
pub use handlers::{
    // Analysis handlers
    ComputeAnalysisCommand, ComputeAnalysisHandler, ComputeAnalysisResult,
    // Model handlers
    JudgmentSubject, RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentResult,
};
