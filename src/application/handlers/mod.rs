//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analysis;
pub mod model;

pub use analysis::{ComputeAnalysisCommand, ComputeAnalysisHandler, ComputeAnalysisResult};
pub use model::{
    JudgmentSubject, RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentResult,
};
