//! AHP Module - Pure domain services for the Analytic Hierarchy Process.
//!
//! Turns pairwise judgments between criteria and between alternatives into
//! criteria weights, alternative scores, a ranking, and a consistency verdict.
//!
//! # Components
//!
//! - `MatrixBuilder` - Dense reciprocal matrices from sparse judgments
//! - `PriorityExtractor` - Column-normalization / row-average priority vectors
//! - `ConsistencyChecker` - λmax, CI, and CR against Saaty's Random Index
//! - `Aggregator` - Weighted synthesis and stable ranking
//! - `AhpEngine` - The full pipeline over a `DecisionModel`
//! - `ResultReport` - Export-ready table rows
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Matrices are rebuilt from the
//! judgment set on every evaluation and never persisted. An inconsistent
//! matrix is a result, not an error.

mod aggregator;
mod consistency;
mod engine;
mod errors;
mod judgment;
mod matrix;
mod matrix_builder;
mod model;
mod priority;
mod report;

// Re-export all public types
pub use aggregator::{Aggregator, RankedAlternative};
pub use consistency::{
    random_index, ConsistencyChecker, ConsistencyResult, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use engine::{
    AhpEngine, AlternativeScore, AnalysisResult, ConsistencyReport, CriterionConsistency,
    CriterionWeight,
};
pub use errors::{AhpError, EntityKind, ModelError};
pub use judgment::{
    is_valid_magnitude, JudgmentSet, PairwiseJudgment, ScopedJudgment, NO_PREFERENCE,
};
pub use matrix::Matrix;
pub use matrix_builder::MatrixBuilder;
pub use model::{Alternative, Criterion, DecisionModel, DecisionModelBuilder, MIN_COMPARABLE};
pub use priority::{PriorityDerivation, PriorityExtractor, PriorityVector, WEIGHT_SUM_TOLERANCE};
pub use report::{consistency_label, CriterionRow, RankingRow, ResultReport};
