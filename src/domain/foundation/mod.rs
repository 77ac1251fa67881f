//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the AHP domain.

mod analysis_stage;
mod errors;
mod ids;
mod percentage;
mod saaty_scale;
mod state_machine;
mod timestamp;

pub use analysis_stage::AnalysisStage;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, CriterionId, ModelId};
pub use percentage::{format_fraction, Percentage};
pub use saaty_scale::{describe_judgment, SaatyScale};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
