//! Errors surfaced by application handlers.

use thiserror::Error;

use crate::domain::ahp::{AhpError, EntityKind, ModelError};
use crate::domain::foundation::{AnalysisStage, DomainError, ErrorCode, ValidationError};
use crate::ports::ModelStorageError;

/// Failures from loading, editing, or evaluating a decision model.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Engine(#[from] AhpError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] ModelStorageError),

    #[error("Model is not ready for analysis (stage: {stage})")]
    NotReady { stage: AnalysisStage },

    #[error("Unknown {}: {id}", .kind.noun())]
    UnknownEntity { kind: EntityKind, id: String },
}

impl AnalysisError {
    /// Returns the stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Engine(err) => err.code(),
            AnalysisError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            AnalysisError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            AnalysisError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            AnalysisError::Storage(ModelStorageError::NotFound(_)) => ErrorCode::ModelNotFound,
            AnalysisError::Storage(_) => ErrorCode::StorageError,
            AnalysisError::NotReady { .. } => ErrorCode::AnalysisNotReady,
            AnalysisError::UnknownEntity { kind, .. } => match kind {
                EntityKind::Criterion => ErrorCode::CriterionNotFound,
                EntityKind::Alternative => ErrorCode::AlternativeNotFound,
                EntityKind::MatrixItem => ErrorCode::ValidationFailed,
            },
        }
    }
}

impl From<ModelError> for AnalysisError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(e) => AnalysisError::Validation(e),
            ModelError::Judgment(e) => AnalysisError::Engine(e),
            ModelError::UnknownCriterion(id) => AnalysisError::UnknownEntity {
                kind: EntityKind::Criterion,
                id: id.to_string(),
            },
            ModelError::UnknownAlternative(id) => AnalysisError::UnknownEntity {
                kind: EntityKind::Alternative,
                id: id.to_string(),
            },
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
