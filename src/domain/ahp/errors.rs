//! Error types for the AHP engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{
    AlternativeId, CriterionId, DomainError, ErrorCode, ValidationError,
};

/// Which entity list a cardinality check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Criterion,
    Alternative,
    MatrixItem,
}

impl EntityKind {
    /// Singular noun for one entity of this kind.
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Criterion => "criterion",
            EntityKind::Alternative => "alternative",
            EntityKind::MatrixItem => "matrix item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Criterion => "criteria",
            EntityKind::Alternative => "alternatives",
            EntityKind::MatrixItem => "matrix items",
        };
        write!(f, "{}", s)
    }
}

/// Failures raised by the numeric core.
///
/// All are local and deterministic; retrying with the same input cannot
/// succeed. An inconsistent matrix is not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("At least {required} {kind} are required, got {found}")]
    InsufficientEntities {
        kind: EntityKind,
        found: usize,
        required: usize,
    },

    #[error("Judgment {item_a} vs {item_b} must be a positive finite number, got {value}")]
    MalformedJudgment {
        item_a: String,
        item_b: String,
        value: f64,
    },

    #[error("Item {item} cannot be compared with itself")]
    SelfComparison { item: String },

    #[error("Degenerate matrix: {reason}")]
    DegenerateMatrix { reason: String },

    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl AhpError {
    /// Creates an insufficient entities error.
    pub fn insufficient(kind: EntityKind, found: usize, required: usize) -> Self {
        AhpError::InsufficientEntities {
            kind,
            found,
            required,
        }
    }

    /// Creates a malformed judgment error.
    pub fn malformed(item_a: impl ToString, item_b: impl ToString, value: f64) -> Self {
        AhpError::MalformedJudgment {
            item_a: item_a.to_string(),
            item_b: item_b.to_string(),
            value,
        }
    }

    /// Creates a degenerate matrix error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        AhpError::DegenerateMatrix {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        AhpError::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Returns the stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::InsufficientEntities { .. } => ErrorCode::InsufficientEntities,
            AhpError::MalformedJudgment { .. } | AhpError::SelfComparison { .. } => {
                ErrorCode::MalformedJudgment
            }
            AhpError::DegenerateMatrix { .. } => ErrorCode::DegenerateMatrix,
            AhpError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Errors raised while editing a decision model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Judgment(#[from] AhpError),

    #[error("Criterion not found: {0}")]
    UnknownCriterion(CriterionId),

    #[error("Alternative not found: {0}")]
    UnknownAlternative(AlternativeId),
}

impl ModelError {
    /// Returns the stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            ModelError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            ModelError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            ModelError::Judgment(err) => err.code(),
            ModelError::UnknownCriterion(_) => ErrorCode::CriterionNotFound,
            ModelError::UnknownAlternative(_) => ErrorCode::AlternativeNotFound,
        }
    }
}

impl From<ModelError> for DomainError {
    fn from(err: ModelError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
