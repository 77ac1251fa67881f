//! Priority Vector Extractor - Column-normalization / row-average weights.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::{AhpError, EntityKind, Matrix};

/// Tolerance for "weights sum to one".
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Normalized, non-negative weights, one per compared item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Uniform weights without matrix math: `[1.0]` for a single item, empty for none.
    pub fn trivial(len: usize) -> Self {
        match len {
            0 => Self(Vec::new()),
            _ => Self(vec![1.0 / len as f64; len]),
        }
    }

    /// Returns the weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the vector, returning the weights.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns true if the weights sum to 1 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE
    }
}

impl Index<usize> for PriorityVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Output of priority derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityDerivation {
    /// Row averages of the normalized matrix.
    pub weights: PriorityVector,
    /// `N[i][j] = M[i][j] / S[j]`.
    pub normalized: Matrix,
}

/// Derives priority vectors from comparison matrices.
pub struct PriorityExtractor;

impl PriorityExtractor {
    /// Derives the priority vector of `matrix`.
    ///
    /// # Algorithm
    /// 1. Column sums `S[j] = Σ_i M[i][j]`
    /// 2. Normalize `N[i][j] = M[i][j] / S[j]`
    /// 3. Weight `w[i] = (Σ_j N[i][j]) / n`
    ///
    /// # Edge Cases
    /// - n < 2: `InsufficientEntities` (use [`PriorityVector::trivial`] instead)
    /// - Any column sum not strictly positive: `DegenerateMatrix`
    pub fn derive(matrix: &Matrix) -> Result<PriorityDerivation, AhpError> {
        let n = matrix.order();
        if n < 2 {
            return Err(AhpError::insufficient(EntityKind::MatrixItem, n, 2));
        }

        let sums = matrix.column_sums();
        if let Some(j) = sums.iter().position(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(AhpError::degenerate(format!(
                "column {} sums to {}",
                j, sums[j]
            )));
        }

        let rows = (0..n)
            .map(|i| {
                matrix
                    .row(i)
                    .iter()
                    .zip(&sums)
                    .map(|(m, s)| m / s)
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>();

        let weights = rows
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        Ok(PriorityDerivation {
            weights: PriorityVector(weights),
            normalized: Matrix::from_rows(rows)?,
        })
    }

    /// Like [`derive`](Self::derive), but returns the trivial vector for fewer than two items.
    pub fn derive_or_trivial(matrix: &Matrix) -> Result<PriorityVector, AhpError> {
        if matrix.order() < 2 {
            return Ok(PriorityVector::trivial(matrix.order()));
        }
        Ok(Self::derive(matrix)?.weights)
    }
}
