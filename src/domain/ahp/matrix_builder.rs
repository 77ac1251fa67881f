//! Matrix Builder - Dense reciprocal comparison matrices from sparse judgments.

use std::fmt;

use super::judgment::is_valid_magnitude;
use super::{AhpError, Matrix};

/// Builds pairwise comparison matrices.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Builds the n×n comparison matrix for `items` in the given order.
    ///
    /// # Algorithm
    /// `value(a, b)` is queried once per unordered pair, for `i < j` only:
    /// `M[i][j] = value`, `M[j][i] = 1/value`, `M[i][i] = 1`.
    ///
    /// # Edge Cases
    /// - No items: 0×0 matrix
    /// - One item: 1×1 matrix `[[1]]`
    /// - Non-positive or non-finite value: `MalformedJudgment`
    pub fn build<T, F>(items: &[T], value: F) -> Result<Matrix, AhpError>
    where
        T: fmt::Display,
        F: Fn(&T, &T) -> f64,
    {
        let n = items.len();
        let mut matrix = Matrix::identity(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let v = value(&items[i], &items[j]);
                if !is_valid_magnitude(v) {
                    return Err(AhpError::malformed(&items[i], &items[j], v));
                }
                matrix.set(i, j, v);
                matrix.set(j, i, 1.0 / v);
            }
        }

        Ok(matrix)
    }
}
