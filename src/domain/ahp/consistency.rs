//! Consistency Checker - Consistency Index and Ratio against Saaty's Random Index.

use serde::{Deserialize, Serialize};

use super::{AhpError, EntityKind, Matrix};

/// Saaty's Random Index for matrix orders 1 through 10.
///
/// Orders above 10 use the last entry.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Conventional acceptability threshold for the Consistency Ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Outcome of a consistency check. Inconsistency is a result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Dominant eigenvalue estimate.
    pub lambda_max: f64,
    /// Consistency Index.
    pub ci: f64,
    /// Random Index for this matrix order.
    pub ri: f64,
    /// Consistency Ratio.
    pub cr: f64,
    pub is_consistent: bool,
}

/// Looks up the Random Index for a matrix of order `n`, clamping past the table.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        _ => RANDOM_INDEX[n.min(RANDOM_INDEX.len()) - 1],
    }
}

/// Checks pairwise comparison matrices for transitive consistency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyChecker {
    threshold: f64,
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self {
            threshold: CONSISTENCY_THRESHOLD,
        }
    }
}

impl ConsistencyChecker {
    /// Creates a checker using the standard 0.10 threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with a custom CR threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the CR threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns true if `cr` is strictly below the threshold.
    pub fn is_acceptable(&self, cr: f64) -> bool {
        cr < self.threshold
    }

    /// Computes λmax, CI, RI, and CR for `matrix` given its priority `weights`.
    ///
    /// # Algorithm
    /// 1. `WS = M · w`
    /// 2. `CV[i] = WS[i] / w[i]`
    /// 3. `λmax = mean(CV)`
    /// 4. `CI = (λmax - n) / (n - 1)` for n > 1, else 0
    /// 5. `CR = CI / RI` when RI > 0, else 0
    ///
    /// # Edge Cases
    /// - n ≤ 2: always consistent with CR = 0
    /// - Empty matrix: `InsufficientEntities`
    /// - `weights.len() != n`: `DimensionMismatch`
    /// - A weight that is not strictly positive: `DegenerateMatrix`
    pub fn check(&self, matrix: &Matrix, weights: &[f64]) -> Result<ConsistencyResult, AhpError> {
        let n = matrix.order();
        if n == 0 {
            return Err(AhpError::insufficient(EntityKind::MatrixItem, 0, 1));
        }
        if weights.len() != n {
            return Err(AhpError::dimension_mismatch(
                "consistency weights",
                n,
                weights.len(),
            ));
        }
        if let Some(i) = weights.iter().position(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(AhpError::degenerate(format!(
                "weight {} is {}",
                i, weights[i]
            )));
        }

        let weighted_sums = matrix.multiply_vector(weights)?;
        let lambda_max = weighted_sums
            .iter()
            .zip(weights)
            .map(|(ws, w)| ws / w)
            .sum::<f64>()
            / n as f64;

        let ci = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let ri = random_index(n);

        if ri <= 0.0 {
            return Ok(ConsistencyResult {
                lambda_max,
                ci,
                ri,
                cr: 0.0,
                is_consistent: true,
            });
        }

        let cr = ci / ri;
        Ok(ConsistencyResult {
            lambda_max,
            ci,
            ri,
            cr,
            is_consistent: self.is_acceptable(cr),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::PriorityExtractor;

    fn check(rows: Vec<Vec<f64>>) -> ConsistencyResult {
        let m = Matrix::from_rows(rows).unwrap();
        let w = PriorityExtractor::derive(&m).unwrap().weights;
        ConsistencyChecker::new().check(&m, w.as_slice()).unwrap()
    }

    #[test]
    fn random_index_follows_saaty_table() {
        assert_eq!(random_index(1), 0.0);
        assert_eq!(random_index(2), 0.0);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(10), 1.49);
    }

    #[test]
    fn random_index_clamps_beyond_table() {
        assert_eq!(random_index(11), 1.49);
        assert_eq!(random_index(25), 1.49);
    }

    #[test]
    fn consistent_matrix_has_zero_cr() {
        let result = check(vec![
            vec![1.0, 3.0, 9.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![1.0 / 9.0, 1.0 / 3.0, 1.0],
        ]);

        assert!((result.lambda_max - 3.0).abs() < 1e-9);
        assert!(result.cr.abs() < 1e-9);
        assert_eq!(result.ri, 0.58);
        assert!(result.is_consistent);
    }

    #[test]
    fn intransitive_matrix_is_inconsistent() {
        let result = check(vec![
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ]);

        assert!(!result.is_consistent);
        assert!(result.cr > 1.0, "CR was {}", result.cr);
    }

    #[test]
    fn two_item_matrix_is_always_consistent() {
        let result = check(vec![vec![1.0, 9.0], vec![1.0 / 9.0, 1.0]]);
        assert_eq!(result.cr, 0.0);
        assert_eq!(result.ri, 0.0);
        assert!(result.is_consistent);
    }

    #[test]
    fn single_item_matrix_is_consistent() {
        let result = ConsistencyChecker::new()
            .check(&Matrix::identity(1), &[1.0])
            .unwrap();
        assert_eq!(result.ci, 0.0);
        assert_eq!(result.cr, 0.0);
        assert!(result.is_consistent);
    }

    #[test]
    fn threshold_boundary_is_not_acceptable() {
        let checker = ConsistencyChecker::new();
        assert!(checker.is_acceptable(0.0999));
        assert!(!checker.is_acceptable(0.10));
        assert!(!checker.is_acceptable(0.25));
    }

    #[test]
    fn custom_threshold_changes_verdict() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 5.0],
            vec![1.0 / 5.0, 1.0 / 5.0, 1.0],
        ])
        .unwrap();
        let w = PriorityExtractor::derive(&m).unwrap().weights;

        let strict = ConsistencyChecker::with_threshold(1e-6)
            .check(&m, w.as_slice())
            .unwrap();
        let lenient = ConsistencyChecker::with_threshold(1.0)
            .check(&m, w.as_slice())
            .unwrap();

        assert_eq!(strict.cr, lenient.cr);
        assert!(!strict.is_consistent);
        assert!(lenient.is_consistent);
    }

    #[test]
    fn check_rejects_weight_length_mismatch() {
        let result = ConsistencyChecker::new().check(&Matrix::identity(3), &[0.5, 0.5]);
        assert!(matches!(
            result,
            Err(AhpError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn check_rejects_zero_weight() {
        let result = ConsistencyChecker::new().check(&Matrix::identity(2), &[1.0, 0.0]);
        assert!(matches!(result, Err(AhpError::DegenerateMatrix { .. })));
    }

    #[test]
    fn check_rejects_empty_matrix() {
        let result = ConsistencyChecker::new().check(&Matrix::identity(0), &[]);
        assert!(matches!(result, Err(AhpError::InsufficientEntities { .. })));
    }
}
