//! Dense square matrix and the small amount of linear algebra AHP needs.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Square matrix of reals, stored row-major.
///
/// Serializes as a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct Matrix {
    order: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates an `order`×`order` matrix with ones on the diagonal and zeros elsewhere.
    pub fn identity(order: usize) -> Self {
        let mut values = vec![0.0; order * order];
        for i in 0..order {
            values[i * order + i] = 1.0;
        }
        Self { order, values }
    }

    /// Creates a matrix from rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let order = rows.len();
        let mut values = Vec::with_capacity(order * order);
        for row in rows {
            if row.len() != order {
                return Err(AhpError::dimension_mismatch("matrix row", order, row.len()));
            }
            values.extend(row);
        }
        Ok(Self { order, values })
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns true for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.order && j < self.order, "matrix index out of bounds");
        self.values[i * self.order + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.order + j] = value;
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.order, "matrix row out of bounds");
        &self.values[i * self.order..(i + 1) * self.order]
    }

    /// Returns all rows as owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.order).map(|i| self.row(i).to_vec()).collect()
    }

    /// Sum of each column: `S[j] = Σ_i M[i][j]`.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.order];
        for i in 0..self.order {
            for (j, sum) in sums.iter_mut().enumerate() {
                *sum += self.get(i, j);
            }
        }
        sums
    }

    /// Matrix-vector product `M · v`.
    pub fn multiply_vector(&self, vector: &[f64]) -> Result<Vec<f64>, AhpError> {
        if vector.len() != self.order {
            return Err(AhpError::dimension_mismatch(
                "matrix-vector product",
                self.order,
                vector.len(),
            ));
        }
        Ok((0..self.order)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(vector)
                    .map(|(m, v)| m * v)
                    .sum::<f64>()
            })
            .collect())
    }

    /// Returns true if `M[i][i] = 1` and `M[i][j]·M[j][i] = 1` within `tolerance`.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        (0..self.order).all(|i| {
            (self.get(i, i) - 1.0).abs() <= tolerance
                && (i + 1..self.order)
                    .all(|j| (self.get(i, j) * self.get(j, i) - 1.0).abs() <= tolerance)
        })
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}
