//! Aggregator - Weighted synthesis of local priorities into a ranking.

use serde::{Deserialize, Serialize};

use super::{AhpError, EntityKind};

/// One alternative's global score and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Index into the alternative list that was aggregated.
    pub alternative_index: usize,
    pub score: f64,
    /// 1-based rank; 1 is the most preferred.
    pub rank: usize,
}

/// Combines criteria weights with per-criterion alternative weights.
pub struct Aggregator;

impl Aggregator {
    /// Computes `score[i] = Σ_k criteria_weights[k] · local_weights[k][i]`.
    ///
    /// Accumulation runs over criteria in list order starting from 0.0.
    ///
    /// # Edge Cases
    /// - No criteria: `InsufficientEntities`
    /// - `local_weights.len()` differs from the criteria count, or any inner
    ///   vector differs from the first: `DimensionMismatch`
    pub fn aggregate(
        criteria_weights: &[f64],
        local_weights: &[Vec<f64>],
    ) -> Result<Vec<f64>, AhpError> {
        if criteria_weights.is_empty() {
            return Err(AhpError::insufficient(EntityKind::Criterion, 0, 1));
        }
        if local_weights.len() != criteria_weights.len() {
            return Err(AhpError::dimension_mismatch(
                "local weight sets",
                criteria_weights.len(),
                local_weights.len(),
            ));
        }

        let m = local_weights[0].len();
        let mut scores = vec![0.0; m];
        for (wc, local) in criteria_weights.iter().zip(local_weights) {
            if local.len() != m {
                return Err(AhpError::dimension_mismatch(
                    "alternative weights",
                    m,
                    local.len(),
                ));
            }
            for (score, w) in scores.iter_mut().zip(local) {
                *score += wc * w;
            }
        }

        Ok(scores)
    }

    /// Orders `scores` descending and assigns ranks 1..m.
    ///
    /// Equal scores keep their input order.
    pub fn rank(scores: &[f64]) -> Vec<RankedAlternative> {
        let mut ranked: Vec<RankedAlternative> = scores
            .iter()
            .enumerate()
            .map(|(alternative_index, &score)| RankedAlternative {
                alternative_index,
                score,
                rank: 0,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        for (i, entry) in ranked.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        ranked
    }

    /// Aggregates and ranks in one step.
    pub fn aggregate_and_rank(
        criteria_weights: &[f64],
        local_weights: &[Vec<f64>],
    ) -> Result<Vec<RankedAlternative>, AhpError> {
        let scores = Self::aggregate(criteria_weights, local_weights)?;
        Ok(Self::rank(&scores))
    }
}
