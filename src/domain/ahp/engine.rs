//! AHP Engine - Full pipeline from a decision model to a ranked result.

use serde::{Deserialize, Serialize};

use super::{
    Aggregator, AhpError, ConsistencyChecker, ConsistencyResult, DecisionModel, EntityKind,
    Matrix, MatrixBuilder, PriorityExtractor, MIN_COMPARABLE,
};
use crate::domain::foundation::{AlternativeId, CriterionId, ModelId, Timestamp};

/// Derived weight of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion_id: CriterionId,
    pub name: String,
    pub weight: f64,
}

/// Final standing of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative_id: AlternativeId,
    pub name: String,
    /// Local weight under each criterion, in criteria order.
    pub local_weights: Vec<f64>,
    pub score: f64,
    pub rank: usize,
}

/// Consistency of the alternative matrix for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionConsistency {
    pub criterion_id: CriterionId,
    pub name: String,
    pub result: ConsistencyResult,
}

/// Consistency metadata surfaced alongside the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Criteria comparison matrix.
    pub criteria: ConsistencyResult,
    /// Alternative matrices; empty when alternative checking is disabled.
    #[serde(default)]
    pub alternatives: Vec<CriterionConsistency>,
    /// True only if every checked matrix is consistent.
    pub is_consistent: bool,
}

impl ConsistencyReport {
    /// Alternative matrices that failed the check.
    pub fn inconsistent_alternatives(&self) -> impl Iterator<Item = &CriterionConsistency> {
        self.alternatives.iter().filter(|c| !c.result.is_consistent)
    }
}

/// Result bundle handed to rendering and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub model_id: ModelId,
    pub model_name: String,
    /// Criteria in model order.
    pub criteria_weights: Vec<CriterionWeight>,
    /// Alternatives in rank order.
    pub alternatives: Vec<AlternativeScore>,
    pub consistency: ConsistencyReport,
    pub computed_at: Timestamp,
}

impl AnalysisResult {
    /// The top-ranked alternative.
    pub fn winner(&self) -> Option<&AlternativeScore> {
        self.alternatives.first()
    }
}

/// Runs Builder, Extractor, Checker, and Aggregator over a decision model.
///
/// Stateless apart from its settings; safe to share across tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AhpEngine {
    checker: ConsistencyChecker,
    check_alternatives: bool,
}

impl Default for AhpEngine {
    fn default() -> Self {
        Self {
            checker: ConsistencyChecker::default(),
            check_alternatives: true,
        }
    }
}

impl AhpEngine {
    /// Creates an engine with the standard threshold and alternative checks enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `threshold` as the CR acceptability bound.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.checker = ConsistencyChecker::with_threshold(threshold);
        self
    }

    /// Enables or disables consistency checks on alternative matrices.
    pub fn check_alternative_consistency(mut self, enabled: bool) -> Self {
        self.check_alternatives = enabled;
        self
    }

    /// Returns the consistency checker in use.
    pub fn checker(&self) -> &ConsistencyChecker {
        &self.checker
    }

    /// Evaluates `model`.
    ///
    /// Pairs without a recorded judgment count as equal importance.
    ///
    /// # Errors
    /// - Fewer than two criteria or alternatives: `InsufficientEntities`
    /// - Any structural failure from the pipeline stages
    pub fn evaluate(&self, model: &DecisionModel) -> Result<AnalysisResult, AhpError> {
        if model.criteria.len() < MIN_COMPARABLE {
            return Err(AhpError::insufficient(
                EntityKind::Criterion,
                model.criteria.len(),
                MIN_COMPARABLE,
            ));
        }
        if model.alternatives.len() < MIN_COMPARABLE {
            return Err(AhpError::insufficient(
                EntityKind::Alternative,
                model.alternatives.len(),
                MIN_COMPARABLE,
            ));
        }

        let criterion_ids = model.criterion_ids();
        let alternative_ids = model.alternative_ids();

        let criteria_matrix = MatrixBuilder::build(&criterion_ids, |a, b| {
            model.judgments.criteria_value(a, b)
        })?;
        let (criteria_weights, criteria_consistency) = self.weigh(&criteria_matrix)?;

        let mut local_weights = Vec::with_capacity(criterion_ids.len());
        let mut alternative_consistency = Vec::new();
        for criterion in &model.criteria {
            let matrix = MatrixBuilder::build(&alternative_ids, |a, b| {
                model.judgments.alternative_value(&criterion.id, a, b)
            })?;
            let weights = PriorityExtractor::derive(&matrix)?.weights.into_inner();
            if self.check_alternatives {
                alternative_consistency.push(CriterionConsistency {
                    criterion_id: criterion.id,
                    name: criterion.name.clone(),
                    result: self.checker.check(&matrix, &weights)?,
                });
            }
            local_weights.push(weights);
        }

        let ranked = Aggregator::aggregate_and_rank(&criteria_weights, &local_weights)?;

        let alternatives = ranked
            .iter()
            .map(|r| {
                let alternative = &model.alternatives[r.alternative_index];
                AlternativeScore {
                    alternative_id: alternative.id,
                    name: alternative.name.clone(),
                    local_weights: local_weights
                        .iter()
                        .map(|w| w[r.alternative_index])
                        .collect(),
                    score: r.score,
                    rank: r.rank,
                }
            })
            .collect();

        let is_consistent = criteria_consistency.is_consistent
            && alternative_consistency
                .iter()
                .all(|c| c.result.is_consistent);

        Ok(AnalysisResult {
            model_id: model.id,
            model_name: model.name.clone(),
            criteria_weights: model
                .criteria
                .iter()
                .zip(&criteria_weights)
                .map(|(c, w)| CriterionWeight {
                    criterion_id: c.id,
                    name: c.name.clone(),
                    weight: *w,
                })
                .collect(),
            alternatives,
            consistency: ConsistencyReport {
                criteria: criteria_consistency,
                alternatives: alternative_consistency,
                is_consistent,
            },
            computed_at: Timestamp::now(),
        })
    }

    fn weigh(&self, matrix: &Matrix) -> Result<(Vec<f64>, ConsistencyResult), AhpError> {
        let weights = PriorityExtractor::derive(matrix)?.weights.into_inner();
        let consistency = self.checker.check(matrix, &weights)?;
        Ok((weights, consistency))
    }
}
