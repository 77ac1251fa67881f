//! Pairwise judgments and the per-model judgment set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AhpError;
use crate::domain::foundation::{AlternativeId, CriterionId, SaatyScale};

/// Value used for a pair that has no recorded judgment yet.
pub const NO_PREFERENCE: f64 = 1.0;

/// One recorded comparison: how much more important `item_a` is than `item_b`.
///
/// A judgment for (A, B) with value v is equivalent to (B, A) with 1/v;
/// only one direction is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment<T> {
    pub item_a: T,
    pub item_b: T,
    pub value: f64,
}

impl<T: PartialEq + fmt::Display> PairwiseJudgment<T> {
    /// Creates a judgment, rejecting non-positive values and self-comparisons.
    pub fn new(item_a: T, item_b: T, value: f64) -> Result<Self, AhpError> {
        if item_a == item_b {
            return Err(AhpError::SelfComparison {
                item: item_a.to_string(),
            });
        }
        if !is_valid_magnitude(value) {
            return Err(AhpError::malformed(&item_a, &item_b, value));
        }
        Ok(Self {
            item_a,
            item_b,
            value,
        })
    }

    /// Creates a judgment from an exposed Saaty scale value.
    ///
    /// `favors_a` false records the reciprocal (B is preferred).
    pub fn from_scale(
        item_a: T,
        item_b: T,
        scale: SaatyScale,
        favors_a: bool,
    ) -> Result<Self, AhpError> {
        Self::new(item_a, item_b, scale.directed(favors_a))
    }

    /// Returns true if this judgment covers the unordered pair {a, b}.
    pub fn covers(&self, a: &T, b: &T) -> bool {
        (&self.item_a == a && &self.item_b == b) || (&self.item_a == b && &self.item_b == a)
    }

    /// Returns true if either side of the pair is `item`.
    pub fn involves(&self, item: &T) -> bool {
        &self.item_a == item || &self.item_b == item
    }

    /// Returns the judgment value oriented as `a` vs `b`, if this judgment covers the pair.
    pub fn oriented(&self, a: &T, b: &T) -> Option<f64> {
        if &self.item_a == a && &self.item_b == b {
            Some(self.value)
        } else if &self.item_a == b && &self.item_b == a {
            Some(1.0 / self.value)
        } else {
            None
        }
    }
}

/// Returns true for a usable judgment magnitude (strictly positive and finite).
pub fn is_valid_magnitude(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// An alternative-vs-alternative judgment scoped to one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedJudgment {
    pub criterion_id: CriterionId,
    #[serde(flatten)]
    pub judgment: PairwiseJudgment<AlternativeId>,
}

/// All judgments recorded for a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentSet {
    /// Criteria-vs-criteria judgments.
    #[serde(default)]
    pub criteria: Vec<PairwiseJudgment<CriterionId>>,
    /// Alternative-vs-alternative judgments, each scoped to a criterion.
    #[serde(default)]
    pub alternatives: Vec<ScopedJudgment>,
}

impl JudgmentSet {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a criteria judgment.
    ///
    /// Replaces any earlier judgment for the same pair in either direction.
    pub fn record_criteria(&mut self, judgment: PairwiseJudgment<CriterionId>) {
        self.criteria
            .retain(|existing| !existing.covers(&judgment.item_a, &judgment.item_b));
        self.criteria.push(judgment);
    }

    /// Records an alternative judgment under `criterion_id`, replacing the pair's old one.
    pub fn record_alternatives(
        &mut self,
        criterion_id: CriterionId,
        judgment: PairwiseJudgment<AlternativeId>,
    ) {
        self.alternatives.retain(|existing| {
            existing.criterion_id != criterion_id
                || !existing.judgment.covers(&judgment.item_a, &judgment.item_b)
        });
        self.alternatives.push(ScopedJudgment {
            criterion_id,
            judgment,
        });
    }

    /// Judgment value for criterion `a` vs `b`: v, 1/v, or [`NO_PREFERENCE`].
    pub fn criteria_value(&self, a: &CriterionId, b: &CriterionId) -> f64 {
        self.criteria
            .iter()
            .find_map(|j| j.oriented(a, b))
            .unwrap_or(NO_PREFERENCE)
    }

    /// Judgment value for alternative `a` vs `b` under `criterion_id`.
    pub fn alternative_value(
        &self,
        criterion_id: &CriterionId,
        a: &AlternativeId,
        b: &AlternativeId,
    ) -> f64 {
        self.alternatives
            .iter()
            .filter(|s| &s.criterion_id == criterion_id)
            .find_map(|s| s.judgment.oriented(a, b))
            .unwrap_or(NO_PREFERENCE)
    }

    /// Returns true if the criteria pair {a, b} has a recorded judgment.
    pub fn has_criteria_judgment(&self, a: &CriterionId, b: &CriterionId) -> bool {
        self.criteria.iter().any(|j| j.covers(a, b))
    }

    /// Returns true if the alternative pair {a, b} has a recorded judgment under `criterion_id`.
    pub fn has_alternative_judgment(
        &self,
        criterion_id: &CriterionId,
        a: &AlternativeId,
        b: &AlternativeId,
    ) -> bool {
        self.alternatives
            .iter()
            .any(|s| &s.criterion_id == criterion_id && s.judgment.covers(a, b))
    }

    /// Drops every judgment that mentions `criterion_id`.
    ///
    /// Alternative judgments scoped to the criterion go too.
    pub fn remove_criterion(&mut self, criterion_id: &CriterionId) {
        self.criteria.retain(|j| !j.involves(criterion_id));
        self.alternatives.retain(|s| &s.criterion_id != criterion_id);
    }

    /// Drops every alternative judgment that mentions `alternative_id`.
    pub fn remove_alternative(&mut self, alternative_id: &AlternativeId) {
        self.alternatives
            .retain(|s| !s.judgment.involves(alternative_id));
    }

    /// Total number of stored judgments.
    pub fn len(&self) -> usize {
        self.criteria.len() + self.alternatives.len()
    }

    /// Returns true if no judgments are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_values() {
        let (a, b) = (CriterionId::new(), CriterionId::new());
        assert!(matches!(
            PairwiseJudgment::new(a, b, 0.0),
            Err(AhpError::MalformedJudgment { .. })
        ));
        assert!(matches!(
            PairwiseJudgment::new(a, b, -3.0),
            Err(AhpError::MalformedJudgment { .. })
        ));
        assert!(matches!(
            PairwiseJudgment::new(a, b, f64::NAN),
            Err(AhpError::MalformedJudgment { .. })
        ));
    }

    #[test]
    fn new_rejects_self_comparison() {
        let a = CriterionId::new();
        assert!(matches!(
            PairwiseJudgment::new(a, a, 3.0),
            Err(AhpError::SelfComparison { .. })
        ));
    }

    #[test]
    fn from_scale_records_reciprocal_when_b_is_favored() {
        let (a, b) = (AlternativeId::new(), AlternativeId::new());
        let j = PairwiseJudgment::from_scale(a, b, SaatyScale::Strong, false).unwrap();
        assert!((j.value - 0.2).abs() < 1e-15);
    }

    #[test]
    fn criteria_value_derives_reverse_direction() {
        let (a, b) = (CriterionId::new(), CriterionId::new());
        let mut set = JudgmentSet::new();
        set.record_criteria(PairwiseJudgment::new(a, b, 5.0).unwrap());

        assert_eq!(set.criteria_value(&a, &b), 5.0);
        assert!((set.criteria_value(&b, &a) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn missing_judgment_defaults_to_no_preference() {
        let set = JudgmentSet::new();
        assert_eq!(
            set.criteria_value(&CriterionId::new(), &CriterionId::new()),
            NO_PREFERENCE
        );
    }

    #[test]
    fn record_replaces_judgment_entered_in_opposite_direction() {
        let (a, b) = (CriterionId::new(), CriterionId::new());
        let mut set = JudgmentSet::new();
        set.record_criteria(PairwiseJudgment::new(a, b, 3.0).unwrap());
        set.record_criteria(PairwiseJudgment::new(b, a, 7.0).unwrap());

        assert_eq!(set.criteria.len(), 1);
        assert_eq!(set.criteria_value(&b, &a), 7.0);
    }

    #[test]
    fn alternative_judgments_are_scoped_by_criterion() {
        let (cost, quality) = (CriterionId::new(), CriterionId::new());
        let (x, y) = (AlternativeId::new(), AlternativeId::new());
        let mut set = JudgmentSet::new();
        set.record_alternatives(cost, PairwiseJudgment::new(x, y, 9.0).unwrap());
        set.record_alternatives(quality, PairwiseJudgment::new(x, y, 3.0).unwrap());

        assert_eq!(set.alternative_value(&cost, &x, &y), 9.0);
        assert_eq!(set.alternative_value(&quality, &x, &y), 3.0);
        assert_eq!(set.alternatives.len(), 2);
    }

    #[test]
    fn remove_criterion_cascades_to_scoped_judgments() {
        let (cost, quality) = (CriterionId::new(), CriterionId::new());
        let (x, y) = (AlternativeId::new(), AlternativeId::new());
        let mut set = JudgmentSet::new();
        set.record_criteria(PairwiseJudgment::new(cost, quality, 3.0).unwrap());
        set.record_alternatives(cost, PairwiseJudgment::new(x, y, 9.0).unwrap());
        set.record_alternatives(quality, PairwiseJudgment::new(x, y, 3.0).unwrap());

        set.remove_criterion(&cost);

        assert!(set.criteria.is_empty());
        assert_eq!(set.alternatives.len(), 1);
        assert!(!set.has_alternative_judgment(&cost, &x, &y));
        assert!(set.has_alternative_judgment(&quality, &y, &x));
    }

    #[test]
    fn remove_alternative_drops_pairs_touching_it() {
        let cost = CriterionId::new();
        let (x, y, z) = (AlternativeId::new(), AlternativeId::new(), AlternativeId::new());
        let mut set = JudgmentSet::new();
        set.record_alternatives(cost, PairwiseJudgment::new(x, y, 3.0).unwrap());
        set.record_alternatives(cost, PairwiseJudgment::new(y, z, 5.0).unwrap());

        set.remove_alternative(&x);

        assert_eq!(set.len(), 1);
        assert!(set.has_alternative_judgment(&cost, &y, &z));
    }

    #[test]
    fn scoped_judgment_serializes_flat() {
        let cost = CriterionId::new();
        let mut set = JudgmentSet::new();
        set.record_alternatives(
            cost,
            PairwiseJudgment::new(AlternativeId::new(), AlternativeId::new(), 3.0).unwrap(),
        );
        let json = serde_json::to_value(&set).unwrap();
        let entry = &json["alternatives"][0];
        assert!(entry.get("criterion_id").is_some());
        assert_eq!(entry["value"], 3.0);
    }
}
