//! Decision Model - Criteria, alternatives, and the judgments between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{JudgmentSet, ModelError, PairwiseJudgment};
use crate::domain::foundation::{
    AlternativeId, AnalysisStage, CriterionId, ModelId, Timestamp, ValidationError,
};

/// Minimum number of criteria and of alternatives for a meaningful comparison.
pub const MIN_COMPARABLE: usize = 2;

/// A criterion the alternatives are judged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
}

/// A candidate being ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
}

/// One-level AHP hierarchy: goal, criteria, alternatives.
///
/// Entity order is insertion order and is significant: it fixes matrix row
/// order and the tie-break in rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionModel {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub judgments: JudgmentSet,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

impl DecisionModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = non_empty("name", name)?;
        let now = Timestamp::now();
        Ok(Self {
            id: ModelId::new(),
            name,
            criteria: Vec::new(),
            alternatives: Vec::new(),
            judgments: JudgmentSet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a builder for constructing a model by entity name.
    pub fn builder(name: impl Into<String>) -> DecisionModelBuilder {
        DecisionModelBuilder::new(name)
    }

    // ─────────────────────────────────────────────────────────────────
    // Criteria
    // ─────────────────────────────────────────────────────────────────

    /// Appends a criterion, rejecting empty or duplicate names.
    pub fn add_criterion(&mut self, name: impl Into<String>) -> Result<CriterionId, ModelError> {
        let name = non_empty("criterion_name", name)?;
        if self.criteria.iter().any(|c| c.name == name) {
            return Err(duplicate("criterion_name", &name).into());
        }
        let id = CriterionId::new();
        self.criteria.push(Criterion { id, name });
        self.touch();
        Ok(id)
    }

    /// Renames a criterion; its id and judgments are unchanged.
    pub fn rename_criterion(
        &mut self,
        id: &CriterionId,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let name = non_empty("criterion_name", name)?;
        if self.criteria.iter().any(|c| &c.id != id && c.name == name) {
            return Err(duplicate("criterion_name", &name).into());
        }
        let criterion = self
            .criteria
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(ModelError::UnknownCriterion(*id))?;
        criterion.name = name;
        self.touch();
        Ok(())
    }

    /// Removes a criterion and every judgment that refers to it.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Result<Criterion, ModelError> {
        let index = self
            .criteria
            .iter()
            .position(|c| &c.id == id)
            .ok_or(ModelError::UnknownCriterion(*id))?;
        let removed = self.criteria.remove(index);
        self.judgments.remove_criterion(id);
        self.touch();
        Ok(removed)
    }

    /// Looks up a criterion by id.
    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| &c.id == id)
    }

    /// Looks up a criterion by name.
    pub fn criterion_named(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    // ─────────────────────────────────────────────────────────────────
    // Alternatives
    // ─────────────────────────────────────────────────────────────────

    /// Appends an alternative, rejecting empty or duplicate names.
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
    ) -> Result<AlternativeId, ModelError> {
        let name = non_empty("alternative_name", name)?;
        if self.alternatives.iter().any(|a| a.name == name) {
            return Err(duplicate("alternative_name", &name).into());
        }
        let id = AlternativeId::new();
        self.alternatives.push(Alternative { id, name });
        self.touch();
        Ok(id)
    }

    /// Renames an alternative; its id and judgments are unchanged.
    pub fn rename_alternative(
        &mut self,
        id: &AlternativeId,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let name = non_empty("alternative_name", name)?;
        if self.alternatives.iter().any(|a| &a.id != id && a.name == name) {
            return Err(duplicate("alternative_name", &name).into());
        }
        let alternative = self
            .alternatives
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(ModelError::UnknownAlternative(*id))?;
        alternative.name = name;
        self.touch();
        Ok(())
    }

    /// Removes an alternative and every judgment that refers to it.
    pub fn remove_alternative(&mut self, id: &AlternativeId) -> Result<Alternative, ModelError> {
        let index = self
            .alternatives
            .iter()
            .position(|a| &a.id == id)
            .ok_or(ModelError::UnknownAlternative(*id))?;
        let removed = self.alternatives.remove(index);
        self.judgments.remove_alternative(id);
        self.touch();
        Ok(removed)
    }

    /// Looks up an alternative by id.
    pub fn alternative(&self, id: &AlternativeId) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| &a.id == id)
    }

    /// Looks up an alternative by name.
    pub fn alternative_named(&self, name: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.name == name)
    }

    // ─────────────────────────────────────────────────────────────────
    // Judgments
    // ─────────────────────────────────────────────────────────────────

    /// Records how much more important criterion `a` is than `b`.
    pub fn record_criteria_judgment(
        &mut self,
        a: CriterionId,
        b: CriterionId,
        value: f64,
    ) -> Result<(), ModelError> {
        for id in [&a, &b] {
            if self.criterion(id).is_none() {
                return Err(ModelError::UnknownCriterion(*id));
            }
        }
        let judgment = PairwiseJudgment::new(a, b, value)?;
        self.judgments.record_criteria(judgment);
        self.touch();
        Ok(())
    }

    /// Records how much more preferred alternative `a` is than `b` under `criterion`.
    pub fn record_alternative_judgment(
        &mut self,
        criterion: CriterionId,
        a: AlternativeId,
        b: AlternativeId,
        value: f64,
    ) -> Result<(), ModelError> {
        if self.criterion(&criterion).is_none() {
            return Err(ModelError::UnknownCriterion(criterion));
        }
        for id in [&a, &b] {
            if self.alternative(id).is_none() {
                return Err(ModelError::UnknownAlternative(*id));
            }
        }
        let judgment = PairwiseJudgment::new(a, b, value)?;
        self.judgments.record_alternatives(criterion, judgment);
        self.touch();
        Ok(())
    }

    /// Criterion ids in model order.
    pub fn criterion_ids(&self) -> Vec<CriterionId> {
        self.criteria.iter().map(|c| c.id).collect()
    }

    /// Alternative ids in model order.
    pub fn alternative_ids(&self) -> Vec<AlternativeId> {
        self.alternatives.iter().map(|a| a.id).collect()
    }

    /// Returns true if every criteria pair has a recorded judgment.
    pub fn criteria_fully_judged(&self) -> bool {
        all_pairs(&self.criteria, |a, b| {
            self.judgments.has_criteria_judgment(&a.id, &b.id)
        })
    }

    /// Returns true if every alternative pair is judged under every criterion.
    pub fn alternatives_fully_judged(&self) -> bool {
        self.criteria.iter().all(|c| {
            all_pairs(&self.alternatives, |a, b| {
                self.judgments.has_alternative_judgment(&c.id, &a.id, &b.id)
            })
        })
    }

    /// Analysis stage implied by the current content.
    ///
    /// `Computed` is never derived; it is reached by running the engine.
    pub fn stage(&self) -> AnalysisStage {
        if self.criteria.len() < MIN_COMPARABLE {
            AnalysisStage::Empty
        } else if self.alternatives.len() < MIN_COMPARABLE {
            AnalysisStage::CriteriaDefined
        } else if !self.criteria_fully_judged() {
            AnalysisStage::AlternativesDefined
        } else if !self.alternatives_fully_judged() {
            AnalysisStage::CriteriaJudged
        } else {
            AnalysisStage::AlternativesJudged
        }
    }

    /// Checks a model that did not come through the editing methods.
    ///
    /// Deserialized models bypass `add_*` and `record_*`, so this re-applies
    /// their rules: non-empty unique names, unique ids, judgments that point at
    /// existing entities, no self-comparisons, positive finite values, and at
    /// most one judgment per unordered pair in each scope.
    pub fn validate(&self) -> Result<(), ModelError> {
        non_empty("name", self.name.as_str())?;
        check_entities(
            "criteria",
            self.criteria.iter().map(|c| (c.id, c.name.as_str())),
        )?;
        check_entities(
            "alternatives",
            self.alternatives.iter().map(|a| (a.id, a.name.as_str())),
        )?;

        for (i, judgment) in self.judgments.criteria.iter().enumerate() {
            for id in [&judgment.item_a, &judgment.item_b] {
                if self.criterion(id).is_none() {
                    return Err(ModelError::UnknownCriterion(*id));
                }
            }
            PairwiseJudgment::new(judgment.item_a, judgment.item_b, judgment.value)?;
            if self.judgments.criteria[..i]
                .iter()
                .any(|earlier| earlier.covers(&judgment.item_a, &judgment.item_b))
            {
                return Err(repeated_pair(&judgment.item_a, &judgment.item_b).into());
            }
        }

        for (i, scoped) in self.judgments.alternatives.iter().enumerate() {
            if self.criterion(&scoped.criterion_id).is_none() {
                return Err(ModelError::UnknownCriterion(scoped.criterion_id));
            }
            let judgment = &scoped.judgment;
            for id in [&judgment.item_a, &judgment.item_b] {
                if self.alternative(id).is_none() {
                    return Err(ModelError::UnknownAlternative(*id));
                }
            }
            PairwiseJudgment::new(judgment.item_a, judgment.item_b, judgment.value)?;
            if self.judgments.alternatives[..i].iter().any(|earlier| {
                earlier.criterion_id == scoped.criterion_id
                    && earlier.judgment.covers(&judgment.item_a, &judgment.item_b)
            }) {
                return Err(repeated_pair(&judgment.item_a, &judgment.item_b).into());
            }
        }

        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

fn all_pairs<T>(items: &[T], judged: impl Fn(&T, &T) -> bool) -> bool {
    (0..items.len()).all(|i| ((i + 1)..items.len()).all(|j| judged(&items[i], &items[j])))
}

fn non_empty(field: &str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn check_entities<'a, I>(
    field: &str,
    entities: impl Iterator<Item = (I, &'a str)>,
) -> Result<(), ValidationError>
where
    I: PartialEq + fmt::Display,
{
    let mut seen: Vec<(I, &str)> = Vec::new();
    for (id, name) in entities {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if seen.iter().any(|(other, _)| *other == id) {
            return Err(ValidationError::invalid_format(
                field,
                format!("id {} is used more than once", id),
            ));
        }
        if seen.iter().any(|(_, other)| *other == name) {
            return Err(duplicate(field, name));
        }
        seen.push((id, name));
    }
    Ok(())
}

fn repeated_pair(a: &impl fmt::Display, b: &impl fmt::Display) -> ValidationError {
    ValidationError::invalid_format(
        "judgments",
        format!("pair {} / {} is judged more than once", a, b),
    )
}

fn duplicate(field: &str, name: &str) -> ValidationError {
    ValidationError::invalid_format(field, format!("'{}' is already used", name))
}

/// Judgment recorded by entity name, resolved at build time.
#[derive(Debug, Clone)]
enum NamedJudgment {
    Criteria {
        a: String,
        b: String,
        value: f64,
    },
    Alternatives {
        criterion: String,
        a: String,
        b: String,
        value: f64,
    },
}

/// Builder for constructing DecisionModel instances by entity name.
#[derive(Debug, Clone)]
pub struct DecisionModelBuilder {
    name: String,
    criteria: Vec<String>,
    alternatives: Vec<String>,
    judgments: Vec<NamedJudgment>,
}

impl DecisionModelBuilder {
    /// Creates a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criteria: Vec::new(),
            alternatives: Vec::new(),
            judgments: Vec::new(),
        }
    }

    /// Sets the criteria.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a criteria judgment: `a` is `value` times as important as `b`.
    pub fn compare_criteria(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        value: f64,
    ) -> Self {
        self.judgments.push(NamedJudgment::Criteria {
            a: a.into(),
            b: b.into(),
            value,
        });
        self
    }

    /// Adds an alternative judgment under `criterion`.
    pub fn compare_alternatives(
        mut self,
        criterion: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
        value: f64,
    ) -> Self {
        self.judgments.push(NamedJudgment::Alternatives {
            criterion: criterion.into(),
            a: a.into(),
            b: b.into(),
            value,
        });
        self
    }

    /// Builds the model, resolving names to ids.
    pub fn build(self) -> Result<DecisionModel, ModelError> {
        let mut model = DecisionModel::new(self.name)?;
        for name in self.criteria {
            model.add_criterion(name)?;
        }
        for name in self.alternatives {
            model.add_alternative(name)?;
        }

        for judgment in self.judgments {
            match judgment {
                NamedJudgment::Criteria { a, b, value } => {
                    let a = resolve_criterion(&model, &a)?;
                    let b = resolve_criterion(&model, &b)?;
                    model.record_criteria_judgment(a, b, value)?;
                }
                NamedJudgment::Alternatives {
                    criterion,
                    a,
                    b,
                    value,
                } => {
                    let c = resolve_criterion(&model, &criterion)?;
                    let a = resolve_alternative(&model, &a)?;
                    let b = resolve_alternative(&model, &b)?;
                    model.record_alternative_judgment(c, a, b, value)?;
                }
            }
        }

        Ok(model)
    }
}

fn resolve_criterion(model: &DecisionModel, name: &str) -> Result<CriterionId, ValidationError> {
    model
        .criterion_named(name)
        .map(|c| c.id)
        .ok_or_else(|| {
            ValidationError::invalid_format("criterion", format!("unknown criterion '{}'", name))
        })
}

fn resolve_alternative(
    model: &DecisionModel,
    name: &str,
) -> Result<AlternativeId, ValidationError> {
    model
        .alternative_named(name)
        .map(|a| a.id)
        .ok_or_else(|| {
            ValidationError::invalid_format(
                "alternative",
                format!("unknown alternative '{}'", name),
            )
        })
}
