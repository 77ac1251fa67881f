//! AnalysisStage enum for tracking how far a decision model has progressed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Percentage, StateMachine};

/// Progress of one AHP analysis run.
///
/// Stages are ordered; a model's stage is derived from its content
/// (entity counts and recorded judgments) rather than stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    #[default]
    Empty,
    CriteriaDefined,
    AlternativesDefined,
    CriteriaJudged,
    AlternativesJudged,
    Computed,
}

impl AnalysisStage {
    /// Progress shown to the user for this stage.
    pub fn progress(&self) -> Percentage {
        let value = match self {
            AnalysisStage::Empty => 10,
            AnalysisStage::CriteriaDefined => 30,
            AnalysisStage::AlternativesDefined => 50,
            AnalysisStage::CriteriaJudged => 70,
            AnalysisStage::AlternativesJudged => 90,
            AnalysisStage::Computed => 100,
        };
        Percentage::new(value)
    }

    /// Returns true once both entity lists meet the minimum cardinality.
    ///
    /// Missing judgments default to equal importance, so computation does
    /// not wait for every pair to be judged.
    pub fn can_compute(&self) -> bool {
        self.can_transition_to(&AnalysisStage::Computed)
    }
}

impl StateMachine for AnalysisStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AnalysisStage::*;
        matches!(
            (self, target),
            (Empty, CriteriaDefined)
                | (CriteriaDefined, AlternativesDefined)
                | (AlternativesDefined, CriteriaJudged)
                | (AlternativesDefined, Computed)
                | (CriteriaJudged, AlternativesJudged)
                | (CriteriaJudged, Computed)
                | (AlternativesJudged, Computed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AnalysisStage::*;
        match self {
            Empty => vec![CriteriaDefined],
            CriteriaDefined => vec![AlternativesDefined],
            AlternativesDefined => vec![CriteriaJudged, Computed],
            CriteriaJudged => vec![AlternativesJudged, Computed],
            AlternativesJudged => vec![Computed],
            Computed => vec![],
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStage::Empty => "Empty",
            AnalysisStage::CriteriaDefined => "Criteria Defined",
            AnalysisStage::AlternativesDefined => "Alternatives Defined",
            AnalysisStage::CriteriaJudged => "Criteria Judged",
            AnalysisStage::AlternativesJudged => "Alternatives Judged",
            AnalysisStage::Computed => "Computed",
        };
        write!(f, "{}", s)
    }
}
