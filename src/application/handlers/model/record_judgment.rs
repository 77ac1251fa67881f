//! RecordJudgmentHandler - Command handler for recording pairwise judgments.

use std::sync::Arc;
use tracing::debug;

use crate::application::AnalysisError;
use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::{
    describe_judgment, AlternativeId, AnalysisStage, CriterionId, ModelId, Percentage,
    SaatyScale,
};
use crate::ports::ModelStorage;

/// Which pair a judgment compares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JudgmentSubject {
    /// Criterion `first` vs criterion `second`.
    Criteria {
        first: CriterionId,
        second: CriterionId,
    },
    /// Alternative `first` vs alternative `second`, under `criterion`.
    Alternatives {
        criterion: CriterionId,
        first: AlternativeId,
        second: AlternativeId,
    },
}

/// Command to record one judgment.
///
/// `scale` is the raw value from the user (1, 3, 5, 7, or 9);
/// `favors_first` false records the reciprocal.
#[derive(Debug, Clone)]
pub struct RecordJudgmentCommand {
    pub model_id: ModelId,
    pub subject: JudgmentSubject,
    pub scale: u8,
    pub favors_first: bool,
}

/// Result of a recorded judgment.
#[derive(Debug, Clone)]
pub struct RecordJudgmentResult {
    pub model: DecisionModel,
    pub stage: AnalysisStage,
    pub progress: Percentage,
}

/// Handler for recording judgments.
pub struct RecordJudgmentHandler {
    storage: Arc<dyn ModelStorage>,
}

impl RecordJudgmentHandler {
    pub fn new(storage: Arc<dyn ModelStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: RecordJudgmentCommand,
    ) -> Result<RecordJudgmentResult, AnalysisError> {
        // 1. Validate scale before touching storage
        let scale = SaatyScale::try_from_value(cmd.scale)?;
        let value = scale.directed(cmd.favors_first);

        // 2. Load model
        let mut model = self.storage.load(cmd.model_id).await?;

        // 3. Upsert judgment
        match cmd.subject {
            JudgmentSubject::Criteria { first, second } => {
                model.record_criteria_judgment(first, second, value)?;
            }
            JudgmentSubject::Alternatives {
                criterion,
                first,
                second,
            } => {
                model.record_alternative_judgment(criterion, first, second, value)?;
            }
        }

        // 4. Persist
        self.storage.save(&model).await?;

        let stage = model.stage();
        debug!(
            model_id = %model.id,
            scale = %scale,
            value = %describe_judgment(value),
            stage = %stage,
            "Recorded judgment"
        );

        Ok(RecordJudgmentResult {
            model,
            stage,
            progress: stage.progress(),
        })
    }
}
