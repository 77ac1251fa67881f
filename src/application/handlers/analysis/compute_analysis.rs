//! ComputeAnalysisHandler - Runs the AHP pipeline over a stored model.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::AnalysisError;
use crate::domain::ahp::{AhpEngine, AnalysisResult, ResultReport};
use crate::domain::foundation::{AnalysisStage, ModelId, Percentage, StateMachine};
use crate::ports::ModelStorage;

/// Command to compute the analysis for a model.
#[derive(Debug, Clone)]
pub struct ComputeAnalysisCommand {
    pub model_id: ModelId,
}

/// Result of a successful computation.
#[derive(Debug, Clone)]
pub struct ComputeAnalysisResult {
    pub analysis: AnalysisResult,
    pub report: ResultReport,
    pub stage: AnalysisStage,
    pub progress: Percentage,
}

/// Handler for computing AHP results.
///
/// Inconsistent matrices are logged as warnings and reported; they never
/// block the computation.
pub struct ComputeAnalysisHandler {
    storage: Arc<dyn ModelStorage>,
    engine: AhpEngine,
}

impl ComputeAnalysisHandler {
    pub fn new(storage: Arc<dyn ModelStorage>, engine: AhpEngine) -> Self {
        Self { storage, engine }
    }

    pub async fn handle(
        &self,
        cmd: ComputeAnalysisCommand,
    ) -> Result<ComputeAnalysisResult, AnalysisError> {
        // 1. Load model
        let model = self.storage.load(cmd.model_id).await?;

        // 2. Gate on stage
        let current = model.stage();
        let stage = current
            .transition_to(AnalysisStage::Computed)
            .map_err(|_| AnalysisError::NotReady { stage: current })?;

        debug!(
            model_id = %model.id,
            criteria = model.criteria.len(),
            alternatives = model.alternatives.len(),
            judgments = model.judgments.len(),
            stage = %current,
            "Computing analysis"
        );

        // 3. Evaluate
        let analysis = self.engine.evaluate(&model)?;

        // 4. Surface consistency
        let threshold = self.engine.checker().threshold();
        let criteria = &analysis.consistency.criteria;
        if !criteria.is_consistent {
            warn!(
                model_id = %model.id,
                cr = criteria.cr,
                threshold,
                "Criteria judgments are inconsistent"
            );
        }
        for failed in analysis.consistency.inconsistent_alternatives() {
            warn!(
                model_id = %model.id,
                criterion = %failed.name,
                cr = failed.result.cr,
                threshold,
                "Alternative judgments are inconsistent"
            );
        }

        if let Some(winner) = analysis.winner() {
            info!(
                model_id = %model.id,
                winner = %winner.name,
                score = winner.score,
                cr = criteria.cr,
                consistent = analysis.consistency.is_consistent,
                "Analysis computed"
            );
        }

        let report = ResultReport::from_result(&analysis);
        Ok(ComputeAnalysisResult {
            analysis,
            report,
            stage,
            progress: stage.progress(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryModelStorage;
    use crate::domain::ahp::DecisionModel;
    use crate::domain::foundation::ErrorCode;

    async fn storage_with(model: &DecisionModel) -> Arc<InMemoryModelStorage> {
        let storage = Arc::new(InMemoryModelStorage::new());
        storage.save(model).await.unwrap();
        storage
    }

    fn handler(storage: Arc<InMemoryModelStorage>) -> ComputeAnalysisHandler {
        ComputeAnalysisHandler::new(storage, AhpEngine::new())
    }

    fn supplier() -> DecisionModel {
        DecisionModel::builder("Supplier")
            .criteria(vec!["Cost", "Quality"])
            .alternatives(vec!["North", "South"])
            .compare_criteria("Cost", "Quality", 3.0)
            .compare_alternatives("Cost", "North", "South", 5.0)
            .compare_alternatives("Quality", "South", "North", 7.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn computes_result_and_report() {
        let model = supplier();
        let storage = storage_with(&model).await;

        let result = handler(storage)
            .handle(ComputeAnalysisCommand { model_id: model.id })
            .await
            .unwrap();

        assert_eq!(result.stage, AnalysisStage::Computed);
        assert_eq!(result.progress.value(), 100);
        assert_eq!(result.analysis.model_id, model.id);
        assert_eq!(result.report.ranking.len(), 2);
        assert_eq!(result.report.ranking[0].name, "North");
    }

    #[tokio::test]
    async fn partially_judged_model_still_computes() {
        let model = DecisionModel::builder("Draft")
            .criteria(vec!["Cost", "Quality"])
            .alternatives(vec!["North", "South"])
            .build()
            .unwrap();
        let storage = storage_with(&model).await;

        let result = handler(storage)
            .handle(ComputeAnalysisCommand { model_id: model.id })
            .await
            .unwrap();

        assert!(result.analysis.consistency.is_consistent);
    }

    #[tokio::test]
    async fn rejects_model_without_enough_alternatives() {
        let model = DecisionModel::builder("Thin")
            .criteria(vec!["Cost", "Quality"])
            .alternatives(vec!["North"])
            .build()
            .unwrap();
        let storage = storage_with(&model).await;

        let err = handler(storage)
            .handle(ComputeAnalysisCommand { model_id: model.id })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::NotReady {
                stage: AnalysisStage::CriteriaDefined
            }
        ));
        assert_eq!(err.code(), ErrorCode::AnalysisNotReady);
    }

    #[tokio::test]
    async fn missing_model_is_not_found() {
        let storage = Arc::new(InMemoryModelStorage::new());

        let err = handler(storage)
            .handle(ComputeAnalysisCommand {
                model_id: ModelId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ModelNotFound);
    }
}
