//! End-to-end runs of the AHP pipeline, from judgments to a ranked report.

use std::path::PathBuf;
use std::sync::Arc;

use ahp_engine::adapters::{read_model_file, FileModelStorage, InMemoryModelStorage};
use ahp_engine::application::{
    AnalysisError, ComputeAnalysisCommand, ComputeAnalysisHandler, JudgmentSubject,
    RecordJudgmentCommand, RecordJudgmentHandler,
};
use ahp_engine::domain::ahp::{
    Aggregator, AhpEngine, AhpError, ConsistencyChecker, DecisionModel, EntityKind,
    MatrixBuilder, PriorityExtractor,
};
use ahp_engine::domain::foundation::{AnalysisStage, ErrorCode};
use ahp_engine::ports::{ModelStorage, ModelStorageError};
use tempfile::TempDir;

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/supplier.yaml")
}

// ════════════════════════════════════════════════════════════════════════════════
// Reference scenarios
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn consistent_criteria_yield_closed_form_weights() {
    let criteria = ["Cost", "Quality", "Speed"];
    let m = MatrixBuilder::build(&criteria, |a, b| match (*a, *b) {
        ("Cost", "Quality") => 3.0,
        ("Quality", "Speed") => 3.0,
        ("Cost", "Speed") => 9.0,
        _ => 1.0,
    })
    .unwrap();

    let derived = PriorityExtractor::derive(&m).unwrap();
    let result = ConsistencyChecker::new()
        .check(&m, derived.weights.as_slice())
        .unwrap();

    let w = derived.weights.as_slice();
    assert!((w[0] - 0.69).abs() < 0.01);
    assert!((w[1] - 0.23).abs() < 0.01);
    assert!((w[2] - 0.08).abs() < 0.01);
    assert!(result.is_consistent);
    assert!(result.cr.abs() < 1e-9);
}

#[test]
fn two_alternatives_yield_five_to_one_split() {
    let m = MatrixBuilder::build(&["A", "B"], |_, _| 5.0).unwrap();
    let w = PriorityExtractor::derive(&m).unwrap().weights;

    assert!((w[0] - 5.0 / 6.0).abs() < 1e-12);
    assert!((w[1] - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn intransitive_judgments_are_flagged() {
    let m = MatrixBuilder::build(&["A", "B", "C"], |a, b| match (*a, *b) {
        ("A", "B") => 9.0,
        ("B", "C") => 9.0,
        ("A", "C") => 1.0 / 9.0,
        _ => 1.0,
    })
    .unwrap();

    let derived = PriorityExtractor::derive(&m).unwrap();
    let result = ConsistencyChecker::new()
        .check(&m, derived.weights.as_slice())
        .unwrap();

    assert!(!result.is_consistent);
    assert!(result.cr > 0.10 * 10.0, "CR was {}", result.cr);
}

#[test]
fn equal_scores_keep_original_order() {
    let ranked =
        Aggregator::aggregate_and_rank(&[0.6, 0.4], &[vec![0.7, 0.3], vec![0.2, 0.8]]).unwrap();

    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].alternative_index, 0);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].alternative_index, 1);
    assert_eq!(ranked[1].rank, 2);
}

// ════════════════════════════════════════════════════════════════════════════════
// Whole models
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn demo_model_ranks_north_first_and_flags_speed() {
    let model = read_model_file(&demo_path()).await.unwrap();
    let result = AhpEngine::new().evaluate(&model).unwrap();

    let order: Vec<&str> = result.alternatives.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(order, vec!["North", "East", "South"]);
    assert!(result.consistency.criteria.is_consistent);
    assert!(!result.consistency.is_consistent);

    let failed: Vec<&str> = result
        .consistency
        .inconsistent_alternatives()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(failed, vec!["Speed"]);
}

#[test]
fn engine_rejects_too_few_criteria() {
    let model = DecisionModel::builder("Thin")
        .criteria(vec!["Cost"])
        .alternatives(vec!["A", "B"])
        .build()
        .unwrap();

    assert_eq!(
        AhpEngine::new().evaluate(&model),
        Err(AhpError::insufficient(EntityKind::Criterion, 1, 2))
    );
}

#[tokio::test]
async fn judgments_recorded_through_handlers_drive_the_ranking() {
    let model = DecisionModel::builder("Laptop")
        .criteria(vec!["Price", "Battery"])
        .alternatives(vec!["Light", "Heavy"])
        .build()
        .unwrap();
    let storage = Arc::new(InMemoryModelStorage::new());
    storage.save(&model).await.unwrap();

    let (price, battery) = (model.criteria[0].id, model.criteria[1].id);
    let (light, heavy) = (model.alternatives[0].id, model.alternatives[1].id);
    let record = RecordJudgmentHandler::new(storage.clone());

    let judgments = [
        (JudgmentSubject::Criteria { first: price, second: battery }, 3, false),
        (
            JudgmentSubject::Alternatives { criterion: price, first: light, second: heavy },
            5,
            true,
        ),
        (
            JudgmentSubject::Alternatives { criterion: battery, first: heavy, second: light },
            7,
            true,
        ),
    ];
    let mut last_stage = AnalysisStage::Empty;
    for (subject, scale, favors_first) in judgments {
        let result = record
            .handle(RecordJudgmentCommand {
                model_id: model.id,
                subject,
                scale,
                favors_first,
            })
            .await
            .unwrap();
        last_stage = result.stage;
    }
    assert_eq!(last_stage, AnalysisStage::AlternativesJudged);

    let compute = ComputeAnalysisHandler::new(storage, AhpEngine::new());
    let result = compute
        .handle(ComputeAnalysisCommand { model_id: model.id })
        .await
        .unwrap();

    // Battery outweighs price 3:1 and Heavy wins battery 7:1.
    assert_eq!(result.analysis.alternatives[0].name, "Heavy");
    assert_eq!(result.report.ranking[0].rank, 1);
    assert_eq!(result.progress.value(), 100);
}

#[tokio::test]
async fn corrupt_model_files_are_refused_before_scoring() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hand_edited.yaml");
    std::fs::write(
        &path,
        r#"
id: 6f1c2a8e-2b4d-4c1e-9a53-0d7e5b9c1f03
name: Hand edited
criteria:
  - id: 11111111-1111-4111-8111-000000000001
    name: Cost
  - id: 11111111-1111-4111-8111-000000000002
    name: Cost
alternatives:
  - id: 22222222-2222-4222-8222-000000000001
    name: North
  - id: 22222222-2222-4222-8222-000000000001
    name: South
judgments:
  criteria:
    - item_a: 11111111-1111-4111-8111-000000000001
      item_b: 11111111-1111-4111-8111-000000000002
      value: 9.0
    - item_a: 11111111-1111-4111-8111-000000000002
      item_b: 11111111-1111-4111-8111-000000000001
      value: 9.0
  alternatives:
    - criterion_id: 11111111-1111-4111-8111-000000000001
      item_a: 22222222-2222-4222-8222-000000000001
      item_b: 22222222-2222-4222-8222-000000000001
      value: 7.0
"#,
    )
    .unwrap();

    let result = read_model_file(&path).await;

    assert!(matches!(
        result,
        Err(ModelStorageError::DeserializationFailed(_))
    ));
}

#[tokio::test]
async fn file_storage_round_trip_preserves_results() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileModelStorage::new(temp_dir.path()));
    let model = read_model_file(&demo_path()).await.unwrap();
    storage.save(&model).await.unwrap();

    let direct = AhpEngine::new().evaluate(&model).unwrap();
    let handler = ComputeAnalysisHandler::new(storage, AhpEngine::new());
    let stored = handler
        .handle(ComputeAnalysisCommand { model_id: model.id })
        .await
        .unwrap();

    assert_eq!(stored.analysis.criteria_weights, direct.criteria_weights);
    assert_eq!(stored.analysis.alternatives, direct.alternatives);
}

#[tokio::test]
async fn computing_an_unready_model_is_refused() {
    let model = DecisionModel::builder("Draft")
        .criteria(vec!["Price", "Battery"])
        .build()
        .unwrap();
    let storage = Arc::new(InMemoryModelStorage::new());
    storage.save(&model).await.unwrap();

    let err = ComputeAnalysisHandler::new(storage, AhpEngine::new())
        .handle(ComputeAnalysisCommand { model_id: model.id })
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::NotReady { .. }));
    assert_eq!(err.code(), ErrorCode::AnalysisNotReady);
}
