// ==========================================
// SimulationApi 集成测试
// ==========================================
// 测试目标:
// 1. 响应信封（success / input_data / results / errors）
// 2. 配置库驱动的校验策略
// 3. 批量仿真顺序、轮廓预览
// ==========================================

mod helpers;

use helpers::mock_solver::MockSolver;
use helpers::request_builder::*;
use rolling_sim::api::{ApiError, SimulationApi};
use rolling_sim::config::{config_keys, ConfigManager, SimulationDefaults};
use rolling_sim::domain::report::RollContour;
use rolling_sim::domain::types::UnitKind;
use serde_json::json;
use std::sync::Arc;
use test_helpers::{create_test_db, insert_test_config, open_test_connection};

fn api(solver: &Arc<MockSolver>) -> SimulationApi<MockSolver, MockSolver> {
    SimulationApi::with_defaults(
        Arc::clone(solver),
        Arc::new(MockSolver::new()),
        SimulationDefaults::default(),
    )
}

#[tokio::test]
async fn test_simulate_success_envelope_echoes_input() {
    let solver = Arc::new(MockSolver::new());
    let input = request_json(vec![round_groove_pass(), transport(2.0)], "solve", json!({}));

    let response = api(&solver).simulate(input.clone()).await;

    assert!(response.success);
    assert_eq!(response.input_data, input);
    assert!(response.errors.is_none());
    let report = response.results.expect("results should be present");
    assert_eq!(report.units, 2);
    assert_eq!(report.passes[1].unit_type, UnitKind::Transport);
}

#[tokio::test]
async fn test_simulate_failure_envelope_for_empty_design() {
    let solver = Arc::new(MockSolver::new());
    let input = request_json(vec![], "solve", json!({}));

    let response = api(&solver).simulate(input.clone()).await;

    assert!(!response.success);
    assert!(response.results.is_none());
    assert_eq!(response.input_data, input);
    assert!(response.errors.unwrap().contains("No Units defined"));
    assert!(solver.calls().is_empty());
}

#[tokio::test]
async fn test_simulate_rejects_malformed_request() {
    let solver = Arc::new(MockSolver::new());

    let response = api(&solver).simulate(json!({"passDesignData": "not a list"})).await;

    assert!(!response.success);
    assert!(response.errors.unwrap().starts_with("无效输入"));
    assert!(solver.calls().is_empty());
}

#[tokio::test]
async fn test_run_maps_solver_failure() {
    let solver = Arc::new(MockSolver::failing("roll gap closed"));

    let err = api(&solver)
        .run(solve_request(vec![round_groove_pass()]))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::SolverFailure(ref msg) if msg.contains("roll gap closed")));
}

#[tokio::test]
async fn test_simulate_batch_preserves_request_order() {
    let solver = Arc::new(MockSolver::new());
    let inputs = vec![
        request_json(vec![round_groove_pass()], "solve", json!({})),
        request_json(vec![], "solve", json!({})),
        request_json(
            vec![round_groove_pass(), transport(1.0), cooling_pipe(2.0)],
            "solve",
            json!({}),
        ),
    ];

    let responses = api(&solver).simulate_batch(inputs.clone()).await;

    assert_eq!(responses.len(), 3);
    for (response, input) in responses.iter().zip(&inputs) {
        assert_eq!(&response.input_data, input);
    }
    assert!(responses[0].success);
    assert!(!responses[1].success);
    assert_eq!(responses[2].results.as_ref().map(|r| r.units), Some(3));
}

#[tokio::test]
async fn test_advisory_policy_from_config_db() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_test_config(&conn, config_keys::VALIDATION_POLICY, "advisory").unwrap();

    let solver = Arc::new(MockSolver::new());
    let config = Arc::new(ConfigManager::new(&db_path).unwrap());
    let api = SimulationApi::new(Arc::clone(&solver), Arc::new(MockSolver::new()), config);

    let input = request_json(
        vec![round_groove_pass(), json!({"type": "UnknownKind"})],
        "solve",
        json!({}),
    );
    let response = api.simulate(input).await;

    assert!(response.success, "errors: {:?}", response.errors);
    assert_eq!(response.results.unwrap().units, 1);
}

#[tokio::test]
async fn test_strict_policy_from_config_db() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let solver = Arc::new(MockSolver::new());
    let config = Arc::new(ConfigManager::new(&db_path).unwrap());
    let api = SimulationApi::new(Arc::clone(&solver), Arc::new(MockSolver::new()), config);

    let err = api
        .run(solve_request(vec![round_groove_pass(), json!({"type": "UnknownKind"})]))
        .await
        .unwrap_err();

    match err {
        ApiError::ValidationError { issues, .. } => assert_eq!(issues[0].index, Some(1)),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

// ==========================================
// 轮廓预览
// ==========================================

#[tokio::test]
async fn test_roll_pass_contour_preview() {
    let solver = Arc::new(MockSolver::new());

    let preview = api(&solver)
        .roll_pass_contour(round_groove_pass())
        .await
        .unwrap();

    assert_eq!(preview.unit_type, UnitKind::TwoRollPass);
    assert_eq!(preview.gap, Some(0.01));
    assert_eq!(preview.inscribed_circle_diameter, None);
    assert_eq!(preview.depth, Some(0.005));
    assert!(matches!(preview.roll_contour, RollContour::TwoRoll { .. }));
    assert!(solver.calls().is_empty());
}

#[tokio::test]
async fn test_three_roll_contour_preview() {
    let solver = Arc::new(MockSolver::new());

    let preview = api(&solver)
        .roll_pass_contour(three_roll_pass("Y"))
        .await
        .unwrap();

    assert_eq!(preview.unit_type, UnitKind::ThreeRollPass);
    assert_eq!(preview.gap, None);
    assert_eq!(preview.inscribed_circle_diameter, Some(0.04));
    assert_eq!(preview.roll_contour.roll_count(), 3);
}

#[tokio::test]
async fn test_roll_pass_contour_rejects_transport() {
    let solver = Arc::new(MockSolver::new());

    let err = api(&solver)
        .roll_pass_contour(transport(1.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_in_profile_contour_preview() {
    let solver = Arc::new(MockSolver::new());

    let preview = api(&solver)
        .in_profile_contour(round_profile(0.05, 1473.0))
        .unwrap();

    let exact = std::f64::consts::PI * 0.025 * 0.025;
    assert!((preview.cross_section_area - exact).abs() / exact < 0.01);
    assert_eq!(preview.contour.x.len(), preview.contour.y.len());
}

#[tokio::test]
async fn test_in_profile_contour_without_temperature() {
    let solver = Arc::new(MockSolver::new());

    let preview = api(&solver)
        .in_profile_contour(json!({"shape": "square", "side": 0.04}))
        .unwrap();

    assert!((preview.cross_section_area - 0.0016).abs() < 1e-9);
}

#[tokio::test]
async fn test_in_profile_contour_rejects_non_positive_temperature() {
    let solver = Arc::new(MockSolver::new());

    let err = api(&solver)
        .in_profile_contour(json!({"shape": "round", "diameter": 0.05, "temperature": -1.0}))
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
}
