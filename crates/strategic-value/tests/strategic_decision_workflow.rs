//! Integration specifications for the strategic decision scoring workflow.
//!
//! Scenarios exercise end-to-end behavior through the public service facade
//! and HTTP router so weight management, scoring, and catalog lookups are
//! validated without reaching into private modules.

mod common {
    use std::sync::Arc;

    use serde_json::Value;

    use strategic_value::decision::{
        decision_router, ScenarioCatalog, ScenarioInput, ScoringConfig, StrategicDecisionService,
        WeightStore,
    };

    pub(super) fn service() -> Arc<StrategicDecisionService> {
        Arc::new(StrategicDecisionService::new(
            Arc::new(WeightStore::default()),
            ScoringConfig::default(),
            ScenarioCatalog::seeded(),
        ))
    }

    pub(super) fn router() -> axum::Router {
        decision_router(service())
    }

    pub(super) fn reference_input() -> ScenarioInput {
        ScenarioInput {
            cost: 1_000_000.0,
            time_to_implement: 12.0,
            strategic_importance: 0.8,
        }
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use strategic_value::decision::{CriteriaWeights, DecisionServiceError};

#[test]
fn service_scores_every_catalog_entry() {
    let service = common::service();

    for scenario in service.scenarios() {
        let result = service
            .score(&scenario.input())
            .expect("seeded entries score");
        assert!(
            (0.0..=1.0).contains(&result.svi),
            "svi out of range for {}",
            scenario.name
        );
    }
}

#[test]
fn weight_update_shifts_subsequent_scores() {
    let service = common::service();
    let input = common::reference_input();

    let before = service.score(&input).expect("valid input scores");
    assert_eq!(before.svi, 0.65);

    service
        .update_weights(CriteriaWeights {
            strategic_importance: 0.2,
            cost: 0.5,
            time_to_implement: 0.3,
        })
        .expect("valid weights accepted");

    let after = service.score(&input).expect("valid input scores");
    assert_eq!(after.svi, 0.56);
}

#[test]
fn rejected_weight_update_does_not_disturb_scoring() {
    let service = common::service();
    let input = common::reference_input();

    let err = service
        .update_weights(CriteriaWeights {
            strategic_importance: 0.5,
            cost: 0.3,
            time_to_implement: 0.3,
        })
        .expect_err("sum 1.1 rejected");
    assert!(matches!(err, DecisionServiceError::Validation(_)));

    let result = service.score(&input).expect("valid input scores");
    assert_eq!(result.svi, 0.65);
}

#[tokio::test]
async fn http_surface_covers_the_full_decision_flow() {
    let router = common::router();

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/strategic-decision/scenarios/1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let scenario = common::read_json_body(response).await;
    assert_eq!(scenario["name"], json!("Internal Development"));

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/strategic-decision/svi")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "cost": scenario["cost"],
                        "time_to_implement": scenario["time_to_implement"],
                        "strategic_importance": scenario["strategic_importance"],
                    }))
                    .expect("payload serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let result = common::read_json_body(response).await;
    assert_eq!(result["svi"], json!(0.65));

    let response = router
        .oneshot(
            Request::get("/api/v1/strategic-decision/scenarios/99")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
