use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::decision::{
    decision_router, CriteriaWeights, ScenarioCatalog, ScenarioInput, ScoringConfig, ScoringEngine,
    StrategicDecisionService, WeightStore,
};

pub(super) fn input(cost: f64, time_to_implement: f64, strategic_importance: f64) -> ScenarioInput {
    ScenarioInput {
        cost,
        time_to_implement,
        strategic_importance,
    }
}

pub(super) fn weights(
    strategic_importance: f64,
    cost: f64,
    time_to_implement: f64,
) -> CriteriaWeights {
    CriteriaWeights {
        strategic_importance,
        cost,
        time_to_implement,
    }
}

pub(super) fn store() -> Arc<WeightStore> {
    Arc::new(WeightStore::default())
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(store(), ScoringConfig::default())
}

pub(super) fn engine_with_store(store: Arc<WeightStore>) -> ScoringEngine {
    ScoringEngine::new(store, ScoringConfig::default())
}

pub(super) fn service() -> StrategicDecisionService {
    StrategicDecisionService::new(store(), ScoringConfig::default(), ScenarioCatalog::seeded())
}

pub(super) fn service_router() -> axum::Router {
    decision_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
