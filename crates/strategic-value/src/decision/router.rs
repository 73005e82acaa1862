use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ScenarioInput, StrategicScenario};
use super::error::ValidationError;
use super::service::{DecisionServiceError, StrategicDecisionService};
use super::weights::CriteriaWeights;
use crate::error::AppError;

/// Router builder exposing the strategic decision endpoints.
pub fn decision_router(service: Arc<StrategicDecisionService>) -> Router {
    Router::new()
        .route(
            "/api/v1/strategic-decision/scenarios",
            get(scenarios_handler),
        )
        .route(
            "/api/v1/strategic-decision/scenarios/:id",
            get(scenario_handler),
        )
        .route("/api/v1/strategic-decision/svi", post(calculate_handler))
        .route(
            "/api/v1/strategic-decision/svi/batch",
            post(batch_handler),
        )
        .route(
            "/api/v1/strategic-decision/weights",
            get(weights_handler).put(update_weights_handler),
        )
        .with_state(service)
}

/// Body for batch scoring requests.
#[derive(Debug, Deserialize)]
pub(crate) struct BatchScoringRequest {
    pub(crate) scenarios: Vec<ScenarioInput>,
}

pub(crate) async fn scenarios_handler(
    State(service): State<Arc<StrategicDecisionService>>,
) -> Response {
    let payload = json!({ "scenarios": service.scenarios() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn scenario_handler(
    State(service): State<Arc<StrategicDecisionService>>,
    Path(id): Path<u32>,
) -> Result<axum::Json<StrategicScenario>, AppError> {
    let scenario = service.scenario(id)?.clone();
    Ok(axum::Json(scenario))
}

pub(crate) async fn calculate_handler(
    State(service): State<Arc<StrategicDecisionService>>,
    axum::Json(input): axum::Json<ScenarioInput>,
) -> Response {
    match service.score(&input) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(DecisionServiceError::Validation(error)) => {
            validation_rejection("invalid request data", &error)
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<StrategicDecisionService>>,
    axum::Json(request): axum::Json<BatchScoringRequest>,
) -> Response {
    match service.score_batch(&request.scenarios) {
        Ok(results) => {
            let payload = json!({
                "message": "batch SVI calculation completed",
                "results": results,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(DecisionServiceError::Validation(error)) => {
            validation_rejection("invalid scenario data", &error)
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn weights_handler(
    State(service): State<Arc<StrategicDecisionService>>,
) -> Response {
    (StatusCode::OK, axum::Json(service.weights())).into_response()
}

pub(crate) async fn update_weights_handler(
    State(service): State<Arc<StrategicDecisionService>>,
    axum::Json(candidate): axum::Json<CriteriaWeights>,
) -> Response {
    match service.update_weights(candidate) {
        Ok(weights) => {
            let payload = json!({
                "message": "criteria weights updated",
                "weights": weights,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(DecisionServiceError::Validation(error)) => {
            validation_rejection("invalid weights data", &error)
        }
        Err(other) => internal_error(other),
    }
}

fn validation_rejection(message: &str, error: &ValidationError) -> Response {
    let payload = json!({
        "message": message,
        "errors": [{ "field": error.field(), "message": error.to_string() }],
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn internal_error(error: DecisionServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
