use crate::config::ConfigError;
use crate::decision::{BatchImportError, DecisionServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("decision error: {0}")]
    Decision(#[from] DecisionServiceError),
    #[error("batch import error: {0}")]
    Import(#[from] BatchImportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Decision(DecisionServiceError::Validation(error)) => {
                let body = Json(json!({
                    "message": "invalid request data",
                    "errors": [{ "field": error.field(), "message": error.to_string() }],
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Decision(DecisionServiceError::ScenarioNotFound(id)) => {
                let body = Json(json!({ "message": "scenario not found", "id": id }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Import(error) => {
                let body = Json(json!({ "error": error.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            other => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
