use std::sync::Arc;

use super::catalog::ScenarioCatalog;
use super::domain::{ScenarioInput, ScoringResult, StrategicScenario};
use super::error::ValidationError;
use super::scoring::{ScoringConfig, ScoringEngine};
use super::weights::{CriteriaWeights, WeightStore};

/// Facade composing the weight store, scoring engine, and scenario catalog.
///
/// The store is injected so hosts (and tests) control the initial weights;
/// the engine shares it through the same `Arc`.
pub struct StrategicDecisionService {
    weights: Arc<WeightStore>,
    engine: ScoringEngine,
    catalog: ScenarioCatalog,
}

impl StrategicDecisionService {
    pub fn new(weights: Arc<WeightStore>, scoring: ScoringConfig, catalog: ScenarioCatalog) -> Self {
        let engine = ScoringEngine::new(weights.clone(), scoring);
        Self {
            weights,
            engine,
            catalog,
        }
    }

    /// Score a single scenario against the current weights.
    pub fn score(&self, input: &ScenarioInput) -> Result<ScoringResult, DecisionServiceError> {
        Ok(self.engine.score(input)?)
    }

    /// Score a batch in input order; fail-fast on the first invalid item.
    pub fn score_batch(
        &self,
        inputs: &[ScenarioInput],
    ) -> Result<Vec<ScoringResult>, DecisionServiceError> {
        Ok(self.engine.score_batch(inputs)?)
    }

    /// Snapshot of the current criteria weights.
    pub fn weights(&self) -> CriteriaWeights {
        self.weights.current()
    }

    /// Validate and replace the criteria weights wholesale.
    pub fn update_weights(
        &self,
        candidate: CriteriaWeights,
    ) -> Result<CriteriaWeights, DecisionServiceError> {
        Ok(self.weights.replace(candidate)?)
    }

    /// All catalog scenarios in seed order.
    pub fn scenarios(&self) -> &[StrategicScenario] {
        self.catalog.list()
    }

    /// Catalog lookup by exact id.
    pub fn scenario(&self, id: u32) -> Result<&StrategicScenario, DecisionServiceError> {
        self.catalog
            .get(id)
            .ok_or(DecisionServiceError::ScenarioNotFound(id))
    }
}

/// Error raised by the decision service.
#[derive(Debug, thiserror::Error)]
pub enum DecisionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("scenario {0} not found")]
    ScenarioNotFound(u32),
}
