mod config;
mod normalize;

pub use config::ScoringConfig;

use std::sync::Arc;

use super::domain::{Factor, FactorBreakdown, ScenarioInput, ScoringResult};
use super::error::ValidationError;
use super::weights::WeightStore;
use normalize::{clamp_unit, normalize_cost, normalize_time, round_to_milli};

/// Stateless Strategic Value Index calculator.
///
/// Per-call state is limited to a weight snapshot read from the shared store,
/// so identical inputs under unchanged weights produce bit-identical results.
pub struct ScoringEngine {
    weights: Arc<WeightStore>,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(weights: Arc<WeightStore>, config: ScoringConfig) -> Self {
        Self { weights, config }
    }

    /// Score a single scenario: validate the input, normalize cost and time
    /// onto the unit interval, and combine with the current criteria weights.
    /// Strategic importance is already on [0,1] and passes through as given.
    pub fn score(&self, input: &ScenarioInput) -> Result<ScoringResult, ValidationError> {
        input.validate()?;

        let norm_cost = normalize_cost(input.cost, &self.config);
        let norm_time = normalize_time(input.time_to_implement, &self.config);
        let weights = self.weights.current();

        let factors = FactorBreakdown {
            strategic_importance: Factor {
                weight: weights.strategic_importance,
                value: input.strategic_importance,
            },
            cost: Factor {
                weight: weights.cost,
                value: norm_cost,
            },
            time_to_implement: Factor {
                weight: weights.time_to_implement,
                value: norm_time,
            },
        };

        let svi = factors.strategic_importance.weight * factors.strategic_importance.value
            + factors.cost.weight * factors.cost.value
            + factors.time_to_implement.weight * factors.time_to_implement.value;

        Ok(ScoringResult {
            svi: round_to_milli(clamp_unit(svi)),
            factors,
        })
    }

    /// Score a batch sequentially, in input order. Fail-fast: the first
    /// invalid item aborts the whole batch with that item's error and no
    /// partial results are returned.
    pub fn score_batch(
        &self,
        inputs: &[ScenarioInput],
    ) -> Result<Vec<ScoringResult>, ValidationError> {
        inputs.iter().map(|input| self.score(input)).collect()
    }
}
