use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::error::{require_unit_interval, ValidationError};

/// Tolerance applied when checking that the criteria weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// The configured weight for each scoring criterion.
///
/// Invariant: each component lies in [0,1] and the three sum to 1 within
/// [`WEIGHT_SUM_TOLERANCE`]. Replaced wholesale, never field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    pub strategic_importance: f64,
    pub cost: f64,
    pub time_to_implement: f64,
}

impl CriteriaWeights {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_unit_interval(self.strategic_importance, "strategic_importance")?;
        require_unit_interval(self.cost, "cost")?;
        require_unit_interval(self.time_to_implement, "time_to_implement")?;

        let sum = self.strategic_importance + self.cost + self.time_to_implement;
        if (sum - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch { sum });
        }

        Ok(())
    }
}

impl Default for CriteriaWeights {
    fn default() -> Self {
        Self {
            strategic_importance: 0.5,
            cost: 0.3,
            time_to_implement: 0.2,
        }
    }
}

/// Process-wide weight state shared across concurrent scoring calls.
///
/// Reads vastly outnumber writes, so a read-write lock over a `Copy` snapshot
/// keeps scoring calls from ever observing a half-replaced weight set.
#[derive(Debug, Default)]
pub struct WeightStore {
    weights: RwLock<CriteriaWeights>,
}

impl WeightStore {
    /// Build a store seeded with a validated weight set.
    pub fn new(initial: CriteriaWeights) -> Result<Self, ValidationError> {
        initial.validate()?;
        Ok(Self {
            weights: RwLock::new(initial),
        })
    }

    /// Snapshot of the current weights.
    pub fn current(&self) -> CriteriaWeights {
        *self.weights.read().expect("weight lock poisoned")
    }

    /// Validate and atomically replace the stored weights, returning the new
    /// set. An invalid candidate leaves the previous weights untouched.
    pub fn replace(&self, candidate: CriteriaWeights) -> Result<CriteriaWeights, ValidationError> {
        candidate.validate()?;
        let mut guard = self.weights.write().expect("weight lock poisoned");
        *guard = candidate;
        Ok(candidate)
    }
}
