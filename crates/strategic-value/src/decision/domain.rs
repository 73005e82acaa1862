use serde::{Deserialize, Serialize};

use super::error::{require_positive, require_unit_interval, ValidationError};

/// Raw inputs for a single SVI calculation. Constructed per request, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Projected cost in currency units; must be positive.
    pub cost: f64,
    /// Projected delivery time in months; must be positive.
    pub time_to_implement: f64,
    /// Dimensionless score already on the unit interval.
    pub strategic_importance: f64,
}

impl ScenarioInput {
    /// Check the input domain: positive cost and time, importance in [0,1].
    /// Non-finite values fail the same range checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive(self.cost, "cost")?;
        require_positive(self.time_to_implement, "time_to_implement")?;
        require_unit_interval(self.strategic_importance, "strategic_importance")?;
        Ok(())
    }
}

/// Weight and normalized value for one criterion, reported alongside the
/// aggregate score for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub weight: f64,
    pub value: f64,
}

/// The three per-criterion factors keyed by criterion name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub strategic_importance: Factor,
    pub cost: Factor,
    pub time_to_implement: Factor,
}

/// Final Strategic Value Index plus the itemized factors behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Weighted score clamped to [0,1] and rounded to three decimal places.
    pub svi: f64,
    pub factors: FactorBreakdown,
}

/// A named, pre-scored example scenario from the seeded portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicScenario {
    pub id: u32,
    pub name: String,
    pub cost: f64,
    pub time_to_implement: f64,
    pub strategic_importance: f64,
    pub svi: f64,
    pub description: String,
    pub risks: Vec<String>,
    pub benefits: Vec<String>,
}

impl StrategicScenario {
    /// The scenario's raw inputs, for rescoring catalog entries against the
    /// current weights.
    pub fn input(&self) -> ScenarioInput {
        ScenarioInput {
            cost: self.cost,
            time_to_implement: self.time_to_implement,
            strategic_importance: self.strategic_importance,
        }
    }
}
