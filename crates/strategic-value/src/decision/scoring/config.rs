use serde::{Deserialize, Serialize};

/// Reference ceilings used to normalize raw cost and time onto the unit
/// interval. Inputs at or above a ceiling contribute a value score of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Cost ceiling in currency units.
    pub max_cost: f64,
    /// Time ceiling in months.
    pub max_time_months: f64,
}

impl ScoringConfig {
    pub const DEFAULT_MAX_COST: f64 = 2_000_000.0;
    pub const DEFAULT_MAX_TIME_MONTHS: f64 = 24.0;
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_cost: Self::DEFAULT_MAX_COST,
            max_time_months: Self::DEFAULT_MAX_TIME_MONTHS,
        }
    }
}
