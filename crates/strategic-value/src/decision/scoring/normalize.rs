use super::config::ScoringConfig;

pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Inverse-linear value score for cost: larger cost yields a smaller value,
/// reaching zero at the configured ceiling.
pub(crate) fn normalize_cost(cost: f64, config: &ScoringConfig) -> f64 {
    clamp_unit(1.0 - cost / config.max_cost)
}

/// Inverse-linear value score for time-to-implement, zero at the ceiling.
pub(crate) fn normalize_time(months: f64, config: &ScoringConfig) -> f64 {
    clamp_unit(1.0 - months / config.max_time_months)
}

/// Round to three decimal places, half away from zero (`f64::round`).
pub(crate) fn round_to_milli(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
