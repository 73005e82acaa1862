/// Range and constraint violations in caller-supplied data.
///
/// Always recoverable: the offending request is rejected and stored state is
/// left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} must be between 0 and 1")]
    OutsideUnitInterval { field: &'static str },
    #[error("weights must sum to 1 (sum was {sum:.4})")]
    WeightSumMismatch { sum: f64 },
}

impl ValidationError {
    /// Field identifier surfaced in API rejection payloads.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotPositive { field }
            | ValidationError::OutsideUnitInterval { field } => field,
            ValidationError::WeightSumMismatch { .. } => "weights",
        }
    }
}

pub(crate) fn require_positive(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field })
    }
}

pub(crate) fn require_unit_interval(
    value: f64,
    field: &'static str,
) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutsideUnitInterval { field })
    }
}
