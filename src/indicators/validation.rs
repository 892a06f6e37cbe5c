//! Precondition checks shared by the indicator engines

use crate::indicators::error::{IndicatorError, IndicatorResult};

/// Reject window parameters below 1
pub fn validate_window(name: &'static str, value: usize) -> IndicatorResult<()> {
    if value == 0 {
        return Err(IndicatorError::InvalidWindow { name, value });
    }
    Ok(())
}

/// Require at least `required` rows of input
pub fn validate_row_count(actual: usize, required: usize) -> IndicatorResult<()> {
    if actual < required {
        return Err(IndicatorError::InsufficientData { required, actual });
    }
    Ok(())
}
