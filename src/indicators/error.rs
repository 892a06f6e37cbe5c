use thiserror::Error;

/// Result alias for indicator calculations.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// Validation failures raised before any indicator math runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// One or more required columns are absent from the input table.
    #[error("Input must contain columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Not enough data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid {name}: must be at least 1, got {value}")]
    InvalidWindow { name: &'static str, value: usize },

    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl IndicatorError {
    /// Error for a single missing column.
    pub fn missing_column(name: &str) -> Self {
        Self::MissingColumns(vec![name.to_string()])
    }
}
