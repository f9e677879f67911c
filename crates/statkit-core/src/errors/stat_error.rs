use super::ConfigError;

/// Top-level statkit error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatError {
    #[error("no usable numeric values in input")]
    EmptyInput,

    #[error("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("unsupported confidence level {level}: expected one of 0.80, 0.85, 0.90, 0.95, 0.99")]
    UnsupportedConfidenceLevel { level: f64 },

    #[error("non-numeric element at index {index}")]
    NonNumeric { index: usize },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl StatError {
    /// Shorthand for an [`StatError::InsufficientData`] error.
    pub fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
