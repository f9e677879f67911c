use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How the confidence-interval operation treats elements that are not numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Mean and variance come from the sanitized sample, but `n` in the
    /// standard error is the raw element count, non-numeric entries included.
    #[default]
    Raw,
    /// Any non-numeric element is a hard `NonNumeric` error.
    Strict,
    /// Non-numeric elements are dropped by the shared sanitizer.
    Lenient,
}

impl FromStr for InputPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(InputPolicy::Raw),
            "strict" => Ok(InputPolicy::Strict),
            "lenient" => Ok(InputPolicy::Lenient),
            other => Err(ConfigError::ValidationFailed {
                field: "inference.input_policy".to_string(),
                message: format!("unknown policy '{other}', expected 'raw', 'strict' or 'lenient'"),
            }),
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPolicy::Raw => write!(f, "raw"),
            InputPolicy::Strict => write!(f, "strict"),
            InputPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Inference subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Confidence level used when the caller does not pass one.
    pub default_level: f64,
    /// Treatment of non-numeric elements in interval input.
    pub input_policy: InputPolicy,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            default_level: defaults::DEFAULT_CONFIDENCE_LEVEL,
            input_policy: InputPolicy::default(),
        }
    }
}
