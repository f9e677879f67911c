use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SUPPORTED_CONFIDENCE_LEVELS;
use crate::errors::StatError;

/// One of the five two-sided confidence levels with a tabulated z value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ConfidenceLevel {
    P80,
    P85,
    P90,
    #[default]
    P95,
    P99,
}

impl ConfidenceLevel {
    /// All supported levels, ascending.
    pub const ALL: [ConfidenceLevel; 5] = [
        ConfidenceLevel::P80,
        ConfidenceLevel::P85,
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
        ConfidenceLevel::P99,
    ];

    /// The level as a probability, e.g. `0.95`.
    pub fn value(self) -> f64 {
        SUPPORTED_CONFIDENCE_LEVELS[self as usize]
    }

    /// Check whether `level` is exactly one of the supported levels.
    pub fn is_supported(level: f64) -> bool {
        Self::try_from(level).is_ok()
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = StatError;

    /// Exact match only: `0.95` is accepted, `0.951` is not.
    fn try_from(level: f64) -> Result<Self, Self::Error> {
        SUPPORTED_CONFIDENCE_LEVELS
            .iter()
            .position(|&supported| supported == level)
            .map(|i| Self::ALL[i])
            .ok_or(StatError::UnsupportedConfidenceLevel { level })
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.value() * 100.0)
    }
}
