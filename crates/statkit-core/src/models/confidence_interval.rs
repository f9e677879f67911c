use serde::{Deserialize, Serialize};

use super::ConfidenceLevel;

/// Two-sided confidence interval for a sample mean. `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub level: ConfidenceLevel,
}

impl ConfidenceInterval {
    /// Build the interval `center ± margin`.
    ///
    /// A negative margin is treated as its absolute value so the bounds stay ordered.
    pub fn around(center: f64, margin: f64, level: ConfidenceLevel) -> Self {
        let margin = margin.abs();
        Self {
            lower: center - margin,
            upper: center + margin,
            level,
        }
    }

    /// Upper minus lower bound.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval (the sample mean it was built around).
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Half-width of the interval.
    pub fn margin(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// The bounds as a `(lower, upper)` pair.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        ci.bounds()
    }
}
