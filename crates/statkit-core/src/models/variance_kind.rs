use serde::{Deserialize, Serialize};

/// Which variance estimator to use.
///
/// `Sample` divides the sum of squared deviations by `n - 1` (unbiased),
/// `Population` divides by `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceKind {
    #[default]
    Sample,
    Population,
}

impl VarianceKind {
    /// Divisor applied to the sum of squared deviations of `n` values.
    pub fn divisor(self, n: usize) -> f64 {
        match self {
            VarianceKind::Sample => (n - 1) as f64,
            VarianceKind::Population => n as f64,
        }
    }

    pub fn is_sample(self) -> bool {
        self == VarianceKind::Sample
    }
}

/// `true` selects the sample estimator, `false` the population one.
impl From<bool> for VarianceKind {
    fn from(sample: bool) -> Self {
        if sample {
            VarianceKind::Sample
        } else {
            VarianceKind::Population
        }
    }
}
