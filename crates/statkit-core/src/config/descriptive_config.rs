use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::VarianceKind;

/// Descriptive statistics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptiveConfig {
    /// Use the sample (n - 1) estimator for variance and standard deviation.
    pub sample: bool,
}

impl DescriptiveConfig {
    pub fn variance_kind(&self) -> VarianceKind {
        VarianceKind::from(self.sample)
    }
}

impl Default for DescriptiveConfig {
    fn default() -> Self {
        Self {
            sample: defaults::DEFAULT_SAMPLE_VARIANCE,
        }
    }
}
