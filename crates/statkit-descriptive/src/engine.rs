use statkit_core::config::DescriptiveConfig;
use statkit_core::{StatResult, Summary, ToNumeric, VarianceKind};

use crate::sample::sanitize;

/// Descriptive statistics with the variance estimator fixed by configuration.
#[derive(Debug, Clone, Default)]
pub struct DescriptiveEngine {
    kind: VarianceKind,
}

impl DescriptiveEngine {
    /// Create an engine using the sample (n - 1) estimator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(kind: VarianceKind) -> Self {
        Self { kind }
    }

    pub fn from_config(config: &DescriptiveConfig) -> Self {
        Self::with_kind(config.variance_kind())
    }

    pub fn kind(&self) -> VarianceKind {
        self.kind
    }

    pub fn variance<I>(&self, data: I) -> StatResult<f64>
    where
        I: IntoIterator,
        I::Item: ToNumeric,
    {
        sanitize(data)?.variance(self.kind)
    }

    pub fn std_dev<I>(&self, data: I) -> StatResult<f64>
    where
        I: IntoIterator,
        I::Item: ToNumeric,
    {
        sanitize(data)?.std_dev(self.kind)
    }

    pub fn summary<I>(&self, data: I) -> StatResult<Summary>
    where
        I: IntoIterator,
        I::Item: ToNumeric,
    {
        sanitize(data)?.summary(self.kind)
    }
}
