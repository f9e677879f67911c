use statkit_core::config::{InferenceConfig, InputPolicy};
use statkit_core::{ConfidenceInterval, ConfidenceLevel, StatResult, StatkitConfig, ToNumeric};

use crate::interval::mean_confidence_interval_with;

/// Confidence-interval engine with a configured default level and input policy.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    level: ConfidenceLevel,
    policy: InputPolicy,
}

impl InferenceEngine {
    /// Create an engine at 95% with the raw input policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: ConfidenceLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build from config. Fails if the configured default level is unsupported.
    pub fn from_config(config: &InferenceConfig) -> StatResult<Self> {
        let level = ConfidenceLevel::try_from(config.default_level)?;
        Ok(Self {
            level,
            policy: config.input_policy,
        })
    }

    /// Build from the full statkit config, validating it first.
    pub fn from_statkit_config(config: &StatkitConfig) -> StatResult<Self> {
        config.validate()?;
        Self::from_config(&config.inference)
    }

    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Interval at the configured level.
    pub fn confidence_interval<I>(&self, data: I) -> StatResult<ConfidenceInterval>
    where
        I: IntoIterator,
        I::Item: ToNumeric,
    {
        mean_confidence_interval_with(data, self.level, self.policy)
    }

    /// Interval at an explicit level, checked before the data is read.
    pub fn confidence_interval_at<I>(&self, data: I, level: f64) -> StatResult<ConfidenceInterval>
    where
        I: IntoIterator,
        I::Item: ToNumeric,
    {
        let level = ConfidenceLevel::try_from(level)?;
        mean_confidence_interval_with(data, level, self.policy)
    }
}
