//! Top-level statkit configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DescriptiveConfig, InferenceConfig, ObservabilityConfig, LOG_LEVELS};
use crate::errors::ConfigError;
use crate::models::ConfidenceLevel;

/// Override key for `descriptive.sample` ("true"/"false").
pub const KEY_SAMPLE: &str = "descriptive.sample";
/// Override key for `inference.default_level` (e.g. "0.99").
pub const KEY_CONFIDENCE_LEVEL: &str = "inference.default_level";
/// Override key for `inference.input_policy` ("raw"/"strict"/"lenient").
pub const KEY_INPUT_POLICY: &str = "inference.input_policy";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Caller-supplied overrides ([`StatkitConfig::apply_overrides_from`])
/// 2. Config file passed to [`StatkitConfig::load`]
/// 3. Compiled defaults
///
/// The process environment is never consulted for numeric behaviour; only the
/// log filter reads `STATKIT_LOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatkitConfig {
    pub descriptive: DescriptiveConfig,
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl StatkitConfig {
    /// Load configuration from an optional TOML file and validate it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file without validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a caller-supplied key lookup (CLI map, embedding
    /// application settings). Keys are the dotted `KEY_*` constants.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(KEY_SAMPLE) {
            self.descriptive.sample = parse_bool(&raw).ok_or_else(|| {
                ConfigError::ValidationFailed {
                    field: KEY_SAMPLE.to_string(),
                    message: format!("expected a boolean, got '{raw}'"),
                }
            })?;
        }
        if let Some(raw) = lookup(KEY_CONFIDENCE_LEVEL) {
            self.inference.default_level = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationFailed {
                    field: KEY_CONFIDENCE_LEVEL.to_string(),
                    message: format!("expected a number, got '{raw}'"),
                }
            })?;
        }
        if let Some(raw) = lookup(KEY_INPUT_POLICY) {
            self.inference.input_policy = raw.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ConfidenceLevel::is_supported(self.inference.default_level) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.default_level".to_string(),
                message: format!(
                    "{} is not one of 0.80, 0.85, 0.90, 0.95, 0.99",
                    self.inference.default_level
                ),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }

    /// The validated default confidence level.
    pub fn default_level(&self) -> Result<ConfidenceLevel, ConfigError> {
        ConfidenceLevel::try_from(self.inference.default_level).map_err(|e| {
            ConfigError::ValidationFailed {
                field: "inference.default_level".to_string(),
                message: e.to_string(),
            }
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
