pub mod defaults;
mod descriptive_config;
mod inference_config;
mod observability_config;
mod statkit_config;

pub use descriptive_config::DescriptiveConfig;
pub use inference_config::{InferenceConfig, InputPolicy};
pub use observability_config::{ObservabilityConfig, LOG_LEVELS};
pub use statkit_config::{StatkitConfig, KEY_CONFIDENCE_LEVEL, KEY_INPUT_POLICY, KEY_SAMPLE};
