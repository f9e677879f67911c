//! # statkit-core
//!
//! Foundation crate for the statkit statistics library.
//! Defines raw input values, numeric conversion, errors, models, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use config::StatkitConfig;
pub use errors::{ConfigError, StatError, StatResult};
pub use models::{ConfidenceInterval, ConfidenceLevel, Summary, VarianceKind};
pub use value::{ToNumeric, Value};
