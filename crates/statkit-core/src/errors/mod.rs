mod config_error;
mod stat_error;

pub use config_error::ConfigError;
pub use stat_error::StatError;

/// Result alias used across every statkit crate.
pub type StatResult<T> = Result<T, StatError>;
