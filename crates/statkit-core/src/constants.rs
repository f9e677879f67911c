/// statkit version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of sanitized values needed for variance and standard deviation.
pub const MIN_VARIANCE_SAMPLES: usize = 2;

/// Minimum number of raw elements needed for a mean confidence interval.
pub const MIN_INTERVAL_SAMPLES: usize = 1;

/// Confidence levels with a tabulated z critical value, ascending.
pub const SUPPORTED_CONFIDENCE_LEVELS: [f64; 5] = [0.80, 0.85, 0.90, 0.95, 0.99];

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "STATKIT_LOG";
