//! # statkit
//!
//! Descriptive statistics and a normal-approximation confidence interval for
//! the mean, over input that may contain non-numeric entries.
//!
//! ```
//! use statkit::{mean, mean_confidence_interval, summary, Value};
//!
//! let data = vec![Value::Int(1), Value::Int(2), Value::from("x"), Value::Int(4)];
//! assert!((mean(&data).unwrap() - 7.0 / 3.0).abs() < 1e-12);
//!
//! let s = summary([1, 2, 3, 4, 5], true).unwrap();
//! assert_eq!((s.count, s.min, s.max), (5, 1.0, 5.0));
//! assert_eq!(s.variance, 2.5);
//!
//! let ci = mean_confidence_interval([10, 10, 10], 0.99).unwrap();
//! assert_eq!(ci.bounds(), (10.0, 10.0));
//! ```

pub use statkit_core::config::{self, InputPolicy, StatkitConfig};
pub use statkit_core::constants;
pub use statkit_core::tracing_setup;
pub use statkit_core::{
    ConfidenceInterval, ConfidenceLevel, ConfigError, StatError, StatResult, Summary, ToNumeric,
    Value, VarianceKind,
};
pub use statkit_descriptive::{
    mean, median, sanitize, std_dev, summary, variance, DescriptiveEngine, Sample,
};
pub use statkit_inference::{
    mean_confidence_interval, mean_confidence_interval_with, z_score, InferenceEngine,
};
