//! # statkit-inference
//!
//! Two-sided confidence intervals for a sample mean under the normal
//! approximation, using a fixed table of z critical values.

pub mod engine;
pub mod interval;
pub mod z_table;

pub use engine::InferenceEngine;
pub use interval::{mean_confidence_interval, mean_confidence_interval_with};
pub use z_table::z_score;
