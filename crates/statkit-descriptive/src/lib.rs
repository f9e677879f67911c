//! # statkit-descriptive
//!
//! Descriptive statistics over contaminated numeric input.
//!
//! Every operation first runs the raw input through [`sanitize`], which drops
//! elements without a finite numeric reading and sorts the rest. The resulting
//! [`Sample`] is the only thing the statistics are ever computed from.

pub mod engine;
pub mod sample;
pub mod stats;

pub use engine::DescriptiveEngine;
pub use sample::{sanitize, Sample};
pub use stats::{mean, median, std_dev, summary, variance};
