//! Mean confidence interval: `mean ± z * sqrt(s² / n)`.

use statkit_core::config::InputPolicy;
use statkit_core::constants::MIN_INTERVAL_SAMPLES;
use statkit_core::{
    ConfidenceInterval, ConfidenceLevel, StatError, StatResult, ToNumeric, VarianceKind,
};
use statkit_descriptive::{sanitize, Sample};
use tracing::debug;

use crate::z_table::z_score;

/// Confidence interval for the mean of `data` at `level` (e.g. `0.95`).
///
/// The level is checked before the data is touched. Uses the raw input
/// policy: the mean and variance are taken from the sanitized sample, while
/// the standard error divides by the raw element count.
pub fn mean_confidence_interval<I>(data: I, level: f64) -> StatResult<ConfidenceInterval>
where
    I: IntoIterator,
    I::Item: ToNumeric,
{
    let level = ConfidenceLevel::try_from(level)?;
    mean_confidence_interval_with(data, level, InputPolicy::Raw)
}

/// Confidence interval with an explicit level and input policy.
pub fn mean_confidence_interval_with<I>(
    data: I,
    level: ConfidenceLevel,
    policy: InputPolicy,
) -> StatResult<ConfidenceInterval>
where
    I: IntoIterator,
    I::Item: ToNumeric,
{
    let raw: Vec<I::Item> = data.into_iter().collect();
    if raw.len() < MIN_INTERVAL_SAMPLES {
        return Err(StatError::insufficient(MIN_INTERVAL_SAMPLES, raw.len()));
    }

    match policy {
        InputPolicy::Raw => interval_for(&sanitize(&raw)?, raw.len(), level),
        InputPolicy::Strict => {
            let sample = sanitize(strict_values(&raw)?)?;
            interval_for(&sample, sample.len(), level)
        }
        InputPolicy::Lenient => {
            let sample = sanitize(&raw)?;
            interval_for(&sample, sample.len(), level)
        }
    }
}

/// Convert every element or fail at the first one that is not numeric.
fn strict_values<T: ToNumeric>(raw: &[T]) -> StatResult<Vec<f64>> {
    raw.iter()
        .enumerate()
        .map(|(index, item)| item.to_numeric().ok_or(StatError::NonNumeric { index }))
        .collect()
}

/// `mean ± z * sqrt(s² / n)`, with `n` chosen by the input policy.
fn interval_for(
    sample: &Sample,
    n: usize,
    level: ConfidenceLevel,
) -> StatResult<ConfidenceInterval> {
    let mean = sample.mean();
    let variance = sample.variance(VarianceKind::Sample)?;
    let std_error = (variance / n as f64).sqrt();
    let z = z_score(level);
    let interval = ConfidenceInterval::around(mean, z * std_error, level);

    debug!(
        n,
        kept = sample.len(),
        mean,
        std_error,
        z,
        lower = interval.lower,
        upper = interval.upper,
        "computed mean confidence interval"
    );
    Ok(interval)
}
