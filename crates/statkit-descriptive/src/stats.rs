//! Free-function entry points over raw input.
//!
//! Each function sanitizes its input once, then delegates to [`Sample`].

use statkit_core::{StatResult, Summary, ToNumeric, VarianceKind};

use crate::sample::{sanitize, Sample};

/// Arithmetic mean of the numeric elements of `data`.
pub fn mean<I>(data: I) -> StatResult<f64>
where
    I: IntoIterator,
    I::Item: ToNumeric,
{
    sanitize(data).map(|s| s.mean())
}

/// Median of the numeric elements of `data`.
pub fn median<I>(data: I) -> StatResult<f64>
where
    I: IntoIterator,
    I::Item: ToNumeric,
{
    sanitize(data).map(|s| s.median())
}

/// Variance of the numeric elements of `data`.
///
/// `kind` accepts a [`VarianceKind`] or a `bool` (`true` = sample, n - 1).
pub fn variance<I, K>(data: I, kind: K) -> StatResult<f64>
where
    I: IntoIterator,
    I::Item: ToNumeric,
    K: Into<VarianceKind>,
{
    sanitize(data)?.variance(kind.into())
}

/// Standard deviation of the numeric elements of `data`.
pub fn std_dev<I, K>(data: I, kind: K) -> StatResult<f64>
where
    I: IntoIterator,
    I::Item: ToNumeric,
    K: Into<VarianceKind>,
{
    variance(data, kind).map(f64::sqrt)
}

/// Count, mean, median, variance, standard deviation, min and max, all from
/// a single sanitization pass.
pub fn summary<I, K>(data: I, kind: K) -> StatResult<Summary>
where
    I: IntoIterator,
    I::Item: ToNumeric,
    K: Into<VarianceKind>,
{
    let sample: Sample = sanitize(data)?;
    sample.summary(kind.into())
}
