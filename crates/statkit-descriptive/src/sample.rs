use statkit_core::constants::MIN_VARIANCE_SAMPLES;
use statkit_core::{StatError, StatResult, Summary, ToNumeric, VarianceKind};
use tracing::debug;

/// A sanitized sample: finite values, sorted ascending, never empty.
///
/// The only way to build one is [`sanitize`], so holding a `Sample` means the
/// cleaning step has already run.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample(Vec<f64>);

/// Convert every element to `f64`, drop the ones that fail, and sort.
///
/// Fails with [`StatError::EmptyInput`] if nothing survives. Sanitizing an
/// already clean, sorted sequence returns it unchanged.
pub fn sanitize<I>(data: I) -> StatResult<Sample>
where
    I: IntoIterator,
    I::Item: ToNumeric,
{
    let mut seen = 0usize;
    let mut values: Vec<f64> = data
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|item| item.to_numeric())
        .collect();

    if values.is_empty() {
        debug!(seen, "no numeric values survived sanitization");
        return Err(StatError::EmptyInput);
    }

    let dropped = seen - values.len();
    if dropped > 0 {
        debug!(dropped, kept = values.len(), "dropped non-numeric elements");
    }

    values.sort_by(f64::total_cmp);
    Ok(Sample(values))
}

impl Sample {
    /// Number of values. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Smallest value (first in sorted order).
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// Largest value (last in sorted order).
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Middle value, or the average of the two central values for even counts.
    pub fn median(&self) -> f64 {
        let n = self.len();
        let mid = n / 2;
        if n % 2 == 1 {
            self.0[mid]
        } else {
            (self.0[mid - 1] + self.0[mid]) / 2.0
        }
    }

    /// Sum of squared deviations from the mean over the chosen divisor.
    ///
    /// Fails with [`StatError::InsufficientData`] below two values.
    pub fn variance(&self, kind: VarianceKind) -> StatResult<f64> {
        let n = self.len();
        if n < MIN_VARIANCE_SAMPLES {
            return Err(StatError::insufficient(MIN_VARIANCE_SAMPLES, n));
        }
        let mean = self.mean();
        let squares: f64 = self.0.iter().map(|x| (x - mean).powi(2)).sum();
        Ok(squares / kind.divisor(n))
    }

    /// Square root of [`Sample::variance`].
    pub fn std_dev(&self, kind: VarianceKind) -> StatResult<f64> {
        self.variance(kind).map(f64::sqrt)
    }

    /// All descriptive statistics of this one sample.
    pub fn summary(&self, kind: VarianceKind) -> StatResult<Summary> {
        let variance = self.variance(kind)?;
        Ok(Summary {
            count: self.len(),
            mean: self.mean(),
            median: self.median(),
            variance,
            std_dev: variance.sqrt(),
            min: self.min(),
            max: self.max(),
        })
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Sample {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
