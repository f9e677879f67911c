use statkit_core::{ConfidenceLevel, StatResult};

/// Two-sided standard normal critical values, one per supported level.
pub const Z_TABLE: [(ConfidenceLevel, f64); 5] = [
    (ConfidenceLevel::P80, 1.2816),
    (ConfidenceLevel::P85, 1.4395),
    (ConfidenceLevel::P90, 1.6449),
    (ConfidenceLevel::P95, 1.9600),
    (ConfidenceLevel::P99, 2.5758),
];

/// z critical value for `level`.
pub fn z_score(level: ConfidenceLevel) -> f64 {
    // Table rows are in the same order as the enum's discriminants.
    Z_TABLE[level as usize].1
}

/// z critical value for a raw probability such as `0.95`.
///
/// Fails with `UnsupportedConfidenceLevel` for anything outside the table.
pub fn lookup(level: f64) -> StatResult<f64> {
    ConfidenceLevel::try_from(level).map(z_score)
}
