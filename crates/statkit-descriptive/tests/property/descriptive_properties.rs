use proptest::prelude::*;
use statkit_core::{Value, VarianceKind};
use statkit_descriptive::*;

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
}

fn arb_poison() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        "[a-z]{1,8}".prop_map(|s| Value::Text(format!("#{s}"))),
        Just(Value::Float(f64::NAN)),
        Just(Value::Float(f64::INFINITY)),
        Just(Value::Text(String::new())),
    ]
}

/// Interleave poison elements at arbitrary positions.
fn poisoned(values: &[f64], poison: &[(usize, Value)]) -> Vec<Value> {
    let mut out: Vec<Value> = values.iter().map(|&x| Value::Float(x)).collect();
    for (pos, p) in poison {
        let at = pos % (out.len() + 1);
        out.insert(at, p.clone());
    }
    out
}

// ── Sanitize ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sanitize_is_idempotent(values in arb_values()) {
        let once = sanitize(&values).unwrap();
        let twice = sanitize(&once).unwrap();
        prop_assert_eq!(once.as_slice(), twice.as_slice());
    }

    #[test]
    fn sanitized_output_is_sorted_and_complete(values in arb_values()) {
        let sample = sanitize(&values).unwrap();
        prop_assert_eq!(sample.len(), values.len());
        prop_assert!(sample.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }
}

// ── Poison insensitivity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn poison_never_changes_results(
        values in arb_values(),
        poison in prop::collection::vec((any::<usize>(), arb_poison()), 0..16),
    ) {
        let dirty = poisoned(&values, &poison);

        prop_assert_eq!(sanitize(&dirty).unwrap(), sanitize(&values).unwrap());
        prop_assert_eq!(mean(&dirty).unwrap(), mean(&values).unwrap());
        prop_assert_eq!(median(&dirty).unwrap(), median(&values).unwrap());
        prop_assert_eq!(variance(&dirty, true), variance(&values, true));
        prop_assert_eq!(summary(&dirty, false), summary(&values, false));
    }
}

// ── Estimators ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sample_variance_exceeds_population_variance(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 2..64),
    ) {
        let sample = sanitize(&values).unwrap();
        prop_assume!(sample.max() - sample.min() > 1e-6);

        let unbiased = sample.variance(VarianceKind::Sample).unwrap();
        let biased = sample.variance(VarianceKind::Population).unwrap();
        prop_assert!(unbiased > biased, "{} <= {}", unbiased, biased);

        let n = sample.len() as f64;
        prop_assert!((unbiased * (n - 1.0) - biased * n).abs() <= 1e-6 * biased.max(1.0) * n);
    }

    #[test]
    fn median_and_mean_lie_within_range(values in arb_values()) {
        let sample = sanitize(&values).unwrap();
        let (lo, hi) = (sample.min(), sample.max());
        prop_assert!(lo <= sample.median() && sample.median() <= hi);
        let m = sample.mean();
        prop_assert!(lo - 1e-6 <= m && m <= hi + 1e-6);
    }

    #[test]
    fn variance_is_non_negative(values in prop::collection::vec(-1.0e6f64..1.0e6, 2..64)) {
        prop_assert!(variance(&values, true).unwrap() >= 0.0);
        prop_assert!(std_dev(&values, false).unwrap() >= 0.0);
    }
}
