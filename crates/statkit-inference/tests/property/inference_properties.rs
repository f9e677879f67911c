use proptest::prelude::*;
use statkit_core::config::InputPolicy;
use statkit_core::{ConfidenceLevel, StatError};
use statkit_inference::*;

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e4f64..1.0e4, 2..64)
}

fn arb_level() -> impl Strategy<Value = ConfidenceLevel> {
    prop::sample::select(ConfidenceLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn lower_never_exceeds_upper(values in arb_values(), level in arb_level()) {
        let ci = mean_confidence_interval(&values, level.value()).unwrap();
        prop_assert!(ci.lower <= ci.upper);
        prop_assert!(ci.contains(ci.midpoint()));
    }

    #[test]
    fn interval_widens_with_level(values in arb_values()) {
        let widths: Vec<f64> = ConfidenceLevel::ALL
            .iter()
            .map(|l| mean_confidence_interval(&values, l.value()).unwrap().width())
            .collect();
        prop_assert!(widths.windows(2).all(|w| w[0] <= w[1]), "{:?}", widths);
    }

    #[test]
    fn unsupported_levels_always_fail(values in arb_values(), level in 0.0f64..1.0) {
        prop_assume!(!ConfidenceLevel::is_supported(level));
        prop_assert_eq!(
            mean_confidence_interval(&values, level),
            Err(StatError::UnsupportedConfidenceLevel { level })
        );
    }

    #[test]
    fn policies_agree_on_clean_input(values in arb_values(), level in arb_level()) {
        let raw = mean_confidence_interval_with(&values, level, InputPolicy::Raw);
        prop_assert_eq!(
            &raw,
            &mean_confidence_interval_with(&values, level, InputPolicy::Strict)
        );
        prop_assert_eq!(
            &raw,
            &mean_confidence_interval_with(&values, level, InputPolicy::Lenient)
        );
    }

    #[test]
    fn raw_policy_narrows_by_the_poison_share(
        values in arb_values(),
        poison in 1usize..8,
        level in arb_level(),
    ) {
        let mut dirty: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        dirty.extend(std::iter::repeat(None).take(poison));

        let raw = mean_confidence_interval_with(&dirty, level, InputPolicy::Raw).unwrap();
        let lenient = mean_confidence_interval_with(&dirty, level, InputPolicy::Lenient).unwrap();
        let scale = (values.len() as f64 / dirty.len() as f64).sqrt();
        prop_assert!((raw.margin() - lenient.margin() * scale).abs() <= 1e-6 * lenient.margin().max(1.0));
        prop_assert!((raw.midpoint() - lenient.midpoint()).abs() <= 1e-6 * lenient.midpoint().abs().max(1.0));
    }
}
