use proptest::prelude::*;
use statkit_core::{ToNumeric, Value};

proptest! {
    #[test]
    fn finite_floats_convert_to_themselves(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert_eq!(x.to_numeric(), Some(x));
        prop_assert_eq!(Value::Float(x).to_numeric(), Some(x));
    }

    #[test]
    fn formatted_numbers_parse_back(x in -1.0e12f64..1.0e12) {
        let text = x.to_string();
        prop_assert_eq!(text.as_str().to_numeric(), Some(x));
    }

    #[test]
    fn alphabetic_text_never_converts(s in "[a-df-hj-mo-z]{1,12}") {
        // Excludes the letters of "inf", "nan" and exponents.
        prop_assert_eq!(s.to_numeric(), None);
        prop_assert!(!Value::Text(s).is_numeric());
    }

    #[test]
    fn integers_convert_exactly(i in -(1i64 << 52)..(1i64 << 52)) {
        prop_assert_eq!(Value::Int(i).to_numeric(), Some(i as f64));
    }
}
