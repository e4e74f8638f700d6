//! Property-based tests for scalar coercion and the environment overlay.
//!
//! Test coverage:
//! - Integer/float literals produced by formatting a value always coerce
//!   back to that value.
//! - Literals that are not valid for a kind always produce a coercion error
//!   carrying the literal verbatim.
//! - The overlay assigns exactly the fields whose computed variable exists.

use std::collections::HashMap;

use proptest::prelude::*;

use tote_config::coerce::{parse_boolean, parse_float, parse_integer};
use tote_config::{apply_environment, visitable};

#[derive(Default)]
struct Numbers {
    count: i64,
    ratio: f64,
    label: String,
}
visitable!(Numbers {
    count,
    ratio,
    label
});

proptest! {
    #[test]
    fn prop_integer_literals_round_trip(value in any::<i64>()) {
        prop_assert_eq!(parse_integer(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn prop_finite_float_literals_round_trip(value in proptest::num::f64::NORMAL) {
        let parsed = parse_float(&format!("{value:?}")).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn prop_alphabetic_literals_fail_numeric_kinds(literal in "[a-zA-Z]{1,12}") {
        // f64 parsing accepts the special spellings inf/infinity/nan.
        let lowered = literal.to_lowercase();
        prop_assume!(!matches!(lowered.as_str(), "inf" | "infinity" | "nan"));

        // Single-letter boolean aliases are still invalid integers/floats.
        let int_err = parse_integer(&literal).unwrap_err();
        prop_assert_eq!(int_err.literal.as_str(), literal.as_str());
        prop_assert!(parse_float(&literal).is_err());
    }

    #[test]
    fn prop_boolean_rejects_non_alias_literals(literal in "[a-z]{2,10}") {
        prop_assume!(!matches!(literal.as_str(), "true" | "false"));
        prop_assert!(parse_boolean(&literal).is_err());
    }

    #[test]
    fn prop_overlay_assigns_exactly_the_present_variables(
        count in any::<i64>(),
        set_count in any::<bool>(),
        label in "[a-zA-Z0-9 ]{0,24}",
        set_label in any::<bool>(),
    ) {
        let mut env = HashMap::new();
        if set_count {
            env.insert("APP_COUNT".to_string(), count.to_string());
        }
        if set_label {
            env.insert("APP_LABEL".to_string(), label.clone());
        }

        let mut config = Numbers {
            count: -1,
            ratio: 0.5,
            label: "initial".to_string(),
        };
        apply_environment(&mut config, &env, &["APP"]).unwrap();

        prop_assert_eq!(config.count, if set_count { count } else { -1 });
        prop_assert_eq!(config.label, if set_label { label } else { "initial".to_string() });
        // Never mentioned in the environment, never touched.
        prop_assert_eq!(config.ratio, 0.5);
    }
}
