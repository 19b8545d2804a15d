//! Property-based tests for palindrome checking
//!
//! Property test case counts can be configured via `PROPTEST_CASES`
//! (default: 64).

use palcheck::{IntWidth, OverflowPolicy, check_value};
use proptest::prelude::*;
use std::env;

const DEFAULT_PROPTEST_CASES: u32 = 64;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);
    ProptestConfig::with_cases(cases)
}

/// Reference reversal through the decimal string.
fn string_reverse(value: i64) -> i128 {
    let digits: String = value.unsigned_abs().to_string().chars().rev().collect();
    let magnitude: i128 = digits.parse().unwrap();
    if value < 0 { -magnitude } else { magnitude }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_reported_palindrome_iff_reversal_equals_value(value in any::<i32>()) {
        let report = check_value(i64::from(value), IntWidth::I32, OverflowPolicy::Widen).unwrap();
        prop_assert_eq!(report.is_palindrome, report.reversed == i128::from(value));
    }

    #[test]
    fn prop_widened_reversal_matches_string_reversal(value in any::<i64>()) {
        let report = check_value(value, IntWidth::I64, OverflowPolicy::Widen).unwrap();
        prop_assert_eq!(report.reversed, string_reverse(value));
    }

    #[test]
    fn prop_mirrored_digits_are_palindromes(half in 1u32..100_000, odd in proptest::bool::ANY) {
        let left = half.to_string();
        let mut right: String = left.chars().rev().collect();
        if odd {
            right.remove(0);
        }
        let value: i64 = format!("{left}{right}").parse().unwrap();
        let report = check_value(value, IntWidth::I64, OverflowPolicy::Error).unwrap();
        prop_assert!(report.is_palindrome, "value {}", value);
        let negated = check_value(-value, IntWidth::I64, OverflowPolicy::Error).unwrap();
        prop_assert!(negated.is_palindrome);
    }

    #[test]
    fn prop_policies_agree_when_reversal_fits(value in any::<i16>()) {
        let value = i64::from(value);
        let widened = check_value(value, IntWidth::I16, OverflowPolicy::Widen).unwrap();
        let wrapped = check_value(value, IntWidth::I16, OverflowPolicy::Wrap).unwrap();
        match check_value(value, IntWidth::I16, OverflowPolicy::Error) {
            Ok(checked) => {
                prop_assert_eq!(checked.reversed, widened.reversed);
                prop_assert_eq!(wrapped.reversed, widened.reversed);
                prop_assert!(!wrapped.wrapped);
            }
            Err(_) => {
                prop_assert!(!IntWidth::I16.contains(widened.reversed));
                prop_assert!(wrapped.wrapped);
            }
        }
    }
}
