//! Property-based tests for the decimal engine.
//!
//! - Parse/display round trip for canonical text
//! - Exactness of addition, subtraction and multiplication
//! - Rounding idempotence and bounds

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{DecimalValue, RoundingMode};

/// Strategy to generate canonical decimal text (no leading zeros).
fn canonical_text() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u64..1_000_000_000_000, 0usize..6).prop_map(|(negative, magnitude, scale)| {
        let digits = magnitude.to_string();
        let body = if scale == 0 {
            digits
        } else {
            let padded = format!("{digits:0>width$}", width = scale + 1);
            let (integer, fraction) = padded.split_at(padded.len() - scale);
            format!("{integer}.{fraction}")
        };
        if negative { format!("-{body}") } else { body }
    })
}

/// Strategy to generate values small enough for `rust_decimal` to cross-check.
fn small_decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..8).prop_map(|(m, s)| Decimal::new(m, s))
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Canonical text survives parse and display unchanged.
    #[test]
    fn prop_parse_display_round_trip(text in canonical_text()) {
        let value: DecimalValue = text.parse().unwrap();
        prop_assert_eq!(value.to_string(), text);
    }

    /// Sums, differences and products agree with `rust_decimal`.
    #[test]
    fn prop_arithmetic_matches_rust_decimal(a in small_decimal(), b in small_decimal()) {
        let (x, y) = (DecimalValue::from(a), DecimalValue::from(b));
        prop_assert_eq!(&x + &y, DecimalValue::from(a + b));
        prop_assert_eq!(&x - &y, DecimalValue::from(a - b));
        prop_assert_eq!(&x * &y, DecimalValue::from(a * b));
    }

    /// Subtraction undoes addition exactly.
    #[test]
    fn prop_add_then_sub_is_identity(a in canonical_text(), b in canonical_text()) {
        let x: DecimalValue = a.parse().unwrap();
        let y: DecimalValue = b.parse().unwrap();
        prop_assert_eq!(&(&x + &y) - &y, x);
    }

    /// Rounding twice to the same digits changes nothing.
    #[test]
    fn prop_round_is_idempotent(
        text in canonical_text(),
        digits in 0u8..6,
        mode in rounding_mode(),
    ) {
        let value: DecimalValue = text.parse().unwrap();
        let once = value.round_to(digits, mode);
        let twice = once.round_to(digits, mode);
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    /// Rounding moves the value by less than one unit in the last place.
    #[test]
    fn prop_round_stays_within_one_unit(
        text in canonical_text(),
        digits in 0u8..6,
        mode in rounding_mode(),
    ) {
        let value: DecimalValue = text.parse().unwrap();
        let rounded = value.round_to(digits, mode);
        let unit = DecimalValue::new(1, u32::from(digits));
        let distance = (&rounded - &value).abs();
        prop_assert!(distance < unit, "{} rounded to {}", value, rounded);
        prop_assert!(rounded.abs() <= &value.abs() + &unit);
    }

    /// Exact quotients multiply back to the dividend.
    #[test]
    fn prop_div_by_power_of_two_is_exact(text in canonical_text(), power in 0u32..8) {
        let value: DecimalValue = text.parse().unwrap();
        let divisor = DecimalValue::from(2i64.pow(power));
        let quotient = value.try_div(&divisor).unwrap();
        prop_assert_eq!(&quotient * &divisor, value);
    }
}
