//! Property-based tests for amounts.
//!
//! - Construction and encodings preserve the number text
//! - Rounding is idempotent
//! - Arithmetic never mutates its operands

use proptest::prelude::*;

use super::Amount;
use crate::decimal::RoundingMode;

/// Strategy to generate decimal text with up to 6 fractional digits.
fn number_text() -> impl Strategy<Value = String> {
    (any::<bool>(), 1i64..10_000_000_000, 0usize..7).prop_map(|(negative, magnitude, scale)| {
        let padded = format!("{magnitude:0>width$}", width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        let body = if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{fraction}")
        };
        if negative { format!("-{body}") } else { body }
    })
}

fn currency_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("JPY"), Just("KWD"), Just("BHD")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `number()` returns exactly the text the amount was created from.
    #[test]
    fn prop_number_preserved(text in number_text(), code in currency_code()) {
        let amount = Amount::new(&text, code).unwrap();
        prop_assert_eq!(amount.number(), text);
        prop_assert_eq!(amount.currency_code(), code);
    }

    /// Binary and JSON encodings decode to an equal amount.
    #[test]
    fn prop_encodings_preserve_amount(text in number_text(), code in currency_code()) {
        let amount = Amount::new(&text, code).unwrap();

        let decoded = Amount::from_bytes(&amount.to_bytes()).unwrap();
        prop_assert_eq!(decoded.number(), amount.number());

        let json = serde_json::to_string(&amount).unwrap();
        let decoded: Amount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.number(), amount.number());
    }

    /// Rounding a rounded amount changes nothing.
    #[test]
    fn prop_round_idempotent(text in number_text(), code in currency_code(), digits in 0u8..5) {
        let amount = Amount::new(&text, code).unwrap();
        let once = amount.round();
        prop_assert_eq!(once.round().number(), once.number());

        for mode in [RoundingMode::HalfUp, RoundingMode::HalfDown, RoundingMode::Up, RoundingMode::Down] {
            let once = amount.round_to(digits, mode);
            prop_assert_eq!(once.round_to(digits, mode).number(), once.number());
        }
    }

    /// Operands keep their value after every operation.
    #[test]
    fn prop_operands_unchanged(a in number_text(), b in number_text()) {
        let x = Amount::new(&a, "USD").unwrap();
        let y = Amount::new(&b, "USD").unwrap();

        let _ = x.add(&y).unwrap();
        let _ = x.sub(&y).unwrap();
        let _ = x.mul(&b).unwrap();
        let _ = x.div(&b).unwrap();
        let _ = x.convert("EUR", &b).unwrap();
        let _ = x.round();

        prop_assert_eq!(x.number(), a);
        prop_assert_eq!(y.number(), b);
    }

    /// Adding then subtracting the same amount restores the value.
    #[test]
    fn prop_add_sub_inverse(a in number_text(), b in number_text()) {
        let x = Amount::new(&a, "EUR").unwrap();
        let y = Amount::new(&b, "EUR").unwrap();
        prop_assert!(x.add(&y).unwrap().sub(&y).unwrap().equal(&x));
    }
}
