//! Property-based tests for formatting.
//!
//! - Parsing formatted output restores the amount
//! - Formatting never panics for any locale in the table

use proptest::prelude::*;

use super::{CurrencyDisplay, Formatter};
use crate::amount::Amount;
use crate::locale::Locale;

fn locale_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en"),
        Just("en-GB"),
        Just("de"),
        Just("de-CH"),
        Just("fr"),
        Just("es-MX"),
        Just("pt"),
        Just("tr"),
        Just("sr-Latn-RS"),
        Just("ja"),
    ]
}

fn currency_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("JPY"), Just("CHF"), Just("KWD")]
}

fn display() -> impl Strategy<Value = CurrencyDisplay> {
    prop_oneof![
        Just(CurrencyDisplay::Symbol),
        Just(CurrencyDisplay::Code),
        Just(CurrencyDisplay::None),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Parsing the formatted text yields an equal amount when no digits were cut.
    #[test]
    fn prop_format_parse_round_trip(
        locale in locale_id(),
        code in currency_code(),
        display in display(),
        units in -10_000_000_000i64..10_000_000_000,
        no_grouping in any::<bool>(),
    ) {
        let mut formatter = Formatter::new(Locale::new(locale));
        formatter.currency_display = display;
        formatter.no_grouping = no_grouping;
        let amount = Amount::from_minor_units(units, code).unwrap();

        let text = formatter.format(&amount);
        let parsed = formatter.parse(&text, code).unwrap();
        prop_assert!(parsed.equal(&amount), "{} -> {} -> {}", amount, text, parsed);
    }

    /// The plus sign is accepted back by the parser.
    #[test]
    fn prop_plus_sign_round_trip(units in 0i64..1_000_000, locale in locale_id()) {
        let mut formatter = Formatter::new(Locale::new(locale));
        formatter.add_plus_sign = true;
        let amount = Amount::from_minor_units(units, "EUR").unwrap();

        let text = formatter.format(&amount);
        prop_assert!(text.starts_with('+'));
        prop_assert!(formatter.parse(&text, "EUR").unwrap().equal(&amount));
    }
}
