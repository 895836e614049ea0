//! Per-locale number formatting conventions.
//!
//! Each entry gives the decimal and grouping separators and where the
//! currency marker goes. Locales without an entry inherit from their
//! nearest ancestor, and `en` is used when the chain has none.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::locale::Locale;

/// Where the currency marker sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPosition {
    /// Marker before the number: `€1.245,99`.
    Prefix,
    /// Marker after the number: `1.245,99 €`.
    Suffix,
}

/// Separators and currency pattern for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberFormat {
    /// Separates the integer and fractional digits.
    pub decimal_separator: &'static str,
    /// Separates groups of three integer digits.
    pub grouping_separator: &'static str,
    /// Marker placement.
    pub marker_position: MarkerPosition,
    /// Whether a no-break space always separates marker and number.
    pub marker_spaced: bool,
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

const fn prefix(decimal: &'static str, grouping: &'static str, spaced: bool) -> NumberFormat {
    NumberFormat {
        decimal_separator: decimal,
        grouping_separator: grouping,
        marker_position: MarkerPosition::Prefix,
        marker_spaced: spaced,
    }
}

const fn suffix(decimal: &'static str, grouping: &'static str) -> NumberFormat {
    NumberFormat {
        decimal_separator: decimal,
        grouping_separator: grouping,
        marker_position: MarkerPosition::Suffix,
        marker_spaced: true,
    }
}

const EN: NumberFormat = prefix(".", ",", false);

static NUMBER_FORMAT_DATA: &[(&str, NumberFormat)] = &[
    ("cs", suffix(",", NBSP)),
    ("da", suffix(",", ".")),
    ("de", suffix(",", ".")),
    ("de-AT", prefix(",", NBSP, true)),
    ("de-CH", prefix(".", "’", true)),
    ("en", EN),
    ("en-150", suffix(",", ".")),
    ("en-CH", prefix(".", "’", true)),
    ("es", suffix(",", ".")),
    ("es-419", prefix(".", ",", false)),
    ("fr", suffix(",", NNBSP)),
    ("fr-CA", suffix(",", NBSP)),
    ("fr-CH", suffix(",", NNBSP)),
    ("hu", suffix(",", NBSP)),
    ("it", suffix(",", ".")),
    ("ja", prefix(".", ",", false)),
    ("ko", prefix(".", ",", false)),
    ("nb", suffix(",", NBSP)),
    ("nl", prefix(",", ".", true)),
    ("pl", suffix(",", NBSP)),
    ("pt", prefix(",", ".", true)),
    ("pt-PT", suffix(",", NBSP)),
    ("ru", suffix(",", NBSP)),
    ("sr", suffix(",", ".")),
    ("sr-Latn", suffix(",", ".")),
    ("sv", suffix(",", NBSP)),
    ("tr", prefix(",", ".", false)),
    ("uk", suffix(",", NBSP)),
    ("zh", prefix(".", ",", false)),
];

static NUMBER_FORMATS: Lazy<HashMap<&'static str, NumberFormat>> =
    Lazy::new(|| NUMBER_FORMAT_DATA.iter().copied().collect());

/// Returns the number format for `locale`, walking its parent chain.
#[must_use]
pub fn number_format(locale: &Locale) -> NumberFormat {
    locale
        .ancestors()
        .find_map(|ancestor| NUMBER_FORMATS.get(ancestor.to_string().as_str()).copied())
        .unwrap_or(EN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", ".", ",", MarkerPosition::Prefix)]
    #[case("en-US", ".", ",", MarkerPosition::Prefix)]
    #[case("", ".", ",", MarkerPosition::Prefix)]
    #[case("tr", ",", ".", MarkerPosition::Prefix)]
    #[case("de-DE", ",", ".", MarkerPosition::Suffix)]
    #[case("de-AT", ",", NBSP, MarkerPosition::Prefix)]
    #[case("fr-FR", ",", NNBSP, MarkerPosition::Suffix)]
    #[case("es-AR", ".", ",", MarkerPosition::Prefix)]
    #[case("en-DE", ",", ".", MarkerPosition::Suffix)]
    #[case("sr-Cyrl-RS", ",", ".", MarkerPosition::Suffix)]
    #[case("pt-AO", ",", NBSP, MarkerPosition::Suffix)]
    #[case("xx", ".", ",", MarkerPosition::Prefix)]
    fn test_number_format_resolution(
        #[case] locale: &str,
        #[case] decimal: &str,
        #[case] grouping: &str,
        #[case] position: MarkerPosition,
    ) {
        let format = number_format(&Locale::new(locale));
        assert_eq!(format.decimal_separator, decimal);
        assert_eq!(format.grouping_separator, grouping);
        assert_eq!(format.marker_position, position);
    }

    #[test]
    fn test_separators_differ() {
        for (id, format) in NUMBER_FORMAT_DATA {
            assert_ne!(format.decimal_separator, format.grouping_separator, "{id}");
        }
    }
}
