//! Locale-aware rendering and parsing of amounts.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data::{MarkerPosition, NumberFormat, number_format};
use crate::amount::Amount;
use crate::currency;
use crate::decimal::RoundingMode;
use crate::error::MoneyResult;
use crate::locale::Locale;

/// Default upper bound on displayed fractional digits.
pub const DEFAULT_MAX_DIGITS: u8 = 6;

const NBSP: &str = "\u{a0}";

/// Characters removed from input before parsing.
const PARSE_IGNORED: [&str; 5] = [NBSP, "\u{202f}", " ", "\u{200e}", "\u{200f}"];

/// How the currency is shown next to the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplay {
    /// Localized symbol, e.g. `€`.
    #[default]
    Symbol,
    /// ISO 4217 code, e.g. `EUR`.
    Code,
    /// No currency marker.
    None,
}

impl CurrencyDisplay {
    /// Returns the string representation of the display mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Code => "code",
            Self::None => "none",
        }
    }
}

impl fmt::Display for CurrencyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symbol" => Ok(Self::Symbol),
            "code" => Ok(Self::Code),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown currency display: {s}")),
        }
    }
}

/// Formats and parses amounts for one locale.
///
/// The public fields may be changed between calls.
///
/// # Example
///
/// ```
/// use coinage_core::{Amount, Formatter, Locale};
///
/// let mut formatter = Formatter::new(Locale::new("tr"));
/// let amount = Amount::new("1245.988", "EUR").unwrap();
/// assert_eq!(formatter.format(&amount), "€1.245,988");
///
/// formatter.max_digits = 2;
/// assert_eq!(formatter.format(&amount), "€1.245,99");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: Locale,
    number_format: NumberFormat,
    /// Minimum fractional digits. `None` uses the currency's digits.
    pub min_digits: Option<u8>,
    /// Maximum fractional digits. Wins over `min_digits` when they conflict.
    pub max_digits: u8,
    /// Disables grouping separators.
    pub no_grouping: bool,
    /// Prefixes non-negative amounts with `+`.
    pub add_plus_sign: bool,
    /// Currency marker style.
    pub currency_display: CurrencyDisplay,
    /// Symbols used instead of the localized ones, keyed by currency code.
    pub symbol_overrides: HashMap<String, String>,
}

impl Formatter {
    /// Creates a formatter with default options for `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let number_format = number_format(&locale);
        Self {
            locale,
            number_format,
            min_digits: None,
            max_digits: DEFAULT_MAX_DIGITS,
            no_grouping: false,
            add_plus_sign: false,
            currency_display: CurrencyDisplay::Symbol,
            symbol_overrides: HashMap::new(),
        }
    }

    /// The locale this formatter was created for.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The resolved separators and marker pattern.
    #[must_use]
    pub const fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Renders `amount` for display.
    ///
    /// The amount is shown with its own number of fractional digits, raised
    /// to `min_digits` and capped at `max_digits`, rounding half up.
    #[must_use]
    pub fn format(&self, amount: &Amount) -> String {
        let code = amount.currency_code();
        let min = self
            .min_digits
            .or_else(|| currency::digits(code))
            .unwrap_or(0);
        let digits = u8::try_from(amount.value().scale())
            .unwrap_or(u8::MAX)
            .max(min)
            .min(self.max_digits);
        let value = amount.value().round_to(digits, RoundingMode::HalfUp);

        let (integer, fraction) = value.integer_and_fraction();
        let mut number = if self.no_grouping {
            integer
        } else {
            group(&integer, self.number_format.grouping_separator)
        };
        if !fraction.is_empty() {
            number.push_str(self.number_format.decimal_separator);
            number.push_str(&fraction);
        }

        let sign = if value.is_negative() {
            "-"
        } else if self.add_plus_sign {
            "+"
        } else {
            ""
        };
        format!("{sign}{}", self.place_marker(&number, &self.marker(code)))
    }

    /// Parses localized text into an amount in `currency_code`.
    ///
    /// Symbols, the currency code, spaces and grouping separators are
    /// removed and the decimal separator is mapped to `.`. The currency is
    /// always `currency_code`, whatever marker the text carries.
    ///
    /// ```
    /// use coinage_core::{Formatter, Locale};
    ///
    /// let formatter = Formatter::new(Locale::new("tr"));
    /// let amount = formatter.parse("€1.234,59", "EUR").unwrap();
    /// assert_eq!(amount.to_string(), "1234.59 EUR");
    /// ```
    pub fn parse(&self, text: &str, currency_code: &str) -> MoneyResult<Amount> {
        let normalized = self.normalize(text, currency_code);
        let number = normalized.strip_prefix('+').unwrap_or(&normalized);
        Amount::parse_with_op(number, currency_code, "Formatter::parse").inspect_err(|err| {
            debug!(text, locale = %self.locale, error = %err, "Failed to parse amount");
        })
    }

    fn marker(&self, code: &'static str) -> String {
        match self.currency_display {
            CurrencyDisplay::Symbol => self.symbol(code).to_string(),
            CurrencyDisplay::Code => code.to_string(),
            CurrencyDisplay::None => String::new(),
        }
    }

    fn symbol<'a>(&'a self, code: &'a str) -> &'a str {
        self.symbol_overrides
            .get(code)
            .map(String::as_str)
            .or_else(|| currency::symbol(code, &self.locale))
            .unwrap_or(code)
    }

    fn place_marker(&self, number: &str, marker: &str) -> String {
        if marker.is_empty() {
            return number.to_string();
        }
        let edge = match self.number_format.marker_position {
            MarkerPosition::Prefix => marker.chars().next_back(),
            MarkerPosition::Suffix => marker.chars().next(),
        };
        // Letters never touch digits directly: `KWD 12.000`, not `KWD12.000`.
        let separator = if self.number_format.marker_spaced || edge.is_some_and(char::is_alphabetic) {
            NBSP
        } else {
            ""
        };
        match self.number_format.marker_position {
            MarkerPosition::Prefix => format!("{marker}{separator}{number}"),
            MarkerPosition::Suffix => format!("{number}{separator}{marker}"),
        }
    }

    /// Rewrites `text` in a single left-to-right pass, so that swapping `.`
    /// and `,` between locales never double-replaces.
    fn normalize(&self, text: &str, currency_code: &str) -> String {
        let mut markers: Vec<&str> = vec![currency_code];
        if let Some(symbol) = self.symbol_overrides.get(currency_code) {
            markers.push(symbol.as_str());
        }
        if let Some(symbol) = currency::symbol(currency_code, &self.locale) {
            markers.push(symbol);
        }
        markers.sort_by_key(|marker| std::cmp::Reverse(marker.len()));

        // Markers go first: symbols such as `kr.` contain separator characters.
        let mut replacements: Vec<(&str, &str)> =
            markers.into_iter().map(|marker| (marker, "")).collect();
        replacements.push((self.number_format.decimal_separator, "."));
        replacements.push((self.number_format.grouping_separator, ""));
        replacements.extend(PARSE_IGNORED.iter().map(|ignored| (*ignored, "")));

        let mut normalized = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            let matched = replacements
                .iter()
                .find(|(pattern, _)| !pattern.is_empty() && rest.starts_with(pattern));
            if let Some((pattern, replacement)) = matched {
                normalized.push_str(replacement);
                rest = &rest[pattern.len()..];
            } else {
                normalized.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        normalized
    }
}

/// Inserts `separator` between groups of three digits, from the right.
fn group(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
