//! Localized currency symbols.
//!
//! Each currency has a default (English) symbol plus locale-specific
//! overrides. A lookup walks the locale's parent chain and uses the first
//! override it finds.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

use super::registry;
use crate::locale::Locale;

struct SymbolData {
    default: &'static str,
    overrides: &'static [(&'static str, &'static [&'static str])],
}

/// `(code, default symbol, [(symbol, locales)])`. Currencies not listed use
/// their code as the symbol.
static SYMBOL_DATA: &[(&str, &str, &[(&str, &[&str])])] = &[
    ("AUD", "A$", &[("$", &["en-AU"]), ("$AU", &["fr"])]),
    ("BRL", "R$", &[]),
    ("CAD", "CA$", &[("$", &["en-CA", "fr-CA"]), ("$CA", &["fr"])]),
    ("CNY", "CN¥", &[("¥", &["zh"])]),
    ("CZK", "CZK", &[("Kč", &["cs"])]),
    ("DKK", "DKK", &[("kr.", &["da"])]),
    ("EUR", "€", &[]),
    ("GBP", "£", &[("£GB", &["fr"])]),
    ("HKD", "HK$", &[("$", &["en-HK", "zh-Hant-HK"])]),
    ("HUF", "HUF", &[("Ft", &["hu"])]),
    ("ILS", "₪", &[]),
    ("INR", "₹", &[]),
    ("JPY", "¥", &[("￥", &["ja"]), ("JP¥", &["zh"])]),
    ("KRW", "₩", &[]),
    ("MXN", "MX$", &[("$", &["es-MX"])]),
    ("NOK", "NOK", &[("kr", &["nb"])]),
    ("NZD", "NZ$", &[("$", &["en-NZ"])]),
    ("PHP", "₱", &[]),
    ("PLN", "PLN", &[("zł", &["pl"])]),
    ("RUB", "RUB", &[("₽", &["ru"])]),
    ("SEK", "SEK", &[("kr", &["sv"])]),
    ("TRY", "TRY", &[("₺", &["tr"])]),
    ("TWD", "NT$", &[("$", &["zh-Hant"])]),
    ("UAH", "UAH", &[("₴", &["uk"])]),
    (
        "USD",
        "$",
        &[
            ("US$", &["en-001", "es", "nl", "pt", "sr", "zh"]),
            ("$US", &["fr"]),
            ("USD", &["es-419"]),
            ("$", &["en-150", "es-US"]),
        ],
    ),
    ("VND", "₫", &[]),
    ("XAF", "FCFA", &[]),
    ("XCD", "EC$", &[]),
    ("XOF", "F\u{202f}CFA", &[]),
    ("XPF", "CFPF", &[]),
];

static SYMBOLS: Lazy<HashMap<&'static str, SymbolData>> = Lazy::new(|| {
    SYMBOL_DATA
        .iter()
        .map(|&(code, default, overrides)| (code, SymbolData { default, overrides }))
        .collect()
});

impl SymbolData {
    fn for_locale(&self, locale_id: &str) -> Option<&'static str> {
        self.overrides
            .iter()
            .find(|(_, locales)| locales.contains(&locale_id))
            .map(|&(symbol, _)| symbol)
    }
}

/// Returns the symbol for `code` as used in `locale`.
///
/// Walks the locale's parent chain for a locale-specific symbol and falls
/// back to the currency's default symbol (the code itself for currencies
/// without one). Returns `None` for unknown codes.
#[must_use]
pub fn symbol(code: &str, locale: &Locale) -> Option<&'static str> {
    let code = registry::canonical_code(code)?;
    let Some(data) = SYMBOLS.get(code) else {
        return Some(code);
    };

    let found = locale
        .ancestors()
        .find_map(|ancestor| data.for_locale(&ancestor.to_string()));
    if found.is_none() {
        trace!(code, locale = %locale, "Using default currency symbol");
    }
    Some(found.unwrap_or(data.default))
}
