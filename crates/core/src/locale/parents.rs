//! Irregular CLDR parent locales.
//!
//! Most locales inherit by truncation (`sr-Cyrl-RS` -> `sr-Cyrl` -> `sr`).
//! The locales below skip that chain. Locales whose CLDR parent is the root
//! map to `en`, the root of this model.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static PARENT_LOCALE_DATA: &[(&str, &str)] = &[
    ("az-Arab", "en"),
    ("az-Cyrl", "en"),
    ("bs-Cyrl", "en"),
    ("en-150", "en-001"),
    ("en-AG", "en-001"),
    ("en-AU", "en-001"),
    ("en-BE", "en-001"),
    ("en-CA", "en-001"),
    ("en-CH", "en-150"),
    ("en-DE", "en-150"),
    ("en-GB", "en-001"),
    ("en-HK", "en-001"),
    ("en-IE", "en-001"),
    ("en-IN", "en-001"),
    ("en-NZ", "en-001"),
    ("en-SG", "en-001"),
    ("en-ZA", "en-001"),
    ("es-AR", "es-419"),
    ("es-BO", "es-419"),
    ("es-CL", "es-419"),
    ("es-CO", "es-419"),
    ("es-CR", "es-419"),
    ("es-EC", "es-419"),
    ("es-MX", "es-419"),
    ("es-PE", "es-419"),
    ("es-US", "es-419"),
    ("es-UY", "es-419"),
    ("es-VE", "es-419"),
    ("pt-AO", "pt-PT"),
    ("pt-CH", "pt-PT"),
    ("pt-CV", "pt-PT"),
    ("pt-LU", "pt-PT"),
    ("pt-MZ", "pt-PT"),
    ("sr-Latn", "en"),
    ("uz-Arab", "en"),
    ("uz-Cyrl", "en"),
    ("zh-Hant", "en"),
    ("zh-Hant-MO", "zh-Hant-HK"),
];

static PARENT_LOCALES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PARENT_LOCALE_DATA.iter().copied().collect());

/// Returns the irregular parent of the canonical locale id, if any.
pub(crate) fn irregular_parent(locale_id: &str) -> Option<&'static str> {
    PARENT_LOCALES.get(locale_id).copied()
}
