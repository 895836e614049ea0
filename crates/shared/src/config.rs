//! Application configuration management.
//!
//! Sources are layered, later ones winning:
//! `config/default.toml`, `config/{RUN_MODE}.toml`, then `COINAGE__*`
//! environment variables (`COINAGE__FORMAT__LOCALE=de-CH`).

use std::collections::HashMap;

use coinage_core::format::DEFAULT_MAX_DIGITS;
use coinage_core::{CurrencyDisplay, Formatter, Locale, RoundingMode};
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Formatter defaults.
    #[serde(default)]
    pub format: FormatConfig,
    /// Rounding defaults.
    #[serde(default)]
    pub rounding: RoundingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Formatter defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Locale identifier, e.g. `en-US`.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Currency marker style.
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    /// Minimum fractional digits. Unset uses the currency's digits.
    #[serde(default)]
    pub min_digits: Option<u8>,
    /// Maximum fractional digits.
    #[serde(default = "default_max_digits")]
    pub max_digits: u8,
    /// Disables grouping separators.
    #[serde(default)]
    pub no_grouping: bool,
    /// Prefixes non-negative amounts with `+`.
    #[serde(default)]
    pub add_plus_sign: bool,
    /// Custom symbols keyed by currency code.
    #[serde(default)]
    pub symbols: HashMap<String, String>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_max_digits() -> u8 {
    DEFAULT_MAX_DIGITS
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency_display: CurrencyDisplay::default(),
            min_digits: None,
            max_digits: default_max_digits(),
            no_grouping: false,
            add_plus_sign: false,
            symbols: HashMap::new(),
        }
    }
}

impl FormatConfig {
    /// Builds a formatter for `locale`, or the configured locale when `None`.
    #[must_use]
    pub fn formatter(&self, locale: Option<&str>) -> Formatter {
        let mut formatter = Formatter::new(Locale::new(locale.unwrap_or(&self.locale)));
        formatter.currency_display = self.currency_display;
        formatter.min_digits = self.min_digits;
        formatter.max_digits = self.max_digits;
        formatter.no_grouping = self.no_grouping;
        formatter.add_plus_sign = self.add_plus_sign;
        formatter.symbol_overrides.clone_from(&self.symbols);
        formatter
    }
}

/// Rounding defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RoundingConfig {
    /// Mode used when none is given.
    #[serde(default)]
    pub mode: RoundingMode,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emits JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "coinage=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COINAGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
