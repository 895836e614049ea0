//! Command definitions and their execution.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use coinage_core::{Amount, CurrencyDisplay, CurrencyInfo, Locale, RoundingMode, currency};
use coinage_shared::{AppConfig, AppError, AppResult};

#[derive(Debug, Parser)]
#[command(name = "coinage", version)]
#[command(about = "Exact currency amounts and locale-aware formatting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format an amount for a locale
    Format {
        /// Decimal number, e.g. 1245.988
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// ISO 4217 currency code
        currency: String,
        /// Locale identifier (defaults to configuration)
        #[arg(long)]
        locale: Option<String>,
        /// Currency marker: symbol, code or none
        #[arg(long)]
        display: Option<CurrencyDisplay>,
        /// Minimum fractional digits
        #[arg(long)]
        min_digits: Option<u8>,
        /// Maximum fractional digits
        #[arg(long)]
        max_digits: Option<u8>,
        /// Disable grouping separators
        #[arg(long)]
        no_grouping: bool,
        /// Prefix non-negative amounts with a plus sign
        #[arg(long)]
        plus_sign: bool,
    },

    /// Parse localized text into an amount
    Parse {
        /// Localized text, e.g. "€1.234,59"
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Expected ISO 4217 currency code
        currency: String,
        /// Locale identifier (defaults to configuration)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Convert an amount at a given rate
    Convert {
        /// Decimal number
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// Source currency code
        currency: String,
        /// Target currency code
        target: String,
        /// Conversion rate
        rate: String,
        /// Round the result to the target currency's digits
        #[arg(long)]
        round: bool,
    },

    /// Round an amount
    Round {
        /// Decimal number
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// ISO 4217 currency code
        currency: String,
        /// Fractional digits (defaults to the currency's digits)
        #[arg(long)]
        digits: Option<u8>,
        /// Rounding mode: half_up, half_down, up or down
        #[arg(long)]
        mode: Option<RoundingMode>,
    },

    /// Show currency metadata
    Info {
        /// ISO 4217 currency code
        currency: String,
        /// Locale used for the symbol (defaults to configuration)
        #[arg(long)]
        locale: Option<String>,
    },

    /// List supported currency codes
    List,
}

#[derive(Serialize)]
struct CurrencyReport {
    #[serde(flatten)]
    info: CurrencyInfo,
    symbol: &'static str,
    locale: String,
}

/// Executes `command` and returns the text to print.
pub fn run(command: Command, config: &AppConfig) -> AppResult<String> {
    match command {
        Command::Format {
            number,
            currency,
            locale,
            display,
            min_digits,
            max_digits,
            no_grouping,
            plus_sign,
        } => {
            let amount = Amount::new(&number, &currency)?;
            let mut formatter = config.format.formatter(locale.as_deref());
            if let Some(display) = display {
                formatter.currency_display = display;
            }
            if min_digits.is_some() {
                formatter.min_digits = min_digits;
            }
            if let Some(max_digits) = max_digits {
                formatter.max_digits = max_digits;
            }
            formatter.no_grouping |= no_grouping;
            formatter.add_plus_sign |= plus_sign;
            Ok(formatter.format(&amount))
        }
        Command::Parse {
            text,
            currency,
            locale,
        } => {
            let formatter = config.format.formatter(locale.as_deref());
            Ok(formatter.parse(&text, &currency)?.to_string())
        }
        Command::Convert {
            number,
            currency,
            target,
            rate,
            round,
        } => {
            let amount = Amount::new(&number, &currency)?;
            let converted = amount.convert(&target, &rate)?;
            info!(from = %amount, to = %converted, rate, "Converted amount");
            let result = if round { converted.round() } else { converted };
            Ok(result.to_string())
        }
        Command::Round {
            number,
            currency,
            digits,
            mode,
        } => {
            let amount = Amount::new(&number, &currency)?;
            let digits = digits
                .or_else(|| currency::digits(amount.currency_code()))
                .unwrap_or(0);
            let mode = mode.unwrap_or(config.rounding.mode);
            Ok(amount.round_to(digits, mode).to_string())
        }
        Command::Info { currency, locale } => {
            let info = currency::info(&currency)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown currency code {currency:?}")))?;
            let locale = Locale::new(locale.as_deref().unwrap_or(&config.format.locale));
            let report = CurrencyReport {
                info,
                symbol: currency::symbol(info.code, &locale).unwrap_or(info.code),
                locale: locale.to_string(),
            };
            serde_json::to_string_pretty(&report).map_err(|err| AppError::Internal(err.to_string()))
        }
        Command::List => Ok(currency::currency_codes().join("\n")),
    }
}
