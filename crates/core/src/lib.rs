//! Exact currency amounts for Coinage.
//!
//! This crate contains pure money logic with ZERO I/O dependencies.
//! Arithmetic is exact decimal arithmetic; nothing passes through floats.
//!
//! # Modules
//!
//! - `decimal` - Arbitrary-precision decimal values and rounding modes
//! - `amount` - Currency-tagged amounts and their encodings
//! - `currency` - ISO 4217 registry and localized symbols
//! - `locale` - Locale identifiers with CLDR parent fallback
//! - `format` - Locale-aware formatting and parsing
//! - `error` - Error types shared by the modules above

pub mod amount;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod format;
pub mod locale;

pub use amount::Amount;
pub use currency::CurrencyInfo;
pub use decimal::{DecimalError, DecimalValue, MAX_DIVISION_PRECISION, RoundingMode};
pub use error::{MoneyError, MoneyResult};
pub use format::{CurrencyDisplay, Formatter};
pub use locale::Locale;
