//! Locale-aware currency formatting.
//!
//! [`Formatter`] renders an [`Amount`](crate::Amount) with the separators and
//! currency marker placement of its locale, and parses such text back.

pub mod data;
pub mod formatter;

#[cfg(test)]
mod props;

pub use data::{MarkerPosition, NumberFormat, number_format};
pub use formatter::{CurrencyDisplay, DEFAULT_MAX_DIGITS, Formatter};
