//! Currency-tagged monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! [`Amount`] wraps an exact [`DecimalValue`] and never rounds implicitly:
//! products and conversions keep every digit until the caller rounds.

mod codec;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::fmt;

use crate::currency::{self, registry};
use crate::decimal::{DecimalError, DecimalValue, RoundingMode};
use crate::error::{MoneyError, MoneyResult};

/// An exact decimal number in an ISO 4217 currency.
///
/// Amounts are immutable. Arithmetic returns new amounts and leaves both
/// operands untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    number: DecimalValue,
    currency_code: &'static str,
}

impl Amount {
    /// Creates an amount from decimal text and a currency code.
    ///
    /// The number is validated before the currency code.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Amount;
    ///
    /// let amount = Amount::new("24.49", "USD").unwrap();
    /// assert_eq!(amount.to_string(), "24.49 USD");
    /// assert_eq!(amount.number(), "24.49");
    /// assert_eq!(amount.currency_code(), "USD");
    /// ```
    pub fn new(number: &str, currency_code: &str) -> MoneyResult<Self> {
        Self::parse_with_op(number, currency_code, "Amount::new")
    }

    pub(crate) fn parse_with_op(
        number: &str,
        currency_code: &str,
        op: &'static str,
    ) -> MoneyResult<Self> {
        let number = parse_number(number, op)?;
        Self::with_op(number, currency_code, op)
    }

    fn with_op(number: DecimalValue, currency_code: &str, op: &'static str) -> MoneyResult<Self> {
        let currency_code = registry::canonical_code(currency_code)
            .ok_or_else(|| MoneyError::invalid_currency_code(op, currency_code))?;
        Ok(Self {
            number,
            currency_code,
        })
    }

    /// Creates an amount from an already parsed value.
    pub fn from_value(number: DecimalValue, currency_code: &str) -> MoneyResult<Self> {
        Self::with_op(number, currency_code, "Amount::from_value")
    }

    /// Creates an amount from a count of minor units (e.g. cents).
    ///
    /// `from_minor_units(2099, "USD")` is `20.99 USD`.
    pub fn from_minor_units(units: i64, currency_code: &str) -> MoneyResult<Self> {
        const OP: &str = "Amount::from_minor_units";
        let digits = currency::digits(currency_code)
            .ok_or_else(|| MoneyError::invalid_currency_code(OP, currency_code))?;
        Self::with_op(DecimalValue::new(units, u32::from(digits)), currency_code, OP)
    }

    /// The number as text, with its scale preserved.
    #[must_use]
    pub fn number(&self) -> String {
        self.number.to_string()
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> &DecimalValue {
        &self.number
    }

    /// The ISO 4217 currency code.
    #[must_use]
    pub const fn currency_code(&self) -> &'static str {
        self.currency_code
    }

    /// Returns `self + other`. Both amounts must share a currency.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.require_same_currency(other, "Amount::add")?;
        Ok(self.with_number(&self.number + &other.number))
    }

    /// Returns `self - other`. Both amounts must share a currency.
    pub fn sub(&self, other: &Self) -> MoneyResult<Self> {
        self.require_same_currency(other, "Amount::sub")?;
        Ok(self.with_number(&self.number - &other.number))
    }

    /// Multiplies by a decimal factor, keeping full precision.
    ///
    /// ```
    /// use coinage_core::Amount;
    ///
    /// let amount = Amount::new("20.99", "USD").unwrap();
    /// assert_eq!(amount.mul("0.20").unwrap().to_string(), "4.1980 USD");
    /// ```
    pub fn mul(&self, factor: &str) -> MoneyResult<Self> {
        let factor = parse_number(factor, "Amount::mul")?;
        Ok(self.with_number(&self.number * &factor))
    }

    /// Divides by a decimal divisor. A zero divisor is an invalid number.
    pub fn div(&self, divisor: &str) -> MoneyResult<Self> {
        const OP: &str = "Amount::div";
        let parsed = parse_number(divisor, OP)?;
        let number = self
            .number
            .try_div(&parsed)
            .map_err(|_: DecimalError| MoneyError::invalid_number(OP, divisor))?;
        Ok(self.with_number(number))
    }

    /// Converts to another currency at the given rate.
    ///
    /// The target code is validated before the rate. The result keeps the
    /// full precision of the multiplication.
    ///
    /// ```
    /// use coinage_core::Amount;
    ///
    /// let amount = Amount::new("20.99", "USD").unwrap();
    /// let converted = amount.convert("EUR", "0.91").unwrap();
    /// assert_eq!(converted.to_string(), "19.1009 EUR");
    /// assert_eq!(converted.round().to_string(), "19.10 EUR");
    /// ```
    pub fn convert(&self, currency_code: &str, rate: &str) -> MoneyResult<Self> {
        const OP: &str = "Amount::convert";
        let currency_code = registry::canonical_code(currency_code)
            .ok_or_else(|| MoneyError::invalid_currency_code(OP, currency_code))?;
        let rate = parse_number(rate, OP)?;
        Ok(Self {
            number: &self.number * &rate,
            currency_code,
        })
    }

    /// Rounds to the currency's minor-unit digits, half up.
    #[must_use]
    pub fn round(&self) -> Self {
        self.round_to(self.default_digits(), RoundingMode::HalfUp)
    }

    /// Rounds to `digits` fractional digits with the given mode.
    #[must_use]
    pub fn round_to(&self, digits: u8, mode: RoundingMode) -> Self {
        self.with_number(self.number.round_to(digits, mode))
    }

    /// Returns the amount as a whole number of minor units.
    ///
    /// Extra precision is rounded half up first, so `12.3564 USD` is `1236`.
    /// Returns `None` when the count does not fit an `i64`.
    #[must_use]
    pub fn to_minor_units(&self) -> Option<i64> {
        self.round().number.unscaled_i64()
    }

    /// Compares two amounts of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.require_same_currency(other, "Amount::compare")?;
        Ok(self.number.cmp(&other.number))
    }

    /// Returns true if both amounts have the same currency and value.
    ///
    /// Amounts in different currencies are never equal.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.currency_code == other.currency_code && self.number == other.number
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.number.is_positive()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.number.is_negative()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    fn default_digits(&self) -> u8 {
        currency::digits(self.currency_code).unwrap_or(0)
    }

    fn with_number(&self, number: DecimalValue) -> Self {
        Self {
            number,
            currency_code: self.currency_code,
        }
    }

    fn require_same_currency(&self, other: &Self, op: &'static str) -> MoneyResult<()> {
        if self.currency_code == other.currency_code {
            Ok(())
        } else {
            Err(MoneyError::mismatch(op, self, other))
        }
    }
}

fn parse_number(text: &str, op: &'static str) -> MoneyResult<DecimalValue> {
    text.parse()
        .map_err(|_| MoneyError::invalid_number(op, text))
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency_code)
    }
}
