//! Error types for amount construction and arithmetic.
//!
//! Every error carries the name of the operation that produced it so callers
//! can tell `Amount::mul` failures apart from `Formatter::parse` failures
//! without inspecting the input text.

use thiserror::Error;

use crate::amount::Amount;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors returned by validating constructors and amount operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The text is not a valid decimal number, or a divisor was zero.
    #[error("{op}: invalid number {number:?}")]
    InvalidNumber {
        /// Originating operation.
        op: &'static str,
        /// The rejected number text.
        number: String,
    },

    /// The currency code is malformed or not present in the registry.
    #[error("{op}: invalid currency code {currency_code:?}")]
    InvalidCurrencyCode {
        /// Originating operation.
        op: &'static str,
        /// The rejected currency code.
        currency_code: String,
    },

    /// A binary operation was attempted across two currencies.
    #[error("{op}: amounts {a} and {b} have mismatched currencies")]
    Mismatch {
        /// Originating operation.
        op: &'static str,
        /// Left-hand operand.
        a: Box<Amount>,
        /// Right-hand operand.
        b: Box<Amount>,
    },
}

impl MoneyError {
    pub(crate) fn invalid_number(op: &'static str, number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            op,
            number: number.into(),
        }
    }

    pub(crate) fn invalid_currency_code(op: &'static str, currency_code: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode {
            op,
            currency_code: currency_code.into(),
        }
    }

    pub(crate) fn mismatch(op: &'static str, a: &Amount, b: &Amount) -> Self {
        Self::Mismatch {
            op,
            a: Box::new(a.clone()),
            b: Box::new(b.clone()),
        }
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::InvalidNumber { op, .. }
            | Self::InvalidCurrencyCode { op, .. }
            | Self::Mismatch { op, .. } => *op,
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNumber { .. } => "INVALID_NUMBER",
            Self::InvalidCurrencyCode { .. } => "INVALID_CURRENCY_CODE",
            Self::Mismatch { .. } => "CURRENCY_MISMATCH",
        }
    }
}
