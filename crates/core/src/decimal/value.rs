//! Exact base-10 numbers of arbitrary precision.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use super::magnitude;
use super::rounding::RoundingMode;

/// Significant digits kept by [`DecimalValue::try_div`] when the quotient
/// does not terminate. Further digits are truncated.
pub const MAX_DIVISION_PRECISION: usize = 34;

/// Errors produced by decimal parsing and division.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The text does not match `-?[0-9]+(\.[0-9]+)?`.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// A sign, a digit sequence and a scale.
///
/// The represented number is `(-1)^sign * coefficient * 10^-scale`. No binary
/// floating point is involved at any stage. Equality and ordering follow the
/// mathematical value, so `1.5 == 1.50`, while [`Display`](fmt::Display)
/// keeps the scale (`"1.50"`).
#[derive(Debug, Clone, Default)]
pub struct DecimalValue {
    negative: bool,
    coefficient: Vec<u8>,
    scale: u32,
}

impl DecimalValue {
    /// Creates a value from an integer coefficient and a scale.
    ///
    /// `DecimalValue::new(1999, 2)` is `19.99`.
    #[must_use]
    pub fn new(coefficient: i64, scale: u32) -> Self {
        Self::from_parts(
            coefficient < 0,
            digits_of(coefficient.unsigned_abs().into()),
            scale,
        )
    }

    /// The value zero with scale 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    fn from_parts(negative: bool, coefficient: Vec<u8>, scale: u32) -> Self {
        let coefficient = magnitude::trim(coefficient);
        Self {
            negative: negative && !coefficient.is_empty(),
            coefficient,
            scale,
        }
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_empty()
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Returns true if the value is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.coefficient.clone(), self.scale)
    }

    /// Returns the coefficient with the decimal point removed, if it fits.
    ///
    /// `12.34` yields `1234`.
    #[must_use]
    pub fn unscaled_i64(&self) -> Option<i64> {
        let magnitude = self.coefficient.iter().try_fold(0i128, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(i128::from(digit))
        })?;
        i64::try_from(if self.is_negative() { -magnitude } else { magnitude }).ok()
    }

    /// Coefficient zero-padded to `scale`, which must be at least `self.scale`.
    fn aligned(&self, scale: u32) -> Vec<u8> {
        magnitude::shift(&self.coefficient, scale - self.scale)
    }

    /// Divides `self` by `divisor`.
    ///
    /// Long division starts at the scale `max(self.scale - divisor.scale, 0)`
    /// and adds fractional digits until the remainder is zero or the quotient
    /// holds [`MAX_DIVISION_PRECISION`] significant digits.
    pub fn try_div(&self, divisor: &Self) -> Result<Self, DecimalError> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let negative = self.is_negative() != divisor.is_negative();
        let mut scale = self.scale.saturating_sub(divisor.scale);
        let dividend = magnitude::shift(&self.coefficient, scale + divisor.scale - self.scale);
        let (mut quotient, mut remainder) = magnitude::div_rem(&dividend, &divisor.coefficient);

        while !remainder.is_empty() {
            if quotient.len() >= MAX_DIVISION_PRECISION {
                debug!(
                    dividend = %self,
                    divisor = %divisor,
                    precision = MAX_DIVISION_PRECISION,
                    "Non-terminating quotient truncated"
                );
                break;
            }
            let digit = magnitude::division_step(&mut remainder, 0, &divisor.coefficient);
            if !(quotient.is_empty() && digit == 0) {
                quotient.push(digit);
            }
            scale += 1;
        }

        Ok(Self::from_parts(negative, quotient, scale))
    }

    /// Rounds to `digits` fractional digits, at most `u8::MAX`.
    ///
    /// When `digits` is not below the current scale the value is zero-padded
    /// instead. Only the magnitude is rounded; the sign is kept.
    #[must_use]
    pub fn round_to(&self, digits: u8, mode: RoundingMode) -> Self {
        let digits = u32::from(digits);
        if digits >= self.scale {
            return Self::from_parts(self.is_negative(), self.aligned(digits), digits);
        }

        let dropped = (self.scale - digits) as usize;
        let len = self.coefficient.len();
        let split = len.saturating_sub(dropped);
        let kept = &self.coefficient[..split];

        // Digits past the cutoff, left-padded when the coefficient is shorter.
        let mut discarded = vec![0u8; dropped.saturating_sub(len)];
        discarded.extend_from_slice(&self.coefficient[split..]);
        let rest_non_zero = discarded[1..].iter().any(|&d| d != 0);

        let rounded = if mode.rounds_away(discarded[0], rest_non_zero) {
            magnitude::add(kept, &[1])
        } else {
            kept.to_vec()
        };
        Self::from_parts(self.is_negative(), rounded, digits)
    }

    /// Splits the magnitude into its integer and fractional digit strings.
    ///
    /// `-1234.50` yields `("1234", "50")`; the integer part is `"0"` for
    /// values below one.
    pub(crate) fn integer_and_fraction(&self) -> (String, String) {
        let scale = self.scale as usize;
        let width = self.coefficient.len().max(scale + 1);
        let padded: String = std::iter::repeat_n(0u8, width - self.coefficient.len())
            .chain(self.coefficient.iter().copied())
            .map(|d| char::from(b'0' + d))
            .collect();
        let (integer, fraction) = padded.split_at(width - scale);
        (integer.to_string(), fraction.to_string())
    }
}

fn digits_of(value: u128) -> Vec<u8> {
    value.to_string().bytes().map(|b| b - b'0').collect()
}

impl FromStr for DecimalValue {
    type Err = DecimalError;

    /// Parses `-?[0-9]+(\.[0-9]+)?`.
    ///
    /// Leading integer zeros are dropped; trailing fractional zeros are kept
    /// in the scale. A parsed `-0` keeps its sign for display.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::InvalidNumber(text.to_string());
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };
        if !is_digits(integer) || fraction.is_some_and(|f| !is_digits(f)) {
            return Err(invalid());
        }

        let fraction = fraction.unwrap_or_default();
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let coefficient = integer
            .bytes()
            .chain(fraction.bytes())
            .map(|b| b - b'0')
            .collect();

        Ok(Self {
            negative,
            coefficient: magnitude::trim(coefficient),
            scale,
        })
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (integer, fraction) = self.integer_and_fraction();
        let sign = if self.negative { "-" } else { "" };
        if fraction.is_empty() {
            f.pad(&format!("{sign}{integer}"))
        } else {
            f.pad(&format!("{sign}{integer}.{fraction}"))
        }
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let scale = self.scale.max(other.scale);
                let ordering = magnitude::cmp(&self.aligned(scale), &other.aligned(scale));
                if negative { ordering.reverse() } else { ordering }
            }
        }
    }
}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalValue {}

impl Add for &DecimalValue {
    type Output = DecimalValue;

    /// Exact sum; the result scale is the larger operand scale.
    fn add(self, rhs: Self) -> DecimalValue {
        let scale = self.scale.max(rhs.scale);
        let (a, b) = (self.aligned(scale), rhs.aligned(scale));
        let (a_negative, b_negative) = (self.is_negative(), rhs.is_negative());

        if a_negative == b_negative {
            return DecimalValue::from_parts(a_negative, magnitude::add(&a, &b), scale);
        }
        match magnitude::cmp(&a, &b) {
            Ordering::Less => DecimalValue::from_parts(b_negative, magnitude::sub(&b, &a), scale),
            _ => DecimalValue::from_parts(a_negative, magnitude::sub(&a, &b), scale),
        }
    }
}

impl Sub for &DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: Self) -> DecimalValue {
        self + &(-rhs)
    }
}

impl Mul for &DecimalValue {
    type Output = DecimalValue;

    /// Exact product; the result scale is the sum of the operand scales.
    fn mul(self, rhs: Self) -> DecimalValue {
        DecimalValue::from_parts(
            self.is_negative() != rhs.is_negative(),
            magnitude::mul(&self.coefficient, &rhs.coefficient),
            self.scale + rhs.scale,
        )
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> DecimalValue {
        DecimalValue::from_parts(!self.is_negative(), self.coefficient.clone(), self.scale)
    }
}

impl Add for DecimalValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for DecimalValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for DecimalValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        let mantissa = value.mantissa();
        Self::from_parts(
            mantissa < 0,
            digits_of(mantissa.unsigned_abs()),
            value.scale(),
        )
    }
}

impl TryFrom<&DecimalValue> for Decimal {
    type Error = rust_decimal::Error;

    /// Fails when the value needs more than 28 fractional digits or 96 bits.
    fn try_from(value: &DecimalValue) -> Result<Self, Self::Error> {
        Decimal::from_str_exact(&value.to_string())
    }
}

impl Serialize for DecimalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DecimalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
