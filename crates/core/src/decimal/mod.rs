//! Exact decimal arithmetic.
//!
//! This module implements the numeric engine under [`Amount`](crate::Amount):
//! - Arbitrary-precision values stored as decimal digit sequences
//! - Exact addition, subtraction and multiplication
//! - Long division with a bounded working precision
//! - Magnitude-relative rounding modes

mod magnitude;
pub mod rounding;
pub mod value;

#[cfg(test)]
mod props;

pub use rounding::RoundingMode;
pub use value::{DecimalError, DecimalValue, MAX_DIVISION_PRECISION};
