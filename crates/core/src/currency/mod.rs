//! Currency metadata lookups.
//!
//! Read-only, process-wide data built once from embedded tables.

pub mod registry;
pub mod symbols;

pub use registry::{
    CLDR_VERSION, CurrencyInfo, currency_codes, digits, info, is_valid, numeric_code,
};
pub use symbols::symbol;
