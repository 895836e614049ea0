//! Rounding modes.

use serde::{Deserialize, Serialize};

/// How discarded digits affect the last kept digit.
///
/// All modes are magnitude-relative: `Up` moves away from zero and `Down`
/// moves toward zero regardless of sign, so `-12.345` rounds to `-12.35`
/// under `HalfUp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    HalfUp,
    /// Round half toward zero.
    HalfDown,
    /// Any non-zero remainder rounds away from zero.
    Up,
    /// Truncate.
    Down,
}

impl RoundingMode {
    /// Decides whether the kept magnitude gains one unit in its last place.
    ///
    /// `first` is the first discarded digit; `rest_non_zero` tells whether
    /// any digit after it is non-zero.
    pub(crate) const fn rounds_away(self, first: u8, rest_non_zero: bool) -> bool {
        match self {
            Self::HalfUp => first >= 5,
            Self::HalfDown => first > 5 || (first == 5 && rest_non_zero),
            Self::Up => first != 0 || rest_non_zero,
            Self::Down => false,
        }
    }

    /// Returns the mode name as used in configuration files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HalfUp => "half_up",
            Self::HalfDown => "half_down",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "half_up" => Ok(Self::HalfUp),
            "half_down" => Ok(Self::HalfDown),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}
