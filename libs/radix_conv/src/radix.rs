use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A numeral base in the range `2..=36`.
///
/// Construction always validates the range, so every other part of the crate
/// may rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize)]
#[serde(try_from = "u32")]
pub struct Radix(u32);

impl Radix {
    /// The smallest supported base.
    pub const MIN: Self = Self(2);
    /// The largest supported base.
    ///
    /// Digits above `9` are spelled with latin letters, which run out at `z`.
    pub const MAX: Self = Self(36);

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);

    /// Creates a new radix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadBase`] if `value` is outside `2..=36`.
    pub fn new(value: u32) -> Result<Self, Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::BadBase(value.to_string()))
        }
    }

    /// Gets the numeric value of the base.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn get_u64(self) -> u64 {
        u64::from(self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parses a base written in decimal.
impl FromStr for Radix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(value) => Self::new(value),
            Err(_) => Err(Error::BadBase(s.to_owned())),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
