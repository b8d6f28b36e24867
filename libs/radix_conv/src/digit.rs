//! The digit codec: maps single characters to digit values and back.
//!
//! Decoding accepts `0`-`9` for values 0 to 9 and the latin letters in either
//! case for values 10 to 35. Encoding spells letters in the requested
//! [`Case`].

use crate::{DigitError, Error, Radix};

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter case used for digit values of 10 and above.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Minuscule, `a` through `z`.
    #[default]
    Lower,
    /// Majuscule, `A` through `Z`.
    Upper,
}

impl Case {
    /// Gets the case for a numeric flag: `0` is [`Lower`](Self::Lower), `1` is
    /// [`Upper`](Self::Upper).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadCase`] for any other value.
    pub fn from_flag(flag: u32) -> Result<Self, Error> {
        match flag {
            0 => Ok(Self::Lower),
            1 => Ok(Self::Upper),
            _ => Err(Error::BadCase(flag.to_string())),
        }
    }

    /// Parses a numeric flag written in decimal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadCase`] if the text isn't `0` or `1`.
    pub fn from_flag_str(text: &str) -> Result<Self, Error> {
        match text.parse::<u32>() {
            Ok(flag) => Self::from_flag(flag),
            Err(_) => Err(Error::BadCase(text.to_owned())),
        }
    }

    /// The numeric flag for this case.
    #[must_use]
    pub const fn flag(self) -> u32 {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
        }
    }

    pub(crate) const fn digits(self) -> &'static [u8; 36] {
        match self {
            Self::Lower => LOWER_DIGITS,
            Self::Upper => UPPER_DIGITS,
        }
    }
}

/// Decodes a single character into its digit value in `radix`.
///
/// Letters are accepted in either case.
///
/// # Errors
///
/// Returns [`DigitError::NotADigit`] if `c` isn't an ASCII digit or letter, or
/// if its value is not below `radix`.
pub fn decode_digit(c: char, radix: Radix) -> Result<u32, DigitError> {
    c.to_digit(radix.get())
        .ok_or(DigitError::NotADigit { ch: c, radix })
}

/// Encodes a digit value as a character, spelling letters in `case`.
///
/// # Errors
///
/// Returns [`DigitError::OutOfRange`] if `value` is not below `radix`.
pub fn encode_digit(value: u32, radix: Radix, case: Case) -> Result<char, DigitError> {
    if value < radix.get() {
        Ok(char::from(ascii_digit(u64::from(value), case)))
    } else {
        Err(DigitError::OutOfRange { value, radix })
    }
}

/// Gets the ASCII byte for a digit value.
///
/// This is the unchecked path of [`encode_digit`]: `value` must already be
/// below the target radix, and so below 36.
#[expect(clippy::cast_possible_truncation, reason = "digit values are below 36")]
pub(crate) fn ascii_digit(value: u64, case: Case) -> u8 {
    debug_assert!(value < 36, "digit value out of range");
    case.digits()[value as usize]
}
