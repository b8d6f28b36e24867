use std::collections::TryReserveError;

use crate::Radix;

/// Errors returned by conversions and their configuration.
///
/// None of these are transient; each reflects a defect in the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The digit string is not a number in the source base.
    #[error(transparent)]
    BadNumber(#[from] NumberError),
    /// The number is valid but its magnitude does not fit in a `u64`.
    #[error("number is larger than {}", u64::MAX)]
    Overflow,
    /// The rendered digits don't fit the output buffer.
    #[error("output needs a buffer of {required} but it only holds {capacity}")]
    TooBig { required: usize, capacity: usize },
    /// A base outside of `2..=36` was requested.
    #[error("base `{0}` is out of the supported range ({min}-{max})", min = Radix::MIN, max = Radix::MAX)]
    BadBase(String),
    /// A case flag other than `0` or `1` was requested.
    #[error("case `{0}` is invalid, `0` is minuscule and `1` is majuscule")]
    BadCase(String),
    /// An output order other than `l` or `b` was requested.
    #[error("output order `{0}` is invalid, it is either `l` (little endian) or `b` (big endian)")]
    BadOutputOrder(String),
    /// The output buffer could not be resized.
    #[error("cannot resize the output buffer to {capacity}")]
    AllocationFailure {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Why a digit string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// There are no digits, only an optional sign.
    #[error("number has no digits")]
    Empty,
    /// A character is not a digit in the source base.
    ///
    /// `position` counts characters from 1, including the sign.
    #[error("`{ch}` at position {position} is not a digit in base {radix}")]
    InvalidDigit {
        ch: char,
        position: usize,
        radix: Radix,
    },
}

/// Errors of the single-digit codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigitError {
    #[error("`{ch}` is not a digit in base {radix}")]
    NotADigit { ch: char, radix: Radix },
    #[error("{value} is not a digit value in base {radix}")]
    OutOfRange { value: u32, radix: Radix },
}
