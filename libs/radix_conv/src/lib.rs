//! Converts integers between numeral bases 2 through 36.
//!
//! The conversion is split into two halves:
//!
//! - [`parse_magnitude`] reads a signed digit string in some source base into
//!   a `u64` magnitude and a [`Sign`].
//! - [`render_magnitude`] writes that magnitude back out as a digit string in
//!   a target base, into a [`DigitBuffer`] with a fixed capacity.
//!
//! Both halves use the digit codec in [`digit`] for every single character.
//!
//! Most callers want a [`Converter`], which holds the [`Settings`] and the
//! output buffer and runs both halves in one call:
//!
//! ```
//! use radix_conv::{Case, Converter, OutputOrder, Radix, Settings};
//!
//! let mut converter = Converter::new(Settings {
//!     from_base: Radix::DECIMAL,
//!     to_base: Radix::HEX,
//!     case: Case::Upper,
//!     order: OutputOrder::FrontToBack,
//!     ..Settings::default()
//! })?;
//!
//! assert_eq!(converter.convert("255")?.to_string(), "FF");
//! # Ok::<(), radix_conv::Error>(())
//! ```

// for benchmarks
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use toml as _;

mod buffer;
mod convert;
mod converter;
pub mod digit;
mod error;
mod order;
mod radix;
#[cfg(test)]
mod tests;

pub use buffer::DigitBuffer;
pub use convert::{SIGN_MARKER, Sign, digit_count, parse_magnitude, render_magnitude};
pub use converter::{Converter, Rendered, Settings};
pub use digit::{Case, decode_digit, encode_digit};
pub use error::{DigitError, Error, NumberError};
pub use order::{OutputOrder, Traverse};
pub use radix::Radix;
