use crate::digit::{ascii_digit, decode_digit};
use crate::{Case, DigitBuffer, Error, NumberError, Radix};

/// The character that marks a negative number.
pub const SIGN_MARKER: char = '-';

/// The sign attached to a magnitude.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Characters the sign takes up when rendered.
    const fn marker_len(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => SIGN_MARKER.len_utf8(),
        }
    }
}

/// Parses a digit string, most significant digit first, into its magnitude and
/// sign.
///
/// A leading [`SIGN_MARKER`] makes the number negative. Every other character
/// must be a digit in `radix`.
///
/// # Errors
///
/// Returns [`Error::BadNumber`] if there are no digits or any character isn't
/// a digit in `radix`. This takes precedence over [`Error::Overflow`], which is
/// returned if all digits are valid but the magnitude exceeds [`u64::MAX`].
pub fn parse_magnitude(digits: &str, radix: Radix) -> Result<(u64, Sign), Error> {
    let (sign, body) = match digits.strip_prefix(SIGN_MARKER) {
        Some(body) => (Sign::Negative, body),
        None => (Sign::Positive, digits),
    };

    if body.is_empty() {
        return Err(NumberError::Empty.into());
    }

    let base = radix.get_u64();

    // `None` once the magnitude overflowed. Keep scanning though, so invalid
    // digits are still reported.
    let mut magnitude = Some(0u64);
    for (index, ch) in body.chars().enumerate() {
        let digit = decode_digit(ch, radix).map_err(|_| NumberError::InvalidDigit {
            ch,
            position: sign.marker_len() + index + 1,
            radix,
        })?;

        magnitude = magnitude
            .and_then(|m| m.checked_mul(base))
            .and_then(|m| m.checked_add(u64::from(digit)));
    }

    let magnitude = magnitude.ok_or(Error::Overflow)?;
    Ok((magnitude, sign))
}

/// Counts the digits needed to write `magnitude` in `radix` without leading
/// zeros.
///
/// Zero takes exactly one digit.
#[must_use]
pub fn digit_count(magnitude: u64, radix: Radix) -> usize {
    let base = radix.get_u64();

    let mut count = 1;
    let mut rest = magnitude / base;
    while rest != 0 {
        count += 1;
        rest /= base;
    }

    count
}

/// Renders a magnitude and sign into `buffer` as a digit string in `radix`,
/// most significant digit first.
///
/// Returns the rendered text, which is also what the buffer holds afterwards.
///
/// # Errors
///
/// Returns [`Error::TooBig`] if the digits and sign don't fit the buffer. In
/// that case the buffer is left untouched.
pub fn render_magnitude(
    buffer: &mut DigitBuffer,
    magnitude: u64,
    sign: Sign,
    radix: Radix,
    case: Case,
) -> Result<&str, Error> {
    let digits = digit_count(magnitude, radix);
    let marker = sign.marker_len();
    buffer.ensure_fits(marker + digits)?;

    let base = radix.get_u64();
    let slots = buffer.slots(marker + digits);
    let (sign_slot, digit_slots) = slots.split_at_mut(marker);

    // fill from the least significant end, `rest % base` is always a valid digit
    let mut rest = magnitude;
    for slot in digit_slots.iter_mut().rev() {
        *slot = ascii_digit(rest % base, case);
        rest /= base;
    }

    debug_assert!(rest == 0, "digit_count must cover the whole magnitude");

    if sign.is_negative() {
        SIGN_MARKER.encode_utf8(sign_slot);
    }

    Ok(buffer.as_str())
}
