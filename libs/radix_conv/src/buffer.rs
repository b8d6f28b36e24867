use std::fmt;

use crate::Error;

/// An owned output buffer for rendered digit strings.
///
/// The buffer has a fixed logical capacity, which only changes through
/// [`try_resize`](Self::try_resize). The backing memory is reserved up front
/// so rendering never allocates.
///
/// One slot of the capacity is reserved for a terminator, so a rendering of
/// `n` characters needs a capacity of at least `n + 1`.
///
/// The content only ever consists of ASCII digits, ASCII letters and the sign
/// marker.
pub struct DigitBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl DigitBuffer {
    /// The capacity used when nothing else is configured.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Slots reserved beyond the meaningful characters.
    pub const TERMINATOR_SLOTS: usize = 1;

    /// Creates a buffer with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Creates a buffer with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            bytes: reserve(capacity)?,
            capacity,
        })
    }

    /// Changes the capacity, discarding the current content.
    ///
    /// On failure, the buffer is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the memory cannot be reserved.
    pub fn try_resize(&mut self, capacity: usize) -> Result<(), Error> {
        self.bytes = reserve(capacity)?;
        self.capacity = capacity;
        Ok(())
    }

    /// The configured capacity, including the terminator slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The amount of meaningful characters currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether a rendering of `len` characters fits.
    #[must_use]
    pub fn fits(&self, len: usize) -> bool {
        len.checked_add(Self::TERMINATOR_SLOTS)
            .is_some_and(|required| required <= self.capacity)
    }

    /// Ensures that a rendering of `len` characters fits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooBig`] if it doesn't.
    pub fn ensure_fits(&self, len: usize) -> Result<(), Error> {
        if self.fits(len) {
            Ok(())
        } else {
            Err(Error::TooBig {
                required: len.saturating_add(Self::TERMINATOR_SLOTS),
                capacity: self.capacity,
            })
        }
    }

    /// Clears the buffer and hands out exactly `len` slots to fill.
    ///
    /// The caller must have checked [`fits`](Self::fits) and must only write
    /// ASCII bytes.
    pub(crate) fn slots(&mut self, len: usize) -> &mut [u8] {
        debug_assert!(self.fits(len), "caller must check the length first");

        self.bytes.clear();
        self.bytes.resize(len, b'0');
        &mut self.bytes
    }

    /// The content in its most-significant-first layout.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The content in its most-significant-first layout.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: the buffer only ever holds ASCII bytes, see `slots`
        unsafe { str::from_utf8_unchecked(&self.bytes) }
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitBuffer")
            .field("content", &self.as_str())
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn reserve(capacity: usize) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(capacity)
        .map_err(|source| Error::AllocationFailure { capacity, source })?;
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fits_reserves_terminator() {
        let buffer = DigitBuffer::try_with_capacity(4).expect("tiny allocation");
        assert!(buffer.fits(3));
        assert!(!buffer.fits(4));
        assert!(!buffer.fits(usize::MAX));
    }

    #[test]
    fn ensure_fits_reports_sizes() {
        let buffer = DigitBuffer::try_with_capacity(4).expect("tiny allocation");
        assert_eq!(
            buffer.ensure_fits(4),
            Err(Error::TooBig {
                required: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn failed_resize_keeps_state() {
        let mut buffer = DigitBuffer::try_with_capacity(8).expect("tiny allocation");
        buffer.slots(3).copy_from_slice(b"101");

        let err = buffer.try_resize(usize::MAX).expect_err("cannot reserve usize::MAX bytes");
        assert!(matches!(err, Error::AllocationFailure { capacity: usize::MAX, .. }));
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.as_str(), "101");
    }

    #[test]
    fn resize_clears() {
        let mut buffer = DigitBuffer::new();
        buffer.slots(2).copy_from_slice(b"ff");
        buffer.try_resize(2).expect("tiny allocation");

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 2);
        assert!(buffer.fits(1));
        assert!(!buffer.fits(2));
    }
}
