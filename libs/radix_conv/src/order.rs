use std::iter::FusedIterator;
use std::slice;
use std::str::FromStr;

use crate::Error;

/// The direction in which a rendered digit string is presented.
///
/// Rendering always lays digits out most significant first. The order only
/// changes how that layout is read back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
pub enum OutputOrder {
    /// Read from the first character to the last ("little endian").
    #[serde(rename = "little", alias = "l")]
    FrontToBack,
    /// Read from the last character to the first ("big endian").
    #[default]
    #[serde(rename = "big", alias = "b")]
    BackToFront,
}

impl OutputOrder {
    /// Gets the order for its short token, `l` or `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadOutputOrder`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "l" => Ok(Self::FrontToBack),
            "b" => Ok(Self::BackToFront),
            _ => Err(Error::BadOutputOrder(token.to_owned())),
        }
    }

    /// The short token for this order.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::FrontToBack => "l",
            Self::BackToFront => "b",
        }
    }

    /// Iterates the bytes in this order.
    pub fn traverse(self, bytes: &[u8]) -> Traverse<'_> {
        Traverse {
            inner: bytes.iter(),
            order: self,
        }
    }
}

impl FromStr for OutputOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Iterator over bytes in an [`OutputOrder`].
///
/// Returned by [`OutputOrder::traverse`].
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
    inner: slice::Iter<'a, u8>,
    order: OutputOrder,
}

impl Iterator for Traverse<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            OutputOrder::FrontToBack => self.inner.next().copied(),
            OutputOrder::BackToFront => self.inner.next_back().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Traverse<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.order {
            OutputOrder::FrontToBack => self.inner.next_back().copied(),
            OutputOrder::BackToFront => self.inner.next().copied(),
        }
    }
}

impl ExactSizeIterator for Traverse<'_> {}
impl FusedIterator for Traverse<'_> {}
