use std::fmt::{self, Write as _};

use crate::{
    Case, DigitBuffer, Error, OutputOrder, Radix, Traverse, parse_magnitude, render_magnitude,
};

/// Everything that configures a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The base numbers are read in.
    pub from_base: Radix,
    /// The base numbers are written in.
    pub to_base: Radix,
    /// The case for digits of 10 and above.
    pub case: Case,
    /// The presentation order of the written digits.
    pub order: OutputOrder,
    /// The output buffer capacity, including the terminator slot.
    pub capacity: usize,
}

impl Settings {
    /// Validates raw configuration values.
    ///
    /// `case` is a flag as accepted by [`Case::from_flag`] and `order` a token
    /// as accepted by [`OutputOrder::from_token`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadBase`], [`Error::BadCase`] or
    /// [`Error::BadOutputOrder`] for the first invalid value.
    pub fn from_raw(
        from_base: u32,
        to_base: u32,
        case: u32,
        order: &str,
        capacity: usize,
    ) -> Result<Self, Error> {
        Ok(Self {
            from_base: Radix::new(from_base)?,
            to_base: Radix::new(to_base)?,
            case: Case::from_flag(case)?,
            order: OutputOrder::from_token(order)?,
            capacity,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            from_base: Radix::DECIMAL,
            to_base: Radix::BINARY,
            case: Case::Lower,
            order: OutputOrder::BackToFront,
            capacity: DigitBuffer::DEFAULT_CAPACITY,
        }
    }
}

/// Converts digit strings between bases using a fixed set of [`Settings`].
///
/// The converter owns the output buffer, which is reused for every
/// conversion. Changing the settings never leaves the converter partially
/// updated: either the whole change applies or none of it does.
#[derive(Debug)]
pub struct Converter {
    settings: Settings,
    buffer: DigitBuffer,
}

impl Converter {
    /// Creates a new converter, reserving the output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the buffer cannot be reserved.
    pub fn new(settings: Settings) -> Result<Self, Error> {
        Ok(Self {
            buffer: DigitBuffer::try_with_capacity(settings.capacity)?,
            settings,
        })
    }

    /// The active settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces all settings at once.
    ///
    /// The buffer is only reallocated if the capacity changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the buffer cannot be resized. The
    /// previous settings stay active in that case.
    pub fn configure(&mut self, settings: Settings) -> Result<(), Error> {
        if settings.capacity != self.buffer.capacity() {
            self.buffer.try_resize(settings.capacity)?;
        }

        self.settings = settings;
        Ok(())
    }

    pub fn set_from_base(&mut self, radix: Radix) {
        self.settings.from_base = radix;
    }

    pub fn set_to_base(&mut self, radix: Radix) {
        self.settings.to_base = radix;
    }

    pub fn set_case(&mut self, case: Case) {
        self.settings.case = case;
    }

    pub fn set_order(&mut self, order: OutputOrder) {
        self.settings.order = order;
    }

    /// Resizes the output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the buffer cannot be resized. The
    /// previous capacity stays active in that case.
    pub fn resize(&mut self, capacity: usize) -> Result<(), Error> {
        self.buffer.try_resize(capacity)?;
        self.settings.capacity = capacity;
        Ok(())
    }

    /// Converts a signed digit string from the source to the target base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadNumber`] or [`Error::Overflow`] if `digits` can't be
    /// parsed, and [`Error::TooBig`] if the result doesn't fit the buffer.
    pub fn convert(&mut self, digits: &str) -> Result<Rendered<'_>, Error> {
        let Settings {
            from_base,
            to_base,
            case,
            order,
            ..
        } = self.settings;

        let (magnitude, sign) = parse_magnitude(digits, from_base)?;
        let text = render_magnitude(&mut self.buffer, magnitude, sign, to_base, case)?;

        log::trace!("converted `{digits}` from base {from_base} to `{text}` in base {to_base}");
        Ok(Rendered { text, order })
    }
}

/// A rendered digit string along with the order it is presented in.
///
/// Its [`Display`](fmt::Display) implementation writes exactly the meaningful
/// characters in the presentation order.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    text: &'a str,
    order: OutputOrder,
}

impl<'a> Rendered<'a> {
    /// The text in its most-significant-first layout, regardless of order.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub fn order(&self) -> OutputOrder {
        self.order
    }

    /// The bytes in presentation order.
    pub fn bytes(&self) -> Traverse<'a> {
        self.order.traverse(self.text.as_bytes())
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            OutputOrder::FrontToBack => f.write_str(self.text),
            OutputOrder::BackToFront => self.bytes().try_for_each(|b| f.write_char(char::from(b))),
        }
    }
}
