//! Support for styling terminal text via ANSI escape sequences.
//!
//! The constants are plain escape sequences. [`paint`] wraps a value so the
//! escapes are only written when color is enabled.
//!
//! # Examples
//!
//! ```
//! use utils::term::style::*;
//!
//! let headline = paint(true, BOLD_RED, "Error");
//! assert_eq!(headline.to_string(), "\x1b[1;31mError\x1b[0m");
//!
//! let plain = paint(false, BOLD_RED, "Error");
//! assert_eq!(plain.to_string(), "Error");
//! ```

use std::fmt;

macro_rules! define_escapes {
    ($($(#[$attr:meta])* $name:ident = $lit:literal,)*) => {
        $(
            $(#[$attr])*
            pub const $name: &str = concat!("\x1b[", $lit);
        )*
    };
}

macro_rules! define_color_escapes {
    ($($label:literal $name:ident / $bold:ident = $lit:literal,)*) => {
        $(
            #[doc = concat!("Change the foreground color to ", $label, ".")]
            pub const $name: &str = concat!("\x1b[0;3", $lit, "m");
        )*
        $(
            #[doc = concat!("Change the foreground color to bold ", $label, ".")]
            pub const $bold: &str = concat!("\x1b[1;3", $lit, "m");
        )*
    };
}

define_escapes! {
    /// Resets all styles and colors.
    RESET = "0m",

    /// Bold text.
    BOLD = "1m",
}

define_color_escapes! {
    "black" BLACK / BOLD_BLACK = "0",
    "red" RED / BOLD_RED = "1",
    "green" GREEN / BOLD_GREEN = "2",
    "yellow" YELLOW / BOLD_YELLOW = "3",
    "blue" BLUE / BOLD_BLUE = "4",
    "magenta" MAGENTA / BOLD_MAGENTA = "5",
    "cyan" CYAN / BOLD_CYAN = "6",
    "white" WHITE / BOLD_WHITE = "7",
}

/// A value that is displayed with a style when enabled.
///
/// Created by [`paint`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Paint<T> {
    enabled: bool,
    style: &'static str,
    value: T,
}

/// Wraps `value` so it displays in `style` if `enabled` is true, or plain
/// otherwise.
pub const fn paint<T>(enabled: bool, style: &'static str, value: T) -> Paint<T> {
    Paint {
        enabled,
        style,
        value,
    }
}

impl<T: fmt::Display> fmt::Display for Paint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "{}{}{RESET}", self.style, self.value)
        } else {
            fmt::Display::fmt(&self.value, f)
        }
    }
}
