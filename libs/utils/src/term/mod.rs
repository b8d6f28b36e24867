//! Provides utilities for dealing with terminals.

use std::io;

pub mod style;

pub use style::{Paint, paint};

/// Performs automatic detection of whether ANSI escape codes are supported.
///
/// Honors `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`, and otherwise requires
/// `stream` to be a terminal.
pub fn supports_ansi_escapes<T: io::IsTerminal>(stream: &T) -> bool {
    use anstyle_query as a;

    let clicolor = a::clicolor();
    if a::no_color() {
        false
    } else if a::clicolor_force() {
        true
    } else if clicolor == Some(false) {
        false
    } else {
        stream.is_terminal() && (a::term_supports_color() || clicolor == Some(true) || a::is_ci())
    }
}

/// Resolves whether to use color for `stream`, preferring an explicit choice
/// over auto-detection.
pub fn use_color<T: io::IsTerminal>(choice: Option<bool>, stream: &T) -> bool {
    choice.unwrap_or_else(|| supports_ansi_escapes(stream))
}
