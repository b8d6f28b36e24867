//! Formats run errors for the user.

use std::error::Error as _;
use std::io::{self, Write};

use utils::term::paint;
use utils::term::style::{BOLD_RED, CYAN, MAGENTA, YELLOW};

use crate::error::{DirectiveError, RunError};

/// Writes a report for `err`.
///
/// The report is a headline, one indented line per error in the source chain
/// and an optional hint.
pub fn write_report<W: Write>(mut w: W, err: &RunError, color: bool) -> io::Result<()> {
    let label = paint(color, BOLD_RED, "Error");
    match err {
        RunError::Convert {
            numeral, from, to, ..
        } => writeln!(
            w,
            "{label}: cannot convert `{}` from base {from} to base {to}",
            paint(color, MAGENTA, numeral),
        )?,
        RunError::Directive { flag, value, .. } => writeln!(
            w,
            "{label}: cannot process the `{}` directive",
            paint(color, YELLOW, format_args!("-{flag}={value}")),
        )?,
        RunError::Write(_) => writeln!(w, "{label}: cannot write to the output")?,
    }

    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(w, "  {cause}")?;
        source = cause.source();
    }

    if let Some(hint) = hint(err) {
        writeln!(w, "  {}: {hint}", paint(color, CYAN, "hint"))?;
    }

    Ok(())
}

/// Prints a report for `err` to standard error.
pub fn print(err: &RunError, color: bool) {
    let stderr = io::stderr();
    if let Err(why) = write_report(stderr.lock(), err, color) {
        log::error!("Could not report error: {why}");
    }
}

fn hint(err: &RunError) -> Option<String> {
    use radix_conv::Error;

    match err {
        RunError::Convert {
            source: Error::TooBig { required, .. },
            ..
        } => Some(format!("raise the buffer capacity with `-r={required}`")),
        RunError::Convert {
            source: Error::BadNumber(_),
            from,
            ..
        } => Some(format!("set the source base with `-f=N` if `{from}` is wrong")),
        RunError::Directive {
            source: DirectiveError::UnknownOption(_),
            ..
        } => Some("known directives are -f -t -c -e -r -o -h".to_owned()),
        _ => None,
    }
}
