//! Works through the arguments in order, applying directives and converting
//! numerals.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use radix_conv::Converter;
use utils::term::paint;
use utils::term::style::MAGENTA;

use crate::directive::{self, Directive, Token};
use crate::error::{DirectiveError, RunError};

/// Where converted lines are written.
#[derive(Debug)]
enum Sink {
    Stdout(io::Stdout),
    File { path: PathBuf, file: fs::File },
    #[cfg(test)]
    Memory(Vec<u8>),
}

impl Sink {
    /// Opens a file for appending, creating it if needed.
    fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self::File {
            path: path.to_path_buf(),
            file,
        })
    }

    fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stdout) => stdout.write(buf),
            Self::File { file, .. } => file.write(buf),
            #[cfg(test)]
            Self::Memory(vec) => vec.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.write_all(buf),
            Self::File { file, .. } => file.write_all(buf),
            #[cfg(test)]
            Self::Memory(vec) => vec.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.flush(),
            Self::File { file, .. } => file.flush(),
            #[cfg(test)]
            Self::Memory(vec) => vec.flush(),
        }
    }
}

/// The state carried from one argument to the next.
///
/// A failing argument never changes the state.
#[derive(Debug)]
pub struct Session {
    converter: Converter,
    sink: Sink,
    color: bool,
}

impl Session {
    /// Creates a session writing to standard output.
    ///
    /// `color` only applies while writing to standard output.
    pub fn new(converter: Converter, color: bool) -> Self {
        Self {
            converter,
            sink: Sink::Stdout(io::stdout()),
            color,
        }
    }

    /// Processes a single command line argument.
    pub fn process(&mut self, arg: &str) -> Result<(), RunError> {
        match directive::classify(arg) {
            Token::Directive { flag, value } => Directive::parse(flag, value)
                .and_then(|d| self.apply(d))
                .map_err(|source| RunError::Directive {
                    flag,
                    value: value.to_owned(),
                    source,
                }),
            Token::Numeral(numeral) => self.convert(numeral),
        }
    }

    /// Applies a directive to the session state.
    pub fn apply(&mut self, directive: Directive) -> Result<(), DirectiveError> {
        log::debug!("applying {directive:?}");

        match directive {
            Directive::FromBase(radix) => self.converter.set_from_base(radix),
            Directive::ToBase(radix) => self.converter.set_to_base(radix),
            Directive::Case(case) => self.converter.set_case(case),
            Directive::Order(order) => self.converter.set_order(order),
            Directive::Capacity(capacity) => self.converter.resize(capacity)?,
            Directive::Output(path) => {
                self.sink = Sink::append(&path)
                    .map_err(|source| DirectiveError::DestinationUnavailable { path, source })?;
            },
            Directive::Help => return Err(DirectiveError::HelpRequested),
        }

        Ok(())
    }

    /// Converts a numeral and writes the line for it.
    pub fn convert(&mut self, numeral: &str) -> Result<(), RunError> {
        let settings = *self.converter.settings();
        let rendered = self
            .converter
            .convert(numeral)
            .map_err(|source| RunError::Convert {
                numeral: numeral.to_owned(),
                from: settings.from_base,
                to: settings.to_base,
                source,
            })?;

        let color = self.color && self.sink.is_stdout();
        writeln!(self.sink, "{}\t{rendered}", paint(color, MAGENTA, numeral))?;
        self.sink.flush()?;
        Ok(())
    }

    /// The path of the output file, if not writing to standard output.
    pub fn output_path(&self) -> Option<&Path> {
        match &self.sink {
            Sink::File { path, .. } => Some(path),
            _ => None,
        }
    }
}
