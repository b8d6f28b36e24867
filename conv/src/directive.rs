//! Splits arguments into directives and numerals.
//!
//! A directive is written as `-X=VALUE`: a dash, a single letter and an equals
//! sign. Anything else, including negative numbers like `-10` or `-ff`, is a
//! numeral.

use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;

use radix_conv::{Case, OutputOrder, Radix};

use crate::error::DirectiveError;

/// A classified command line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Directive { flag: char, value: &'a str },
    Numeral(&'a str),
}

pub fn classify(arg: &str) -> Token<'_> {
    if let Some(rest) = arg.strip_prefix('-') {
        let mut chars = rest.chars();
        if let (Some(flag), Some('=')) = (chars.next(), chars.next()) {
            return Token::Directive {
                flag,
                value: chars.as_str(),
            };
        }
    }

    Token::Numeral(arg)
}

/// A validated change to the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `-f`
    FromBase(Radix),
    /// `-t`
    ToBase(Radix),
    /// `-c`
    Case(Case),
    /// `-e`
    Order(OutputOrder),
    /// `-r`
    Capacity(usize),
    /// `-o`
    Output(PathBuf),
    /// `-h`
    Help,
}

impl Directive {
    /// Parses the value for a directive flag.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the flag is unknown or the value is invalid for it.
    pub fn parse(flag: char, value: &str) -> Result<Self, DirectiveError> {
        Ok(match flag {
            'f' => Self::FromBase(value.parse()?),
            't' => Self::ToBase(value.parse()?),
            'c' => Self::Case(Case::from_flag_str(value)?),
            'e' => Self::Order(value.parse()?),
            'r' => Self::Capacity(parse_capacity(value)?),
            'o' => Self::Output(PathBuf::from(value)),
            'h' => Self::Help,
            _ => return Err(DirectiveError::UnknownOption(flag)),
        })
    }
}

fn parse_capacity(value: &str) -> Result<usize, DirectiveError> {
    value.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => DirectiveError::CapacityTooLarge(value.to_owned()),
        _ => DirectiveError::BadCapacity(value.to_owned()),
    })
}
