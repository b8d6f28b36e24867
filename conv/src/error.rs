use std::io;
use std::path::PathBuf;

use radix_conv::Radix;

/// Errors raised while working through the command line arguments.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot convert `{numeral}` from base {from} to base {to}")]
    Convert {
        numeral: String,
        from: Radix,
        to: Radix,
        #[source]
        source: radix_conv::Error,
    },
    #[error("cannot process the `-{flag}={value}` directive")]
    Directive {
        flag: char,
        value: String,
        #[source]
        source: DirectiveError,
    },
    #[error("cannot write to the output")]
    Write(#[from] io::Error),
}

/// Why a directive could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error(transparent)]
    Engine(#[from] radix_conv::Error),
    #[error("capacity `{0}` is not a decimal number")]
    BadCapacity(String),
    #[error("capacity `{0}` is too large")]
    CapacityTooLarge(String),
    #[error("output file {path:?} cannot be opened")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`-{0}` is not a known directive")]
    UnknownOption(char),
    #[error("help was requested")]
    HelpRequested,
}

impl RunError {
    /// Whether the run has to stop, even if asked to keep going.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Write(_)) || self.wants_usage()
    }

    /// Whether the usage text should be shown for this error.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            Self::Directive {
                source: DirectiveError::HelpRequested | DirectiveError::UnknownOption(_),
                ..
            }
        )
    }
}
