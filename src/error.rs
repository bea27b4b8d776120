//! Unified error types for the interaction primitives.

use std::fmt;
use std::io;

/// Errors surfaced by prompt, pager, and highlight calls.
///
/// Malformed *input* (an unparseable menu choice, an unrecognized yes/no
/// answer) is never an error; those paths re-prompt in place. Errors are
/// reserved for argument-domain violations caught before any I/O and for
/// failures of the underlying streams.
#[derive(Debug)]
pub enum UiError {
    /// A parameter value violates its documented domain.
    InvalidArgument(String),
    /// Terminal or file I/O failed.
    Io(io::Error),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for UiError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
