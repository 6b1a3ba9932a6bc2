//! Error types for chain construction.
//!
//! Every failure the crate reports is a programmer error caught while a chain
//! step is being built, so there is a single kind: [`Error::InvalidArgument`].

use std::borrow::Cow;

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a chain step is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument failed validation.
    ///
    /// `argument` names the offending parameter (`"begin"`, `"end"`,
    /// `"path"`, `"bindings"`), `reason` says what was wrong with it.
    #[error("{argument} {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: Cow<'static, str>,
    },
}

impl Error {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Name of the argument that was rejected.
    pub fn argument(&self) -> &'static str {
        match self {
            Error::InvalidArgument { argument, .. } => argument,
        }
    }
}
