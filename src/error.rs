//! Errors returned by the crate.
//!
//! Widget transitions never fail. The only fallible surface is turning user
//! supplied strings into configuration values.

use thiserror::Error;

/// Errors produced while parsing widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string did not name one of the timer modes.
    #[error("unknown timer mode `{0}` (expected one of: work, short-break, long-break)")]
    UnknownMode(String),

    /// The string did not name a reset button visibility policy.
    #[error("unknown reset visibility `{0}` (expected one of: always, when-modified)")]
    UnknownResetVisibility(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
