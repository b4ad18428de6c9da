//! Error types for the git-bug CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-bug command dispatch.
///
/// The core never inspects what a subcommand failed with; every variant maps
/// to the same failure exit code.
#[derive(Error, Debug)]
pub enum Error {
    /// Help text could not be written.
    #[error("failed to display help: {0}")]
    Help(#[source] std::io::Error),

    /// Arguments did not match the command tree (unknown command or flag).
    #[error("{0}")]
    Usage(String),

    /// The command exists but no implementation is linked into this binary.
    #[error("`{0}` is not available in this build")]
    Unavailable(String),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A subcommand failed.
    #[error(transparent)]
    Command(#[from] anyhow::Error),
}

impl Error {
    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Help(_)
            | Error::Usage(_)
            | Error::Unavailable(_)
            | Error::Output(_)
            | Error::Command(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for git-bug operations.
pub type Result<T> = std::result::Result<T, Error>;
