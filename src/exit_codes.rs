//! Exit code constants for the git-bug CLI.
//!
//! - 0: Success
//! - 1: Any failure (dispatch, help display, command error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: usage error, help could not be displayed, or a command failed.
pub const FAILURE: i32 = 1;
