//! git-bug: a bug tracker embedded in Git.
//!
//! This crate holds the command-line entry point: the root command, version
//! resolution from build metadata, help grouping and dispatch. Subcommands
//! are registered as [`cli::CommandDescriptor`]s.

pub mod build_info;
pub mod cli;
pub mod commands;
pub mod env;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support;
