//! Entry point for the `git-bug` CLI.
//!
//! Builds the root command, dispatches the process arguments to it and
//! exits with the resulting code.

use git_bug::build_info::read_build_metadata;
use git_bug::commands::{Collaborators, execute, new_root_command};
use git_bug::env::ExecEnv;
use git_bug::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let mut env = ExecEnv::new(read_build_metadata());
    let root = new_root_command(Collaborators::default());
    let code = execute(&root, &mut env, std::env::args_os());

    ExitCode::from(code as u8)
}
