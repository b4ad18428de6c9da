//! Implementation of the `git-bug version` command.

use crate::build_info::rustc_version;
use crate::cli::{CommandDescriptor, Invocation};
use crate::env::{ExecEnv, ROOT_COMMAND_NAME};
use crate::error::Result;
use clap::{Arg, ArgAction};
use std::io::Write;

pub fn new_version_command() -> CommandDescriptor {
    CommandDescriptor::leaf("version", "Show git-bug version information", run_version)
        .arg(
            Arg::new("number")
                .short('n')
                .long("number")
                .help("Only show the version number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("commit")
                .short('c')
                .long("commit")
                .help("Only show the commit hash")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Show all version information")
                .action(ArgAction::SetTrue),
        )
}

/// Print the version resolved by the root pre-run hook.
///
/// `--all` takes precedence over `--number`, which takes precedence over `--commit`.
fn run_version(env: &mut ExecEnv, inv: &Invocation<'_>) -> Result<()> {
    let info = &env.build_info;

    if inv.flag("all") {
        writeln!(env.out, "{} version: {}", ROOT_COMMAND_NAME, info.version)?;
        writeln!(env.out, "Commit: {}", info.git_commit)?;
        writeln!(
            env.out,
            "System version: {}/{}",
            std::env::consts::ARCH,
            std::env::consts::OS
        )?;
        writeln!(env.out, "Rust version: {}", rustc_version())?;
    } else if inv.flag("number") {
        writeln!(env.out, "{}", info.version)?;
    } else if inv.flag("commit") {
        writeln!(env.out, "{}", info.git_commit)?;
    } else {
        writeln!(env.out, "{} version: {}", ROOT_COMMAND_NAME, info.version)?;
    }

    env.out.flush()?;
    Ok(())
}
