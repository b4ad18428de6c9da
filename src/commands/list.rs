//! Implementation of the `git-bug commands` command.

use crate::cli::{CommandDescriptor, Invocation};
use crate::env::ExecEnv;
use crate::error::Result;
use clap::{Arg, ArgAction};
use std::io::Write;

pub fn new_commands_command() -> CommandDescriptor {
    CommandDescriptor::leaf("commands", "Display available commands", run_commands).arg(
        Arg::new("pretty")
            .short('p')
            .long("pretty")
            .help("Output the command description as well as Markdown compatible comment")
            .action(ArgAction::SetTrue),
    )
}

/// List every command of the tree, root included, sorted by full path.
fn run_commands(env: &mut ExecEnv, inv: &Invocation<'_>) -> Result<()> {
    let pretty = inv.flag("pretty");

    let mut all: Vec<(String, &CommandDescriptor)> = Vec::new();
    inv.root.walk(|path, cmd| all.push((path.to_string(), cmd)));
    all.sort_by(|a, b| a.0.cmp(&b.0));

    for (i, (path, cmd)) in all.iter().enumerate() {
        if i > 0 {
            writeln!(env.out)?;
        }
        if pretty {
            writeln!(env.out, "# {}", cmd.short)?;
        }
        writeln!(env.out, "{}", cmd.usage_line(path))?;
    }

    env.out.flush()?;
    Ok(())
}
