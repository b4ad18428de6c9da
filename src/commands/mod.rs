//! Root command and dispatcher for git-bug.
//!
//! [`new_root_command`] assembles the command tree; [`execute`] runs it
//! against process arguments and maps the outcome to an exit code.

mod external;
mod list;
mod version;

pub use external::{Collaborators, unavailable};
pub use list::new_commands_command;
pub use version::new_version_command;

use crate::cli::{CommandDescriptor, CommandSettings, GroupId, Invocation, group::GROUPS, parser};
use crate::env::{ExecEnv, ROOT_COMMAND_NAME};
use crate::error::{Error, Result};
use crate::exit_codes;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;

const SHORT: &str = "A bug tracker embedded in Git";

const LONG: &str = "git-bug is a bug tracker embedded in git.

git-bug use git objects to store the bug tracking separated from the files
history. As bugs are regular git objects, they can be pushed and pulled from/to
the same git remote you are already using to collaborate with other people.";

/// Build the root command with every subcommand registered.
///
/// Registration order only affects help layout: entities, user interfaces,
/// remote interaction, then the ungrouped bookkeeping commands.
pub fn new_root_command(collaborators: Collaborators) -> CommandDescriptor {
    let mut cmd = CommandDescriptor::container(ROOT_COMMAND_NAME, SHORT, run_root)
        .long(LONG)
        .pre_run(resolve_build_info)
        .settings(CommandSettings {
            silence_usage: true,
            disable_auto_gen_tag: true,
        });

    for id in GROUPS {
        cmd.add_group(id.into());
    }

    let Collaborators {
        bug,
        user,
        label,
        termui,
        webui,
        pull,
        push,
        bridge,
    } = collaborators;

    cmd.add_command_with_group(bug, GroupId::Entity);
    cmd.add_command_with_group(user, GroupId::Entity);
    cmd.add_command_with_group(label, GroupId::Entity);

    cmd.add_command_with_group(termui, GroupId::Ui);
    cmd.add_command_with_group(webui, GroupId::Ui);

    cmd.add_command_with_group(pull, GroupId::Remote);
    cmd.add_command_with_group(push, GroupId::Remote);
    cmd.add_command_with_group(bridge, GroupId::Remote);

    cmd.add_command(new_commands_command());
    cmd.add_command(new_version_command());

    cmd
}

/// Root pre-run hook: resolve the displayed version from build metadata.
///
/// Runs before any command, including plain help, so the version is always
/// available to whatever is displayed next.
fn resolve_build_info(env: &mut ExecEnv) -> Result<()> {
    env.build_info = crate::version::resolve(env.metadata.as_ref());
    Ok(())
}

/// Without a subcommand the root shows its help.
fn run_root(env: &mut ExecEnv, inv: &Invocation<'_>) -> Result<()> {
    inv.print_help(env)
}

/// Run `root` against `args` (program name first) and return the exit code.
///
/// Any error is reported once on the env's error stream.
pub fn execute<I, T>(root: &CommandDescriptor, env: &mut ExecEnv, args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match dispatch(root, env, args) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let _ = writeln!(env.err, "Error: {}", err);
            let _ = env.err.flush();
            err.exit_code()
        }
    }
}

/// Run `root` against `args`, returning the first error.
///
/// Order: the root's pre-run hook, argument parsing, pre-run hooks of the
/// selected descendants from the outside in, then the selected command.
pub fn dispatch<I, T>(root: &CommandDescriptor, env: &mut ExecEnv, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // The parser needs the resolved version for `--version`.
    if let Some(hook) = root.pre_run {
        hook(env)?;
    }

    let mut cli = parser::to_clap(root, &env.build_info.version);
    let matches = match cli.try_get_matches_from_mut(args) {
        Ok(matches) => matches,
        Err(err) => return handle_parse_error(root, env, err),
    };

    let selection = parser::select(root, &matches)?;
    let path = selection.path();
    tracing::debug!(command = %path.join(" "), "dispatching");

    for cmd in selection.chain.iter().skip(1) {
        if let Some(hook) = cmd.pre_run {
            hook(env)?;
        }
    }

    let command = selection.command();
    let invocation = Invocation {
        root,
        command,
        help: parser::render_help(&mut cli, &path),
        path,
        matches: selection.matches,
    };
    (command.run)(env, &invocation)
}

/// Help and version requests are successful output; anything else is a usage error.
fn handle_parse_error(root: &CommandDescriptor, env: &mut ExecEnv, err: clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            write!(env.out, "{}", err.render())
                .and_then(|()| env.out.flush())
                .map_err(Error::Help)
        }
        ErrorKind::DisplayVersion => {
            write!(env.out, "{}", err.render())?;
            env.out.flush()?;
            Ok(())
        }
        _ => Err(Error::Usage(usage_message(&err, root.settings.silence_usage))),
    }
}

fn usage_message(err: &clap::Error, silence_usage: bool) -> String {
    let rendered = err.render().to_string();
    let text = if silence_usage {
        rendered.lines().next().unwrap_or_default().to_string()
    } else {
        rendered.trim_end().to_string()
    };
    match text.strip_prefix("error: ") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
