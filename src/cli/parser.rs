//! Translation of the descriptor tree into a clap parser, and back.

use super::{CommandDescriptor, help};
use crate::error::{Error, Result};
use clap::ArgMatches;

/// Build the clap command tree for `root`, displaying `version` for `--version`.
pub fn to_clap(root: &CommandDescriptor, version: &str) -> clap::Command {
    build(root).version(version.to_string())
}

fn build(cmd: &CommandDescriptor) -> clap::Command {
    let mut command = clap::Command::new(cmd.name)
        .about(cmd.short)
        .disable_help_subcommand(true)
        .visible_aliases(cmd.aliases.iter().copied());

    if !cmd.long.is_empty() {
        command = command.long_about(cmd.long);
    }
    if let Some(template) = help::render_template(cmd) {
        command = command.help_template(template);
    }
    for arg in &cmd.args {
        command = command.arg(arg.clone());
    }
    for child in cmd.children() {
        command = command.subcommand(build(child));
    }
    command
}

/// The command selected by a parse, with the descriptors along the way.
pub struct Selection<'a> {
    /// From the root down to the selected command, inclusive.
    pub chain: Vec<&'a CommandDescriptor>,
    /// Matches belonging to the selected command.
    pub matches: &'a ArgMatches,
}

impl<'a> Selection<'a> {
    pub fn command(&self) -> &'a CommandDescriptor {
        self.chain[self.chain.len() - 1]
    }

    pub fn path(&self) -> Vec<&'static str> {
        self.chain.iter().map(|c| c.name).collect()
    }
}

/// Follow the parsed subcommands through the descriptor tree.
pub fn select<'a>(root: &'a CommandDescriptor, matches: &'a ArgMatches) -> Result<Selection<'a>> {
    let mut chain = vec![root];
    let mut current = root;
    let mut matches = matches;

    while let Some((name, sub)) = matches.subcommand() {
        current = current
            .find_child(name)
            .ok_or_else(|| Error::Usage(format!("unknown command \"{}\"", name)))?;
        chain.push(current);
        matches = sub;
    }

    Ok(Selection { chain, matches })
}

/// Long help of the command at `path` (root name first).
///
/// Empty when `path` does not name a command of `cli`.
pub fn render_help(cli: &mut clap::Command, path: &[&str]) -> String {
    path.iter()
        .skip(1)
        .try_fold(cli, |cmd, name| cmd.find_subcommand_mut(name))
        .map(|target| target.render_long_help().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GroupId, Invocation};
    use crate::env::ExecEnv;
    use clap::{Arg, ArgAction};

    fn noop(_env: &mut ExecEnv, _inv: &Invocation<'_>) -> crate::error::Result<()> {
        Ok(())
    }

    fn tree() -> CommandDescriptor {
        let mut bug = CommandDescriptor::container("bug", "Manage bugs", noop);
        bug.add_command(CommandDescriptor::leaf("new", "Create a new bug", noop).trailing_args());

        let mut root = CommandDescriptor::container("git-bug", "A bug tracker embedded in Git", noop);
        root.add_group(GroupId::Entity.into());
        root.add_command_with_group(bug, GroupId::Entity);
        root.add_command(
            CommandDescriptor::leaf("version", "Show git-bug version information", noop)
                .arg(Arg::new("number").short('n').long("number").action(ArgAction::SetTrue)),
        );
        root.add_command(CommandDescriptor::leaf("termui", "Launch the terminal UI", noop).alias("tui"));
        root
    }

    #[test]
    fn clap_tree_is_valid() {
        to_clap(&tree(), "v1.0.0").debug_assert();
    }

    #[test]
    fn select_follows_nested_subcommands() {
        let root = tree();
        let matches = to_clap(&root, "v1")
            .try_get_matches_from(["git-bug", "bug", "new", "title", "--message", "body"])
            .unwrap();
        let selection = select(&root, &matches).unwrap();
        assert_eq!(selection.path(), ["git-bug", "bug", "new"]);
        assert_eq!(selection.command().name, "new");
        let args: Vec<&String> = selection.matches.get_many::<String>("args").unwrap().collect();
        assert_eq!(args, ["title", "--message", "body"]);
    }

    #[test]
    fn select_resolves_aliases_to_canonical_command() {
        let root = tree();
        let matches = to_clap(&root, "v1")
            .try_get_matches_from(["git-bug", "tui"])
            .unwrap();
        assert_eq!(select(&root, &matches).unwrap().command().name, "termui");
    }

    #[test]
    fn select_without_subcommand_is_root() {
        let root = tree();
        let matches = to_clap(&root, "v1").try_get_matches_from(["git-bug"]).unwrap();
        let selection = select(&root, &matches).unwrap();
        assert_eq!(selection.path(), ["git-bug"]);
    }

    #[test]
    fn help_lists_grouped_commands() {
        let root = tree();
        let mut cli = to_clap(&root, "v1");
        let help = render_help(&mut cli, &["git-bug"]);
        assert!(help.contains("Entities:"));
        assert!(help.contains("Additional Commands:"));
        assert!(help.contains("version"));
    }

    #[test]
    fn help_for_nested_command() {
        let root = tree();
        let mut cli = to_clap(&root, "v1");
        let help = render_help(&mut cli, &["git-bug", "version"]);
        assert!(help.contains("--number"));
    }

    #[test]
    fn version_flag_shows_given_version() {
        let err = to_clap(&tree(), "dev-230405060708-abcdef012345")
            .try_get_matches_from(["git-bug", "--version"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.render().to_string().contains("dev-230405060708-abcdef012345"));
    }
}
