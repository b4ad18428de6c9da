//! Command model for git-bug.
//!
//! Commands are described as a tree of [`CommandDescriptor`]s. A descriptor is
//! either a container (it has children) or a leaf. The dispatcher walks this
//! tree explicitly; clap is only used to parse arguments and lay out help,
//! see [`parser`].

pub mod docs;
pub mod group;
pub mod help;
pub mod parser;

use crate::env::ExecEnv;
use crate::error::{Error, Result};
use clap::{Arg, ArgAction, ArgMatches};
use std::io::Write;

pub use group::{Group, GroupId, assign};

/// Runs a command once its arguments are parsed.
pub type RunFn = fn(&mut ExecEnv, &Invocation<'_>) -> Result<()>;

/// Runs before a command or any of its descendants.
pub type HookFn = fn(&mut ExecEnv) -> Result<()>;

/// Id of the argument collecting everything after a passthrough command's name.
pub const TRAILING_ARGS: &str = "args";

/// The closed set of command kinds.
#[derive(Debug, Clone)]
pub enum CommandKind {
    /// Has subcommands; runs its own `run` only when none is selected.
    Container { children: Vec<CommandDescriptor> },
    Leaf,
}

/// Behavior switches, meaningful on the root command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandSettings {
    /// Report usage errors as a single line, without the usage block.
    pub silence_usage: bool,
    /// Leave the "Auto generated by" footer out of generated docs.
    pub disable_auto_gen_tag: bool,
}

/// A registrable command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub aliases: Vec<&'static str>,
    /// Display group in the parent's help. `None` means ungrouped.
    pub group: Option<GroupId>,
    pub args: Vec<Arg>,
    pub pre_run: Option<HookFn>,
    pub run: RunFn,
    pub kind: CommandKind,
    /// Groups this command declares for its children.
    pub groups: Vec<Group>,
    pub settings: CommandSettings,
}

impl CommandDescriptor {
    pub fn leaf(name: &'static str, short: &'static str, run: RunFn) -> Self {
        Self {
            name,
            short,
            long: "",
            aliases: Vec::new(),
            group: None,
            args: Vec::new(),
            pre_run: None,
            run,
            kind: CommandKind::Leaf,
            groups: Vec::new(),
            settings: CommandSettings::default(),
        }
    }

    pub fn container(name: &'static str, short: &'static str, run: RunFn) -> Self {
        Self {
            kind: CommandKind::Container {
                children: Vec::new(),
            },
            ..Self::leaf(name, short, run)
        }
    }

    pub fn long(mut self, long: &'static str) -> Self {
        self.long = long;
        self
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    /// Accept any arguments after the command name, unparsed.
    pub fn trailing_args(self) -> Self {
        self.arg(
            Arg::new(TRAILING_ARGS)
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
    }

    pub fn pre_run(mut self, hook: HookFn) -> Self {
        self.pre_run = Some(hook);
        self
    }

    pub fn settings(mut self, settings: CommandSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Declare a display group for children of this command.
    pub fn add_group(&mut self, group: Group) {
        if !self.groups.iter().any(|g| g.id == group.id) {
            self.groups.push(group);
        }
    }

    /// Register a child. A leaf receiving a child becomes a container.
    pub fn add_command(&mut self, child: CommandDescriptor) {
        match &mut self.kind {
            CommandKind::Container { children } => children.push(child),
            CommandKind::Leaf => {
                self.kind = CommandKind::Container {
                    children: vec![child],
                }
            }
        }
    }

    /// Register a child and assign it to one of this command's groups.
    pub fn add_command_with_group(&mut self, mut child: CommandDescriptor, group: GroupId) {
        assign(&mut child, group);
        self.add_command(child);
    }

    pub fn children(&self) -> &[CommandDescriptor] {
        match &self.kind {
            CommandKind::Container { children } => children,
            CommandKind::Leaf => &[],
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, CommandKind::Container { .. })
    }

    pub fn find_child(&self, name: &str) -> Option<&CommandDescriptor> {
        self.children()
            .iter()
            .find(|c| c.name == name || c.aliases.contains(&name))
    }

    pub fn has_group(&self, id: GroupId) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    fn has_flags(&self) -> bool {
        self.args
            .iter()
            .any(|a| a.get_long().is_some() || a.get_short().is_some())
    }

    fn has_trailing_args(&self) -> bool {
        self.args.iter().any(|a| a.get_id() == TRAILING_ARGS)
    }

    /// One-line usage, e.g. `git-bug version [flags]`.
    pub fn usage_line(&self, path: &str) -> String {
        let mut line = path.to_string();
        if self.is_container() {
            line.push_str(" [command]");
        }
        if self.has_flags() {
            line.push_str(" [flags]");
        }
        if self.has_trailing_args() {
            line.push_str(" [args]...");
        }
        line
    }

    /// Visit every command depth-first, with its full path.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&str, &'a CommandDescriptor)) {
        fn go<'a>(
            cmd: &'a CommandDescriptor,
            path: &str,
            visit: &mut impl FnMut(&str, &'a CommandDescriptor),
        ) {
            visit(path, cmd);
            for child in cmd.children() {
                go(child, &format!("{} {}", path, child.name), visit);
            }
        }
        go(self, self.name, &mut visit);
    }
}

/// A parsed invocation of one command in the tree.
pub struct Invocation<'a> {
    pub root: &'a CommandDescriptor,
    pub command: &'a CommandDescriptor,
    /// Names from the root down to `command`.
    pub path: Vec<&'static str>,
    pub matches: &'a ArgMatches,
    pub(crate) help: String,
}

impl Invocation<'_> {
    pub fn command_path(&self) -> String {
        self.path.join(" ")
    }

    /// Whether a boolean flag was given. Unknown flags read as unset.
    pub fn flag(&self, id: &str) -> bool {
        self.matches
            .try_get_one::<bool>(id)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    /// Arguments passed through to a collaborator command.
    pub fn trailing_args(&self) -> Vec<&str> {
        self.matches
            .try_get_many::<String>(TRAILING_ARGS)
            .ok()
            .flatten()
            .map(|values| values.map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Write the help text to the env's output.
    pub fn print_help(&self, env: &mut ExecEnv) -> Result<()> {
        env.out
            .write_all(self.help.as_bytes())
            .and_then(|()| env.out.flush())
            .map_err(Error::Help)
    }
}
