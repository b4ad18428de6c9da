//! Descriptors for commands implemented outside the core.
//!
//! Entity management, the user interfaces and remote interaction are
//! supplied by collaborators. The core only registers their descriptors;
//! slots left at their default report that the command is not built in.

use crate::cli::{CommandDescriptor, Invocation};
use crate::env::ExecEnv;
use crate::error::{Error, Result};

/// One descriptor per externally implemented top-level command.
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub bug: CommandDescriptor,
    pub user: CommandDescriptor,
    pub label: CommandDescriptor,
    pub termui: CommandDescriptor,
    pub webui: CommandDescriptor,
    pub pull: CommandDescriptor,
    pub push: CommandDescriptor,
    pub bridge: CommandDescriptor,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            bug: unavailable("bug", "List bugs"),
            user: unavailable("user", "List identities"),
            label: unavailable("label", "List valid labels"),
            termui: unavailable("termui", "Launch the terminal UI").alias("tui"),
            webui: unavailable("webui", "Launch the web UI"),
            pull: unavailable("pull", "Pull updates from a git remote"),
            push: unavailable("push", "Push updates to a git remote"),
            bridge: unavailable("bridge", "List bridges to other bug trackers"),
        }
    }
}

/// A passthrough leaf that fails with [`Error::Unavailable`] when run.
pub fn unavailable(name: &'static str, short: &'static str) -> CommandDescriptor {
    CommandDescriptor::leaf(name, short, run_unavailable).trailing_args()
}

fn run_unavailable(_env: &mut ExecEnv, inv: &Invocation<'_>) -> Result<()> {
    tracing::debug!(command = %inv.command_path(), args = ?inv.trailing_args(), "no implementation linked");
    Err(Error::Unavailable(inv.command_path()))
}
