//! Display groups for organizing subcommands in help output.

use super::CommandDescriptor;

/// Identifier of a command group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    Entity,
    Ui,
    Remote,
}

/// All groups, in the order the root declares them.
pub const GROUPS: [GroupId; 3] = [GroupId::Entity, GroupId::Ui, GroupId::Remote];

impl GroupId {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Entity => "entity",
            GroupId::Ui => "ui",
            GroupId::Remote => "remote",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GroupId::Entity => "Entities",
            GroupId::Ui => "User interfaces",
            GroupId::Remote => "Interaction with the outside world",
        }
    }
}

/// A group declaration: identifier and the heading shown in help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub title: &'static str,
}

impl From<GroupId> for Group {
    fn from(id: GroupId) -> Self {
        Self {
            id,
            title: id.title(),
        }
    }
}

/// Attach a command to a group. The last assignment wins.
pub fn assign(command: &mut CommandDescriptor, group: GroupId) {
    command.group = Some(group);
}
