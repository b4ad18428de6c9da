//! Grouped help layout for container commands.
//!
//! clap lists all subcommands under a single heading. Containers that declare
//! groups get a help template with one section per group instead, in
//! declaration order, followed by the ungrouped commands.

use super::CommandDescriptor;

/// Help template for a container, `None` for leaves.
pub fn render_template(cmd: &CommandDescriptor) -> Option<String> {
    if !cmd.is_container() {
        return None;
    }

    let mut template = String::from("{before-help}{about-with-newline}\n{usage-heading} {usage}\n");
    template.push_str(&render_sections(cmd));
    template.push_str("\nOptions:\n{options}{after-help}");
    Some(template)
}

/// The command listing: one titled section per non-empty group.
pub fn render_sections(cmd: &CommandDescriptor) -> String {
    let children = cmd.children();
    let width = children.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for group in &cmd.groups {
        let members: Vec<&CommandDescriptor> = children
            .iter()
            .filter(|c| c.group == Some(group.id))
            .collect();
        push_section(&mut out, group.title, &members, width);
    }

    // A group the parent never declared is listed with the ungrouped commands.
    let rest: Vec<&CommandDescriptor> = children
        .iter()
        .filter(|c| c.group.is_none_or(|id| !cmd.has_group(id)))
        .collect();
    let title = if cmd.groups.is_empty() {
        "Commands"
    } else {
        "Additional Commands"
    };
    push_section(&mut out, title, &rest, width);

    out
}

fn push_section(out: &mut String, title: &str, members: &[&CommandDescriptor], width: usize) {
    if members.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(title);
    out.push_str(":\n");
    for child in members {
        out.push_str(&format!("  {:<width$}  {}\n", child.name, child.short, width = width));
    }
}
