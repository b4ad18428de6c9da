//! Markdown documentation for the command tree.
//!
//! One file per command, named after its full path with spaces replaced by
//! underscores (`git-bug_bug.md`), linking to its parent and children.

use super::CommandDescriptor;
use crate::env::ROOT_COMMAND_NAME;
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Date layout of the auto-generation footer, e.g. `19-Oct-2026`.
const FOOTER_DATE_FORMAT: &str = "%d-%b-%Y";

fn file_name(path: &str) -> String {
    format!("{}.md", path.replace(' ', "_"))
}

/// Render the page for `cmd` located at `path`.
///
/// `parent` is the parent's path and descriptor, `None` for the root.
/// `generated_on` adds the auto-generation footer.
pub fn render_markdown(
    cmd: &CommandDescriptor,
    path: &str,
    parent: Option<(&str, &CommandDescriptor)>,
    generated_on: Option<NaiveDate>,
) -> String {
    let mut out = format!("## {}\n\n{}\n\n", path, cmd.short);

    out.push_str("### Synopsis\n\n");
    if !cmd.long.is_empty() {
        out.push_str(cmd.long.trim_end());
        out.push_str("\n\n");
    }
    out.push_str(&format!("```\n{}\n```\n\n", cmd.usage_line(path)));

    out.push_str("### Options\n\n```\n");
    for arg in &cmd.args {
        let flag = match (arg.get_short(), arg.get_long()) {
            (Some(s), Some(l)) => format!("-{}, --{}", s, l),
            (Some(s), None) => format!("-{}", s),
            (None, Some(l)) => format!("    --{}", l),
            (None, None) => continue,
        };
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        out.push_str(&format!("  {:<16}  {}\n", flag, help));
    }
    out.push_str(&format!("  {:<16}  help for {}\n", "-h, --help", cmd.name));
    out.push_str("```\n\n");

    let mut children: Vec<&CommandDescriptor> = cmd.children().iter().collect();
    children.sort_by_key(|c| c.name);

    if parent.is_some() || !children.is_empty() {
        out.push_str("### SEE ALSO\n\n");
        if let Some((parent_path, parent_cmd)) = parent {
            out.push_str(&format!(
                "* [{}]({})\t - {}\n",
                parent_path,
                file_name(parent_path),
                parent_cmd.short
            ));
        }
        for child in children {
            let child_path = format!("{} {}", path, child.name);
            out.push_str(&format!(
                "* [{}]({})\t - {}\n",
                child_path,
                file_name(&child_path),
                child.short
            ));
        }
        out.push('\n');
    }

    if let Some(date) = generated_on {
        out.push_str(&format!(
            "###### Auto generated by {} on {}\n",
            ROOT_COMMAND_NAME,
            date.format(FOOTER_DATE_FORMAT)
        ));
    }

    out
}

/// Write one page per command under `dir`, returning the written paths.
///
/// The root's `disable_auto_gen_tag` setting decides whether pages carry the
/// footer dated `today`.
pub fn gen_markdown_tree(
    root: &CommandDescriptor,
    dir: &Path,
    today: NaiveDate,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let generated_on = (!root.settings.disable_auto_gen_tag).then_some(today);

    let mut written = Vec::new();
    write_tree(root, root.name, None, dir, generated_on, &mut written)?;
    tracing::debug!(pages = written.len(), dir = %dir.display(), "generated markdown docs");
    Ok(written)
}

fn write_tree(
    cmd: &CommandDescriptor,
    path: &str,
    parent: Option<(&str, &CommandDescriptor)>,
    dir: &Path,
    generated_on: Option<NaiveDate>,
    written: &mut Vec<PathBuf>,
) -> io::Result<()> {
    let target = dir.join(file_name(path));
    fs::write(&target, render_markdown(cmd, path, parent, generated_on))?;
    written.push(target);

    for child in cmd.children() {
        let child_path = format!("{} {}", path, child.name);
        write_tree(child, &child_path, Some((path, cmd)), dir, generated_on, written)?;
    }
    Ok(())
}
