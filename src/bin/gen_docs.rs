//! Generates markdown documentation for every git-bug command.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use git_bug::cli::docs::gen_markdown_tree;
use git_bug::commands::{Collaborators, new_root_command};
use git_bug::logging;
use std::path::PathBuf;

/// Write one markdown page per git-bug command.
#[derive(Parser, Debug)]
#[command(name = "gen-docs")]
struct Args {
    /// Directory receiving the generated pages.
    #[arg(long, default_value = "doc/md")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let root = new_root_command(Collaborators::default());
    let written = gen_markdown_tree(&root, &args.out_dir, Local::now().date_naive())
        .with_context(|| format!("failed to write docs to {}", args.out_dir.display()))?;

    println!("Generated {} pages in {}", written.len(), args.out_dir.display());
    Ok(())
}
