//! # Tree Command Implementation
//!
//! Prints the directory structure of a folder the same way `clone` does after
//! a successful clone. Hidden folders, `node_modules` and `vendor` are left
//! out. This command is read-only.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use project_scaffolder::tree;

/// Print the directory structure of a folder
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Folder to render.
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: PathBuf,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs) -> Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("Not a directory: {}", args.path.display());
    }

    tree::print_tree(&args.path)?;
    Ok(())
}
