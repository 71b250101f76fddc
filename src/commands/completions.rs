//! # Completions Command Implementation
//!
//! Generates shell completion scripts for `scaffolder` using `clap_complete`.
//!
//! ```bash
//! scaffolder completions bash > ~/.local/share/bash-completion/completions/scaffolder
//! scaffolder completions zsh > ~/.zfunc/_scaffolder
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

const BIN_NAME: &str = "scaffolder";

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_completions(args.shell, &mut out)?;
    Ok(())
}

/// Write the completion script for `shell` into `out`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()
}
