//! # Clone Command Implementation
//!
//! This module implements the interactive flow that runs when `scaffolder` is
//! called without a subcommand (or as `scaffolder clone`).
//!
//! ## Flow
//!
//! 1. Ask for a repository reference (`user/repo-name` or a GitHub URL) and
//!    reduce it to `owner/name`. A malformed name is fatal.
//! 2. Ask for the destination folder.
//! 3. Clone with the configured version-control binary. Failure is fatal.
//! 4. Change into the clone and print its directory structure.
//! 5. Offer word substitution, repeating until the user declines.
//!
//! `--repo` and `--dest` skip the matching prompts.

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use project_scaffolder::config::Config;
use project_scaffolder::error::Error;
use project_scaffolder::git;
use project_scaffolder::locator::{construct_repo_url, extract_repo_name, RepositoryId};
use project_scaffolder::output::{emoji, heading, OutputConfig};
use project_scaffolder::prompt::{self, Prompter};
use project_scaffolder::substitute::substitute;
use project_scaffolder::tree;

use super::substitute::print_modified_files;

const REPO_PROMPT: &str =
    "Enter GitHub repository URL or name (user/repo-name or https://github.com/user/repo-name.git)";
const OLD_WORD_PROMPT: &str = "Enter the word to replace";
const NEW_WORD_PROMPT: &str = "Enter the new word";

/// Clone a repository, show its structure and optionally substitute words
#[derive(Args, Debug, Default)]
pub struct CloneArgs {
    /// Repository to clone (user/repo-name or a GitHub URL). Prompted if omitted.
    #[arg(long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Destination folder for the clone. Prompted if omitted.
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}

/// Execute the `clone` command against the process's stdin and stdout.
pub fn execute(args: CloneArgs, config: &Config, output: &OutputConfig) -> Result<()> {
    let mut prompter = prompt::for_stdio(output);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, config, output, prompter.as_mut(), &mut out)
}

/// Drive the whole clone flow with an explicit prompter and output sink.
pub fn run<W: Write>(
    args: &CloneArgs,
    config: &Config,
    output: &OutputConfig,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", heading(output, "Project Scaffolder CLI Tool"))?;
    writeln!(out)?;

    let reference = match args.repo.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(repo) => repo.to_string(),
        None => prompt_repository(prompter, out)?,
    };
    let name = extract_repo_name(&reference);
    let id = RepositoryId::parse(&name).inspect_err(|_| {
        warn!("Rejected repository reference '{}' (reduced to '{}')", reference, name);
    })?;

    let destination = match &args.dest {
        Some(dest) => dest.clone(),
        None => prompt_destination(prompter, &id)?,
    };

    let url = match config.protocol {
        Some(protocol) => id.clone_url(protocol),
        None => construct_repo_url(&id.to_string()),
    };

    writeln!(
        out,
        "{}Cloning repository: {}",
        emoji(output, "📦 ", ""),
        url
    )?;
    writeln!(out, "Destination folder: {}", destination.display())?;
    writeln!(
        out,
        "Note: Make sure the repository is public or you have SSH key authentication configured."
    )?;
    out.flush()?;

    git::clone(&config.git_binary, &url, &destination).context("Error cloning repository")?;

    env::set_current_dir(&destination).map_err(|source| Error::ChangeDirectory {
        path: destination.clone(),
        source,
    })?;

    writeln!(out, "{}", heading(output, "Directory structure:"))?;
    tree::render_tree(Path::new("."), 0, out)?;

    substitution_loop(output, prompter, out)
}

/// Ask for the repository reference until the answer is non-empty.
fn prompt_repository<W: Write>(prompter: &mut dyn Prompter, out: &mut W) -> Result<String> {
    loop {
        let answer = prompter.input(REPO_PROMPT)?;
        if !answer.trim().is_empty() {
            return Ok(answer);
        }
        writeln!(out, "Please enter a non-empty repository URL.")?;
    }
}

/// Ask for the destination; an empty answer means the repository name, as
/// `git clone` would choose.
fn prompt_destination(prompter: &mut dyn Prompter, id: &RepositoryId) -> Result<PathBuf> {
    let answer = prompter.input(&format!(
        "Enter the destination folder for the cloned project (default: {})",
        id.name()
    ))?;
    let answer = answer.trim();

    Ok(if answer.is_empty() {
        PathBuf::from(id.name())
    } else {
        PathBuf::from(answer)
    })
}

/// Offer substitution passes over the current directory until declined.
fn substitution_loop<W: Write>(
    output: &OutputConfig,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    let mut question = "Do you want to perform word substitution in files?";

    while prompter.confirm(question)? {
        let old_word = prompt_old_word(prompter, out)?;
        let new_word = prompter.input(NEW_WORD_PROMPT)?;

        let modified = substitute(".", &old_word, &new_word)
            .context("Error performing word substitution")?;
        print_modified_files(out, output, &modified)?;
        out.flush()?;

        question = "Do you want to perform another substitution?";
    }

    Ok(())
}

fn prompt_old_word<W: Write>(prompter: &mut dyn Prompter, out: &mut W) -> Result<String> {
    loop {
        let answer = prompter.input(OLD_WORD_PROMPT)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        writeln!(out, "Please enter a non-empty word to replace.")?;
    }
}
