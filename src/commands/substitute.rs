//! # Substitute Command Implementation
//!
//! Runs a single non-interactive word substitution pass over a folder and
//! prints the list of rewritten files. This is the same pass the interactive
//! clone flow runs after each old/new word pair.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use project_scaffolder::output::{heading, OutputConfig};
use project_scaffolder::substitute::substitute;

/// Replace a word in all supported text files under a folder
#[derive(Args, Debug)]
pub struct SubstituteArgs {
    /// The word to replace (literal, case-sensitive).
    #[arg(long, value_name = "OLD", value_parser = NonEmptyStringValueParser::new())]
    pub from: String,

    /// The replacement word.
    #[arg(long, value_name = "NEW")]
    pub to: String,

    /// Folder to process.
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: PathBuf,
}

/// Execute the `substitute` command.
pub fn execute(args: SubstituteArgs, output: &OutputConfig) -> Result<()> {
    let modified = substitute(&args.path, &args.from, &args.to)
        .context("Error performing word substitution")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_modified_files(&mut out, output, &modified)?;
    out.flush()?;
    Ok(())
}

/// Print the modified-file list after a substitution pass.
pub fn print_modified_files<W: Write, P: AsRef<Path>>(
    out: &mut W,
    output: &OutputConfig,
    files: &[P],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading(output, "Modified files:"))?;
    for file in files {
        writeln!(out, "{}", file.as_ref().display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_print_modified_files() {
        let mut out = Vec::new();
        let files = vec![PathBuf::from("a/README.md"), PathBuf::from("index.ts")];

        print_modified_files(&mut out, &OutputConfig { use_color: false }, &files).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "\nModified files:\na/README.md\nindex.ts\n");
    }

    #[test]
    fn test_print_modified_files_empty() {
        let mut out = Vec::new();
        let files: Vec<PathBuf> = Vec::new();

        print_modified_files(&mut out, &OutputConfig { use_color: false }, &files).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nModified files:\n");
    }

    #[test]
    fn test_execute_rewrites_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app.js"), "const name = 'acme';").unwrap();

        let args = SubstituteArgs {
            from: "acme".to_string(),
            to: "globex".to_string(),
            path: temp_dir.path().to_path_buf(),
        };
        execute(args, &OutputConfig { use_color: false }).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.js")).unwrap(),
            "const name = 'globex';"
        );
    }

    #[test]
    fn test_execute_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let args = SubstituteArgs {
            from: "a".to_string(),
            to: "b".to_string(),
            path: temp_dir.path().join("missing"),
        };

        let err = execute(args, &OutputConfig { use_color: false }).unwrap_err();
        assert!(err.to_string().contains("Error performing word substitution"));
    }
}
