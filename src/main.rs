//! # Project Scaffolder CLI
//!
//! This is the binary entry point for the `scaffolder` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting fatal errors on standard output and exiting non-zero.
//!
//! The core logic lives in the `project_scaffolder` library crate; the
//! binary is a thin interactive layer on top of it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
