//! # CLI Command Implementations
//!
//! Each subcommand of `scaffolder` lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `project_scaffolder` library.
//!
//! `clone` is also what runs when no subcommand is given.

pub mod clone;
pub mod completions;
pub mod substitute;
pub mod tree;
