//! # Error Handling
//!
//! This module defines the centralized error type for the scaffolder library.
//! It uses `thiserror` to describe every failure the clone, render and
//! substitution steps can hit, with enough context (URL, path, input) for the
//! binary to report it to the user verbatim.
//!
//! The binary wraps these in `anyhow` at the command layer. The only
//! recoverable failure in the whole flow, an unreadable directory during tree
//! rendering, never surfaces here: the renderer reports it inline and carries
//! on.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for scaffolder operations
#[derive(Error, Debug)]
pub enum Error {
    /// The user-supplied repository reference does not reduce to `owner/name`.
    ///
    /// The offending input is kept for logging but not shown to the user.
    #[error("Invalid repository name. Please enter in the format user/repo-name.")]
    InvalidRepository { input: String },

    /// The version-control binary could not be started or exited non-zero.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// Switching the process working directory into the clone failed.
    #[error("Error changing into the cloned folder {}: {source}", path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading, inspecting or rewriting one file during substitution failed.
    #[error("Error performing word substitution in {}: {source}", path.display())]
    Substitution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk itself failed (unreadable directory, broken entry).
    #[error("Error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Standard input closed or could not be read while a prompt was pending.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
