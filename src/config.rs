//! # Configuration
//!
//! Process-wide settings for the scaffolder, built once at startup and passed
//! explicitly to the clone command.
//!
//! Every setting has a fixed default and can be overridden through an
//! environment variable:
//!
//! | Setting      | Variable                            | Default        |
//! |--------------|-------------------------------------|----------------|
//! | `git_binary` | `PROJECT_SCAFFOLDER_CLI_GITBINARY`  | `git`          |
//! | `protocol`   | `PROJECT_SCAFFOLDER_CLI_PROTOCOL`   | naming-based   |
//!
//! The variables are read by the CLI parser as fallbacks for `--git-binary`
//! and `--protocol`; an explicit flag wins.

use std::path::PathBuf;

use crate::locator::CloneProtocol;

/// Environment variable overriding the version-control binary.
pub const GIT_BINARY_ENV: &str = "PROJECT_SCAFFOLDER_CLI_GITBINARY";

/// Environment variable forcing the clone protocol (`https` or `ssh`).
pub const PROTOCOL_ENV: &str = "PROJECT_SCAFFOLDER_CLI_PROTOCOL";

/// Version-control binary used when nothing overrides it.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Settings consumed by the clone command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Version-control executable, invoked as `<git_binary> clone <url> <dest>`
    pub git_binary: PathBuf,
    /// Forced clone protocol; `None` falls back to the naming heuristic
    pub protocol: Option<CloneProtocol>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_binary: PathBuf::from(DEFAULT_GIT_BINARY),
            protocol: None,
        }
    }
}

impl Config {
    /// Override the version-control binary.
    pub fn with_git_binary<P: Into<PathBuf>>(mut self, binary: P) -> Self {
        self.git_binary = binary.into();
        self
    }

    /// Force a clone protocol.
    pub fn with_protocol(mut self, protocol: Option<CloneProtocol>) -> Self {
        self.protocol = protocol;
        self
    }
}
