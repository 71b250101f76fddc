//! # Repository Locator
//!
//! Turns whatever the user typed at the repository prompt into a canonical
//! `owner/name` identifier, and builds the GitHub clone URL for it.
//!
//! Accepted inputs include the short form (`owner/name`), HTTPS URLs with or
//! without `.git`, and scp-style SSH remotes (`git@github.com:owner/name.git`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};

const GITHUB_HTTPS: &str = "https://github.com/";
const GITHUB_SSH: &str = "git@github.com:";

/// Transport used for the clone URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneProtocol {
    /// `https://github.com/owner/name.git`
    Https,
    /// `git@github.com:owner/name.git`
    Ssh,
}

impl CloneProtocol {
    /// Pick a protocol from the naming convention: names ending in `.git`
    /// are treated as private and cloned over SSH, anything else over HTTPS.
    ///
    /// This is only a convention; repository visibility is never queried.
    pub fn infer(name: &str) -> Self {
        if is_public_repo(name) {
            CloneProtocol::Https
        } else {
            CloneProtocol::Ssh
        }
    }
}

impl fmt::Display for CloneProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloneProtocol::Https => write!(f, "https"),
            CloneProtocol::Ssh => write!(f, "ssh"),
        }
    }
}

impl FromStr for CloneProtocol {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "https" => Ok(CloneProtocol::Https),
            "ssh" => Ok(CloneProtocol::Ssh),
            other => Err(format!("unknown protocol '{}' (expected https or ssh)", other)),
        }
    }
}

/// A validated `owner/name` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Validate that `input` is exactly two non-empty `/`-separated parts.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::InvalidRepository {
                input: input.to_string(),
            }),
        }
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clone URL for this repository over the given protocol.
    pub fn clone_url(&self, protocol: CloneProtocol) -> String {
        match protocol {
            CloneProtocol::Https => format!("{}{}.git", GITHUB_HTTPS, self),
            CloneProtocol::Ssh => format!("{}{}.git", GITHUB_SSH, self),
        }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Reduce free-form input to a repository name.
///
/// The remote prefix (`scheme://host/` or `user@host:`) and a trailing `.git`
/// are dropped. When two or more path segments remain, the last two are
/// returned as `owner/name`; otherwise the single remaining segment is
/// returned as is. The result is not validated, see [`RepositoryId::parse`].
pub fn extract_repo_name(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    let stripped = strip_remote_prefix(trimmed);
    let path = stripped.strip_suffix(".git").unwrap_or(&stripped);

    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        [.., owner, name] => format!("{}/{}", owner, name),
        _ => path.to_string(),
    }
}

fn strip_remote_prefix(input: &str) -> Cow<'_, str> {
    if input.contains("://") {
        if let Ok(url) = Url::parse(input) {
            return Cow::Owned(url.path().trim_matches('/').to_string());
        }
    }

    // scp-style `user@host:path`
    if let Some((host, path)) = input.split_once(':') {
        if !host.is_empty() && !host.contains('/') {
            return Cow::Borrowed(path);
        }
    }

    Cow::Borrowed(input)
}

/// Whether `name` counts as a public repository under the naming heuristic.
pub fn is_public_repo(name: &str) -> bool {
    !name.ends_with(".git")
}

/// Build the clone URL for a repository name using the naming heuristic:
/// HTTPS for public names, SSH for names ending in `.git`.
pub fn construct_repo_url(name: &str) -> String {
    match CloneProtocol::infer(name) {
        CloneProtocol::Https => format!("{}{}.git", GITHUB_HTTPS, name),
        CloneProtocol::Ssh => format!("{}{}", GITHUB_SSH, name),
    }
}
