//! # Project Scaffolder Library
//!
//! Core functionality behind the `scaffolder` command-line tool: clone a base
//! project from GitHub, show its layout, and rename identifiers across its
//! text files.
//!
//! ## Quick Example
//!
//! ```
//! use project_scaffolder::locator::{extract_repo_name, RepositoryId, CloneProtocol};
//!
//! let name = extract_repo_name("https://github.com/octocat/Hello-World.git");
//! let id = RepositoryId::parse(&name).unwrap();
//! assert_eq!(id.clone_url(CloneProtocol::Https), "https://github.com/octocat/Hello-World.git");
//! ```
//!
//! ## Modules
//!
//! - **`locator`**: reduces user input to `owner/name` and builds clone URLs.
//! - **`git`**: runs the external version-control binary.
//! - **`tree`**: renders a directory as an indented tree, skipping hidden and
//!   vendor folders.
//! - **`substitute`**: literal word replacement across eligible text files.
//! - **`extensions`**: the allow-list of text file extensions.
//! - **`prompt`**: line and terminal prompters behind one trait.
//! - **`config`**: clone settings and the environment variables behind them.
//! - **`output`**: color and emoji decisions.

pub mod config;
pub mod error;
pub mod extensions;
pub mod git;
pub mod locator;
pub mod output;
pub mod prompt;
pub mod substitute;
pub mod tree;
