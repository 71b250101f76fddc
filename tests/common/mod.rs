//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_fake_git();
//! fixture.command().write_stdin("acme/base\nproject\nno\n").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::scripts;
    pub use super::TestFixture;
}

/// Shell scripts standing in for the version-control binary.
#[allow(dead_code)]
pub mod scripts {
    /// Creates `<dest>/src/main.go`, `<dest>/docs/README.md`, `<dest>/LICENSE`
    /// and a `.git` folder. Arguments are `clone <url> <dest>`.
    pub const CLONE_PROJECT: &str = r#"#!/bin/sh
[ "$1" = "clone" ] || exit 2
mkdir -p "$3/src" "$3/docs" "$3/.git"
printf 'package acme\n' > "$3/src/main.go"
printf '# acme docs\n' > "$3/docs/README.md"
printf 'Copyright acme\n' > "$3/LICENSE"
printf 'acme' > "$3/.git/config"
printf '%s' "$2" > "$3/.git/url"
"#;

    /// Fails like git does when the repository is missing.
    pub const FAIL: &str = r#"#!/bin/sh
echo "fatal: repository not found" >&2
exit 128
"#;
}

/// A temporary working directory for one CLI invocation.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    git_binary: Option<PathBuf>,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            git_binary: None,
        }
    }

    /// Install an executable script as the version-control binary.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_git_script(mut self, script: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp_dir.path().join("fake-git");
        std::fs::write(&path, script).expect("Failed to write fake git");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake git executable");
        self.git_binary = Some(path);
        self
    }

    /// Install the default project-creating fake git.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_fake_git(self) -> Self {
        self.with_git_script(scripts::CLONE_PROJECT)
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file below the fixture root.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a command running in this fixture's directory.
    ///
    /// Environment overrides from the caller's shell are cleared so tests
    /// behave the same everywhere.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scaffolder");
        cmd.current_dir(self.path())
            .env_remove("PROJECT_SCAFFOLDER_CLI_GITBINARY")
            .env_remove("PROJECT_SCAFFOLDER_CLI_PROTOCOL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        if let Some(git) = &self.git_binary {
            cmd.env("PROJECT_SCAFFOLDER_CLI_GITBINARY", git);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
