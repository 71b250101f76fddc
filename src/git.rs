use std::path::Path;
use std::process::Command;

use log::{debug, info};

use crate::error::Error;

/// Clone `url` into `destination` with the given version-control binary.
///
/// Runs `<git_binary> clone <url> <destination>` with stdin, stdout and stderr
/// inherited, so progress output and credential prompts reach the user
/// directly. The system git handles authentication on its own:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
pub fn clone(git_binary: &Path, url: &str, destination: &Path) -> Result<(), Error> {
    debug!(
        "Running {} clone {} {}",
        git_binary.display(),
        url,
        destination.display()
    );

    let status = Command::new(git_binary)
        .arg("clone")
        .arg(url)
        .arg(destination)
        .status()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: format!("failed to run '{}': {}", git_binary.display(), e),
            hint: Some(format!(
                "Make sure '{}' is installed or set PROJECT_SCAFFOLDER_CLI_GITBINARY",
                git_binary.display()
            )),
        })?;

    if !status.success() {
        let hint = if url.starts_with("git@") {
            Some(
                "SSH clones need a key added to ssh-agent and registered with GitHub".to_string(),
            )
        } else {
            Some("Check that the repository exists and is public".to_string())
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: format!("'{}' exited with {}", git_binary.display(), status),
            hint,
        });
    }

    info!("Cloned {} into {}", url, destination.display());
    Ok(())
}
