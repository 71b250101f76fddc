//! # Word Substitution
//!
//! Rewrites every eligible text file below a root directory, replacing all
//! literal occurrences of one string with another. This is how a cloned base
//! project gets renamed: `substitute(".", "base-app", "my-app")`.
//!
//! ## Rules
//!
//! - Dot-directories (`.git`, `.github`, ...) are pruned and never entered.
//! - Only files accepted by [`crate::extensions::is_eligible`] are touched.
//! - Replacement is a plain, case-sensitive substring replace, left to right,
//!   non-overlapping. No regex, no word boundaries.
//! - Every eligible file is rewritten and reported, even when the old string
//!   does not occur in it.
//! - Original permission bits are restored after the write.
//! - The first error aborts the walk. Files rewritten before it stay
//!   rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::extensions::is_eligible;

/// Files rewritten by one substitution pass, relative to the walk root, in
/// visitation order.
pub type ModifiedFiles = Vec<PathBuf>;

/// Replace every occurrence of `old` with `new` in all eligible files under
/// `root`.
pub fn substitute<P: AsRef<Path>>(root: P, old: &str, new: &str) -> Result<ModifiedFiles> {
    let root = root.as_ref();
    let mut modified = ModifiedFiles::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_dir() || !is_eligible(entry.path()) {
            continue;
        }

        let path = entry.path();
        info!(
            "Substituting '{}' with '{}' in file: {}",
            old,
            new,
            path.display()
        );
        rewrite_file(path, old, new)?;

        modified.push(relative_to(path, root));
    }

    Ok(modified)
}

/// Dot-directories below the root are pruned. The root itself is always
/// entered, even when it is `.`.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

fn rewrite_file(path: &Path, old: &str, new: &str) -> Result<()> {
    let io_err = |source: std::io::Error| Error::Substitution {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read(path).map_err(io_err)?;
    let permissions = fs::metadata(path).map_err(io_err)?.permissions();

    fs::write(path, replace_literal(&content, old, new)).map_err(io_err)?;
    fs::set_permissions(path, permissions).map_err(io_err)?;

    Ok(())
}

/// Replace all non-overlapping occurrences of `old` in `content`.
///
/// Works on raw bytes so files that are not valid UTF-8 are still handled.
/// An empty `old` leaves the content unchanged.
pub fn replace_literal(content: &[u8], old: &str, new: &str) -> Vec<u8> {
    let needle = old.as_bytes();
    if needle.is_empty() {
        return content.to_vec();
    }

    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        if content[i..].starts_with(needle) {
            out.extend_from_slice(new.as_bytes());
            i += needle.len();
        } else {
            out.push(content[i]);
            i += 1;
        }
    }
    out
}
