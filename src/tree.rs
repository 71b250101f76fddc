//! # Directory Tree Rendering
//!
//! Renders a directory as an indented tree, the way the clone command shows a
//! freshly cloned project:
//!
//! ```text
//! src/
//! └──app/
//! │  └──main.ts
//! └──index.ts
//! README.md
//! ```
//!
//! At every level the entries are read once, split into folders and files
//! (keeping the order the filesystem returned them in), and folders are
//! rendered depth-first before files. The last-sibling marker is decided
//! within each group, so the last folder of a level gets `└──` even when
//! files follow it. Hidden directories and the usual vendor
//! folders are skipped at enumeration time and never entered.
//!
//! A directory that cannot be read is reported inline and rendered as empty;
//! rendering of its siblings continues.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::warn;

/// Directory names that are never listed or entered, besides dot-directories.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "vendor"];

/// One entry of a directory listing, as read from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name of the entry (lossily converted to UTF-8)
    pub name: String,
    /// Whether the entry itself is a directory (symlinks are not followed)
    pub is_dir: bool,
    /// Permission bits of the entry
    pub mode: u32,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let file_type = entry.file_type()?;
        let metadata = entry.metadata()?;

        Ok(Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
            mode: permission_bits(&metadata),
        })
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

/// Read all entries of `dir` in enumeration order.
pub fn read_entries(dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(DirectoryEntry::from_dir_entry(&entry?)?);
    }
    Ok(entries)
}

/// Returns `true` for directories the tree never lists: dot-directories,
/// `node_modules` and `vendor`. Files are never excluded.
pub fn is_excluded_dir(entry: &DirectoryEntry) -> bool {
    entry.is_dir && (entry.name.starts_with('.') || EXCLUDED_DIRS.contains(&entry.name.as_str()))
}

/// Build the line prefix for an entry at `depth`.
///
/// Depth 0 has no prefix at all. Deeper levels get `depth - 1` guide
/// segments three columns wide, alternating between a vertical guide on even
/// positions and blank space on odd ones, followed by the branch marker. The
/// entry name follows the marker directly.
pub fn line_prefix(depth: usize, is_last: bool) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::with_capacity(depth * 3);
    for i in 0..depth - 1 {
        prefix.push_str(if i % 2 == 0 { "│  " } else { "   " });
    }
    prefix.push_str(if is_last { "└──" } else { "├──" });
    prefix
}

/// Render the tree rooted at `dir` into `out`, starting at `depth`.
///
/// Only failures writing to `out` are returned; unreadable directories are
/// reported in the output itself.
pub fn render_tree<W: Write>(dir: &Path, depth: usize, out: &mut W) -> io::Result<()> {
    render_with(dir, depth, out, &read_entries)
}

fn render_with<W, F>(dir: &Path, depth: usize, out: &mut W, read: &F) -> io::Result<()>
where
    W: Write,
    F: Fn(&Path) -> io::Result<Vec<DirectoryEntry>>,
{
    let entries = match read(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read directory {}: {}", dir.display(), e);
            writeln!(out, "Error reading directory {}: {}", dir.display(), e)?;
            return Ok(());
        }
    };

    let (folders, files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .filter(|entry| !is_excluded_dir(entry))
        .partition(|entry| entry.is_dir);

    for (i, folder) in folders.iter().enumerate() {
        let is_last = i + 1 == folders.len();
        writeln!(out, "{}{}/", line_prefix(depth, is_last), folder.name)?;
        render_with(&dir.join(&folder.name), depth + 1, out, read)?;
    }

    for (i, file) in files.iter().enumerate() {
        let is_last = i + 1 == files.len();
        writeln!(out, "{}{}", line_prefix(depth, is_last), file.name)?;
    }

    Ok(())
}

/// Render the tree rooted at `dir` to standard output.
pub fn print_tree(dir: &Path) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tree(dir, 0, &mut out)?;
    out.flush()
}
