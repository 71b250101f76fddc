//! Allow-list of text file extensions eligible for word substitution.

use std::path::Path;

/// Extensions (without the leading dot) whose files are rewritten by
/// [`crate::substitute::substitute`].
pub const ELIGIBLE_EXTENSIONS: &[&str] = &[
    "ts", "js", "tsx", "go", "json", "yaml", "yml", "xml", "md", "html", "css", "scss",
];

/// Returns `true` if the file's extension is in [`ELIGIBLE_EXTENSIONS`].
///
/// The comparison is case-sensitive, so `README.MD` is not eligible. Files
/// without an extension, and dotfiles such as `.md` (whose whole name is the
/// stem), are never eligible.
pub fn is_eligible<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ELIGIBLE_EXTENSIONS.contains(&ext))
}
