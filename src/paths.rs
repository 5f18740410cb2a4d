//! CLI path resolution.
//!
//! Both paths on the command line are expanded (`~` shorthand) and made
//! absolute before use. Resolution must not require the path to exist —
//! the destination usually doesn't yet — so this is lexical
//! absolutization, not `canonicalize`.

use std::path::{Path, PathBuf};

/// Expand a leading `~` and make the path absolute.
///
/// Falls back to the expanded path as-is if the current directory is
/// unavailable.
pub fn resolve(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    std::path::absolute(&expanded).unwrap_or(expanded)
}

/// Replace a leading `~` component with the user's home directory.
///
/// `~user` forms are passed through untouched, as is everything when no
/// home directory can be determined.
fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
