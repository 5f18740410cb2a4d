//! Atomic persistence of encoded output bytes.
//!
//! Concurrent invocations may target the same destination — two build jobs
//! producing the same thumbnail is the canonical case. Each writer stages
//! its bytes in a uniquely-named temporary file inside the destination
//! directory, then commits with a single rename-with-replace. Observers
//! see either the prior complete file or one complete new file, never a
//! mixture. Which concurrent writer wins is unspecified; that race is
//! accepted.
//!
//! The staging file must live in the same directory as the destination so
//! the final rename is a same-volume operation (cross-volume renames are
//! not atomic on all filesystems). Its name carries the destination stem,
//! a random token, and the destination extension, so format-sniffing tools
//! treat it consistently. On any failure before the rename the staging
//! file is removed when its handle drops.

use crate::error::ResizeError;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// 22 random alphanumeric characters ≈ 131 bits.
const STAGING_RAND_CHARS: usize = 22;

/// Write `bytes` to `target`, atomically replacing any existing file.
///
/// Creates the destination's parent directory chain if absent (idempotent,
/// safe under concurrent creation by sibling invocations).
pub fn commit(bytes: &[u8], target: &Path) -> Result<(), ResizeError> {
    let persist_err = |e: std::io::Error| ResizeError::Persist {
        path: target.to_path_buf(),
        source: e,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(&persist_err)?;

    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let suffix = match target.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    };

    let mut staging = Builder::new()
        .prefix(&format!("{stem}_tmp_"))
        .suffix(&suffix)
        .rand_bytes(STAGING_RAND_CHARS)
        .tempfile_in(dir)
        .map_err(&persist_err)?;
    staging.write_all(bytes).map_err(&persist_err)?;
    staging.flush().map_err(&persist_err)?;

    // Single atomic rename-with-replace. On failure the staging file comes
    // back inside the error and is deleted when it drops.
    staging.persist(target).map_err(|e| persist_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn commit_writes_the_exact_bytes() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("out.png");

        commit(b"encoded image bytes", &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"encoded image bytes");
    }

    #[test]
    fn commit_creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a").join("b").join("c").join("out.jpg");

        commit(b"data", &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"data");
    }

    #[test]
    fn commit_replaces_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("out.png");
        std::fs::write(&target, b"old complete file").unwrap();

        commit(b"new complete file", &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"new complete file");
    }

    #[test]
    fn commit_leaves_no_staging_file_behind() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("out.png");

        commit(b"data", &target).unwrap();

        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["out.png"]);
    }

    #[test]
    fn failed_commit_leaves_destination_untouched() {
        let tmp = TempDir::new().unwrap();
        // A file where the parent directory should be makes every staging
        // step fail
        let blocker = tmp.path().join("blocked");
        std::fs::write(&blocker, b"file, not a directory").unwrap();
        let target = blocker.join("out.png");

        let err = commit(b"data", &target).unwrap_err();
        assert!(matches!(err, ResizeError::Persist { .. }));
        assert_eq!(std::fs::read(&blocker).unwrap(), b"file, not a directory");
    }

    #[test]
    fn sequential_commits_are_independent() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("out.png");

        commit(b"first", &target).unwrap();
        commit(b"second", &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"second");

        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["out.png"]);
    }
}
