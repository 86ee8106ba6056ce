// ============================================================
// Layer 4 — Path Scanner
// ============================================================
// Recursive file discovery under a directory, using walkdir.
//
// The scan is lazy: directories are read only as the caller
// pulls paths, so a slice with a million files never needs its
// full listing in memory. Entries are sorted by file name
// within each directory so runs over the same tree visit the
// documents in the same order.

use std::{
    io,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Lazy iterator over every regular file below a directory.
pub struct ScanPaths {
    inner: walkdir::IntoIter,
}

/// Start a recursive scan of `dir`. Symlinks are followed.
pub fn scan_paths(dir: impl AsRef<Path>) -> ScanPaths {
    let inner = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    ScanPaths { inner }
}

impl Iterator for ScanPaths {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_file() => {
                    return Some(Ok(entry.into_path()));
                }
                // Directories (including the root itself)
                Ok(_) => continue,
                // walkdir errors carry the underlying io::Error
                Err(e) => return Some(Err(io::Error::from(e))),
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nested_files_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("1850/march")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("1850/b.txt"), "b").unwrap();
        fs::write(dir.path().join("1850/march/c.txt"), "c").unwrap();

        let found: Vec<PathBuf> = scan_paths(dir.path())
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let names: Vec<String> = scan_paths(dir.path())
            .map(|p| p.unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_missing_dir_yields_not_found() {
        let dir     = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let first = scan_paths(&missing).next().unwrap();
        assert_eq!(first.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_empty_dir_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(scan_paths(dir.path()).count(), 0);
    }
}
