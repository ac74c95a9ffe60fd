//! Testing utilities for tag
//!
//! This module provides a `TempTree` wrapper for scratch directory trees, a
//! check for extended attribute support on the filesystem under test, and a
//! serialized working-directory switch.
//!
//! Only available when compiled with `cfg(test)`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::TempDir;

static CURRENT_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Scratch directory tree that is removed on drop
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create an empty tree in the system temp directory
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and its parent directories) relative to the root
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, b"test content").expect("Failed to write test file");
        path
    }

    /// Create a directory (and its parents) relative to the root
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).expect("Failed to create test dir");
        path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `user.*` extended attributes can be written on `path`
///
/// Tests touching real attributes return early when this is false, since
/// some temp filesystems (older tmpfs, some containers) reject them.
#[must_use]
pub fn xattrs_supported(path: &Path) -> bool {
    const SCRATCH: &str = "user.tag.scratch";
    if !xattr::SUPPORTED_PLATFORM {
        return false;
    }
    match xattr::set(path, SCRATCH, b"1") {
        Ok(()) => {
            let _ = xattr::remove(path, SCRATCH);
            true
        }
        Err(_) => false,
    }
}

/// Restores the previous working directory on drop
struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

/// Run `f` with the process working directory set to `dir`
///
/// Calls are serialized, and the previous directory is restored even if `f`
/// panics. Tests running concurrently must only use absolute paths.
///
/// # Panics
/// Panics if the working directory cannot be read or changed.
pub fn with_current_dir<R>(dir: &Path, f: impl FnOnce() -> R) -> R {
    let _lock = CURRENT_DIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = env::current_dir().expect("Failed to read current dir");
    env::set_current_dir(dir).expect("Failed to change current dir");
    let _restore = RestoreDir(previous);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_cleanup() {
        let root;
        {
            let tree = TempTree::new();
            root = tree.path().to_path_buf();
            tree.file("a/b/c.txt");
            assert!(root.join("a/b/c.txt").exists());
        }
        assert!(!root.exists());
    }

    #[test]
    fn test_file_content() {
        let tree = TempTree::new();
        let file = tree.file("x.txt");
        assert_eq!(fs::read_to_string(file).unwrap(), "test content");
    }

    #[test]
    fn test_with_current_dir_restores() {
        let outer = TempTree::new();
        let inner = TempTree::new();
        let (inside, after) = with_current_dir(outer.path(), || {
            let inside = {
                let _restore = RestoreDir(env::current_dir().unwrap());
                env::set_current_dir(inner.path()).unwrap();
                env::current_dir().unwrap()
            };
            (inside, env::current_dir().unwrap())
        });
        assert_eq!(inside.canonicalize().unwrap(), inner.path().canonicalize().unwrap());
        assert_eq!(after.canonicalize().unwrap(), outer.path().canonicalize().unwrap());
    }

    #[test]
    fn test_dir_creation() {
        let tree = TempTree::new();
        let dir = tree.dir("nested/dir");
        assert!(dir.is_dir());
    }
}
