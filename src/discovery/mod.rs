//! Target discovery
//!
//! Turns path operands into the sequence of paths an operation visits, and
//! resolves the roots of a find operation.
//!
//! | flags                  | directory operand yields        |
//! |------------------------|---------------------------------|
//! | none                   | the directory itself            |
//! | `--enter`              | its immediate children          |
//! | `--recursive`          | itself, then all descendants    |
//! | `--enter --recursive`  | all descendants                 |
//!
//! Hidden entries are skipped while enumerating unless `--all` is given;
//! operands themselves are always visited. Entries come out sorted by file
//! name.
//!
//! Symlinks named as operands are followed by the store, like any path the
//! user typed. Symlinks met while enumerating are skipped entirely: they are
//! neither visited nor descended into, so a walk never touches files outside
//! the operand and a dangling link is not an error.
//!
//! A find treats each root like an `--enter` operand: the root itself is never
//! a candidate, its children are, and `--recursive` extends the search to all
//! descendants.

pub mod scope;

pub use scope::{ScopeError, scope_roots};

use crate::options::TraversalFlags;
use crate::store::StoreError;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lazily produced targets; enumeration failures come out as errors in line
pub type Targets = Box<dyn Iterator<Item = Result<PathBuf, StoreError>>>;

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".") && name != "." && name != ".."
}

/// Whether an enumerated entry is visited (and, for directories, descended)
fn is_visited(entry: &DirEntry, show_hidden: bool) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if entry.path_is_symlink() {
        tracing::debug!(path = %entry.path().display(), "skipping symlink");
        return false;
    }
    show_hidden || !is_hidden(entry.file_name())
}

fn walk_error(err: walkdir::Error) -> StoreError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let message = err.to_string();
    match err.into_io_error() {
        Some(io_err) => StoreError::from_io(&path, io_err),
        None => StoreError::Io {
            path,
            source: io::Error::other(message),
        },
    }
}

/// Display path for an enumerated entry; children of `.` lose the `./`
fn entry_path(root: &Path, entry: &DirEntry) -> PathBuf {
    if root == Path::new(".")
        && entry.depth() > 0
        && let Ok(rel) = entry.path().strip_prefix(".")
    {
        return rel.to_path_buf();
    }
    entry.path().to_path_buf()
}

/// Paths visited for one operand under `traversal`
#[must_use]
pub fn expand(operand: &Path, traversal: TraversalFlags) -> Targets {
    let descend = traversal.enter || traversal.recursive;
    if !descend || !operand.is_dir() {
        return Box::new(std::iter::once(Ok(operand.to_path_buf())));
    }

    let min_depth = usize::from(traversal.enter);
    let max_depth = if traversal.recursive { usize::MAX } else { 1 };
    let show_hidden = traversal.show_hidden;
    let root = operand.to_path_buf();

    tracing::debug!(root = %root.display(), min_depth, max_depth, show_hidden, "enumerating");

    let walker = WalkDir::new(operand)
        .follow_links(false)
        .sort_by_file_name()
        .min_depth(min_depth)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(move |e| is_visited(e, show_hidden));

    Box::new(walker.map(move |entry| match entry {
        Ok(entry) => Ok(entry_path(&root, &entry)),
        Err(err) => Err(walk_error(err)),
    }))
}

/// Paths below `root` a find operation considers: its children, or all of
/// its descendants with `--recursive`
#[must_use]
pub fn find_candidates(root: &Path, traversal: TraversalFlags) -> Targets {
    expand(
        root,
        TraversalFlags {
            enter: true,
            ..traversal
        },
    )
}
