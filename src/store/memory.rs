//! In-memory tag store
//!
//! Keeps tags in a map instead of on the files themselves. Targets must still
//! exist on disk so that missing paths fail the same way they do with
//! [`super::XattrStore`].

use super::{StoreError, TagSet, TagStore};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Tag store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<PathBuf, TagSet>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed tags for a path without checking that it exists
    pub fn preset(&self, path: impl Into<PathBuf>, tags: TagSet) {
        self.entries.borrow_mut().insert(path.into(), tags);
    }

    /// Number of paths that currently carry tags
    #[must_use]
    pub fn tagged_count(&self) -> usize {
        self.entries.borrow().values().filter(|t| !t.is_empty()).count()
    }
}

impl TagStore for MemoryStore {
    fn read_tags(&self, path: &Path) -> Result<TagSet, StoreError> {
        path.metadata().map_err(|e| StoreError::from_io(path, e))?;
        Ok(self.entries.borrow().get(path).cloned().unwrap_or_default())
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), StoreError> {
        path.metadata().map_err(|e| StoreError::from_io(path, e))?;
        let mut entries = self.entries.borrow_mut();
        if tags.is_empty() {
            entries.remove(path);
        } else {
            entries.insert(path.to_path_buf(), tags.clone());
        }
        Ok(())
    }
}
