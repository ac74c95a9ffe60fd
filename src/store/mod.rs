//! Tag storage
//!
//! Provides the [`TagStore`] seam between the processor and wherever tags
//! actually live:
//! - [`XattrStore`]: an extended attribute on each file (the real store)
//! - [`MemoryStore`]: an in-process map, for tests and embedding

pub mod attribute;
pub mod error;
pub mod memory;
pub mod types;

pub use attribute::{DEFAULT_ATTRIBUTE, XattrStore};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use types::TagSet;

use std::path::Path;

/// Read and write the tag set of a single path
pub trait TagStore {
    /// Read the tags of `path`. An untagged path yields an empty set.
    ///
    /// # Errors
    /// Returns `StoreError` if the path is missing or its attribute cannot be read.
    fn read_tags(&self, path: &Path) -> Result<TagSet, StoreError>;

    /// Replace the tags of `path`. Writing an empty set clears them.
    ///
    /// # Errors
    /// Returns `StoreError` if the path is missing or its attribute cannot be written.
    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), StoreError>;
}

impl<T: TagStore + ?Sized> TagStore for &T {
    fn read_tags(&self, path: &Path) -> Result<TagSet, StoreError> {
        (**self).read_tags(path)
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), StoreError> {
        (**self).write_tags(path, tags)
    }
}
