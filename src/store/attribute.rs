//! Extended attribute backed tag store

use super::{StoreError, TagSet, TagStore};
use std::path::Path;

/// Default attribute name, the freedesktop.org tag convention
pub const DEFAULT_ATTRIBUTE: &str = "user.xdg.tags";

/// Stores tags in an extended attribute of each file
///
/// Symlinks are followed, so a link shares the tags of its target.
#[derive(Debug, Clone)]
pub struct XattrStore {
    attribute: String,
}

impl XattrStore {
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    fn ensure_exists(path: &Path) -> Result<(), StoreError> {
        // metadata() follows symlinks, like the attribute calls below
        path.metadata()
            .map(|_| ())
            .map_err(|e| StoreError::from_io(path, e))
    }
}

impl Default for XattrStore {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl TagStore for XattrStore {
    fn read_tags(&self, path: &Path) -> Result<TagSet, StoreError> {
        Self::ensure_exists(path)?;
        match xattr::get_deref(path, &self.attribute) {
            Ok(Some(bytes)) => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| StoreError::InvalidEncoding(path.to_path_buf()))?;
                Ok(TagSet::decode(&value))
            }
            Ok(None) => Ok(TagSet::new()),
            Err(e) => Err(StoreError::from_io(path, e)),
        }
    }

    fn write_tags(&self, path: &Path, tags: &TagSet) -> Result<(), StoreError> {
        Self::ensure_exists(path)?;
        if tags.is_empty() {
            let present = xattr::get_deref(path, &self.attribute)
                .map_err(|e| StoreError::from_io(path, e))?
                .is_some();
            if present {
                xattr::remove_deref(path, &self.attribute)
                    .map_err(|e| StoreError::from_io(path, e))?;
            }
            return Ok(());
        }
        xattr::set_deref(path, &self.attribute, tags.encode().as_bytes())
            .map_err(|e| StoreError::from_io(path, e))
    }
}
