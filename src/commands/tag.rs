//! Set, add and remove commands

use super::{Outcome, Processor};
use crate::store::{TagSet, TagStore};
use crate::TagError;

type Result<T> = std::result::Result<T, TagError>;

/// How the configured tags change a target's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Replace
    Set,
    /// Union
    Add,
    /// Subtract
    Remove,
}

impl Update {
    /// Tags a target ends up with
    #[must_use]
    pub fn apply(self, current: &TagSet, tags: &TagSet) -> TagSet {
        match self {
            Self::Set => tags.clone(),
            Self::Add => current.union(tags),
            Self::Remove => current.difference(tags),
        }
    }
}

/// Execute a set, add or remove operation on every target
///
/// Targets whose tags would not change are left untouched.
///
/// # Errors
/// Returns an error if the error stream cannot be written. Store failures are
/// reported per target instead.
pub fn execute<S: TagStore>(
    processor: &Processor<'_, S>,
    update: Update,
    err: &mut dyn std::io::Write,
) -> Result<Outcome> {
    let invocation = processor.invocation();
    let store = processor.store();
    let tags = invocation.tags();

    processor.visit_targets(invocation.paths(), invocation.traversal(), err, |path| {
        if update == Update::Set {
            store.write_tags(path, tags)?;
            tracing::debug!(path = %path.display(), tags = %tags.encode(), "set tags");
            return Ok(false);
        }

        let current = store.read_tags(path)?;
        let updated = update.apply(&current, tags);
        if updated == current {
            tracing::debug!(path = %path.display(), ?update, "tags unchanged");
        } else {
            store.write_tags(path, &updated)?;
            tracing::debug!(path = %path.display(), tags = %updated.encode(), ?update, "updated tags");
        }
        Ok(false)
    })
}
