//! Tag set value type
//!
//! A [`TagSet`] is the unordered, unique-by-name collection of tags attached
//! to one file. It is kept sorted so every rendering of it is deterministic.
//!
//! # Encoding
//!
//! On disk a set is the UTF-8 tag names joined by [`SEPARATOR`]. Decoding
//! trims each name and drops empty ones, so `" a, ,b "` reads as `{a, b}`.

use std::collections::BTreeSet;
use std::collections::btree_set;

/// Separator between tag names in the stored attribute
pub const SEPARATOR: char = ',';

/// Unique, sorted collection of tag names
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Decode a stored attribute value
    #[must_use]
    pub fn decode(value: &str) -> Self {
        value.split(SEPARATOR).collect()
    }

    /// Encode for storage
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    /// Insert a tag, returning whether it was new.
    ///
    /// Names are trimmed; empty names and names containing the separator are
    /// ignored.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || tag.contains(SEPARATOR) {
            return false;
        }
        self.0.insert(tag.to_string())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Tags present in either set
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Tags of `self` that are not in `other`
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
