//! Tag patterns and the match policy used by `match` and `find`.
//!
//! A configured tag is either a literal name or, when it contains `*`, `?` or
//! `[`, a glob (so `*` stands for "any tag"). Matching is case-sensitive.
//!
//! A [`TagQuery`] matches a file's tags when:
//! - the query is non-empty and every pattern matches at least one tag, or
//! - the query is empty and the file has no tags at all.

pub mod error;

pub use error::PatternError;

use crate::store::TagSet;
use glob::Pattern;

/// Single tag pattern (literal or glob)
#[derive(Debug, Clone)]
pub enum TagPattern {
    Literal(String),
    Glob(Pattern),
}

impl TagPattern {
    fn is_glob_token(token: &str) -> bool {
        token.contains('*') || token.contains('?') || token.contains('[')
    }

    /// Classify and compile a tag token.
    ///
    /// # Errors
    /// * Returns `PatternError::InvalidEmpty` if `token` is empty.
    /// * Returns `PatternError::InvalidGlob` if a glob-like token fails to parse.
    pub fn parse(token: &str) -> Result<Self, PatternError> {
        if token.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        if !Self::is_glob_token(token) {
            return Ok(Self::Literal(token.to_string()));
        }
        Pattern::new(token)
            .map(Self::Glob)
            .map_err(|e| PatternError::glob_parse(token, e.msg))
    }

    #[must_use]
    pub const fn is_glob(&self) -> bool {
        matches!(self, Self::Glob(_))
    }

    /// Whether this pattern accepts `tag`
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Literal(s) => s == tag,
            Self::Glob(compiled) => compiled.matches(tag),
        }
    }
}

/// All configured tag patterns of one invocation
#[derive(Debug, Clone, Default)]
pub struct TagQuery {
    pub patterns: Vec<TagPattern>,
}

impl TagQuery {
    /// Compile every tag of `tags` into a pattern.
    ///
    /// # Errors
    /// Returns the first `PatternError` raised by [`TagPattern::parse`].
    pub fn from_tags(tags: &TagSet) -> Result<Self, PatternError> {
        let patterns = tags
            .iter()
            .map(|t| TagPattern::parse(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Apply the match policy to a file's tags
    #[must_use]
    pub fn matches(&self, tags: &TagSet) -> bool {
        if self.patterns.is_empty() {
            return tags.is_empty();
        }
        self.patterns
            .iter()
            .all(|p| tags.iter().any(|t| p.matches(t)))
    }
}
