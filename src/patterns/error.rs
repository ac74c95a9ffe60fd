//! Tag pattern error types
//!
//! Raised while compiling the tags of a match or find query, before any
//! target is read.
//!
//! # Error Types
//!
//! - **`InvalidEmpty`**: An empty tag was given as a pattern
//! - **`InvalidGlob`**: A glob-like tag failed to compile

use thiserror::Error;

/// Errors produced while constructing tag patterns
#[derive(Debug, Error)]
pub enum PatternError {
    /// Empty pattern is invalid
    #[error("Empty tag pattern provided")]
    InvalidEmpty,
    /// Glob failed to parse
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },
}

impl PatternError {
    #[must_use]
    pub fn glob_parse(pattern: &str, reason: &str) -> Self {
        Self::InvalidGlob {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
