//! Tag - manipulate file tags stored in extended attributes
//!
//! This library provides the command processor behind the `tag` executable:
//! arguments are parsed once into an immutable [`options::Invocation`], and a
//! [`commands::Processor`] performs the single requested operation (set, add,
//! remove, match, find or list) against a [`store::TagStore`].

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod options;
pub mod output;
pub mod patterns;
pub mod status;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagError {
    /// Attribute store error
    #[error("{0}")]
    StoreError(#[from] store::StoreError),
    /// Tag pattern error
    #[error("Pattern error: {0}")]
    PatternError(#[from] patterns::PatternError),
    /// Search scope error
    #[error("Scope error: {0}")]
    ScopeError(#[from] discovery::ScopeError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid command line usage
    #[error("Usage error: {0}")]
    Usage(String),
}

impl TagError {
    /// Whether this error is a usage error that must stop the run before any
    /// target is touched
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::PatternError(_))
    }
}
