//! Attribute store error types
//!
//! This module defines the errors that can occur while reading or writing a
//! file's tag attribute. Every error carries the path it concerns so that the
//! processor can report it per target and move on.
//!
//! # Error Types
//!
//! - **`NotFound`**: The target does not exist
//! - **`PermissionDenied`**: The attribute could not be read or written
//! - **`Unsupported`**: The filesystem or platform has no extended attributes
//! - **`InvalidEncoding`**: The stored attribute is not valid UTF-8
//! - **`Io`**: Any other I/O failure

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Attribute store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Target does not exist on the filesystem
    #[error("{}: No such file or directory", .0.display())]
    NotFound(PathBuf),

    /// Access to the target or its attribute was refused
    #[error("{}: Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// Extended attributes are not available for the target
    #[error("{}: Tags are not supported on this filesystem", .0.display())]
    Unsupported(PathBuf),

    /// The stored attribute value is not valid UTF-8
    #[error("{}: Tag attribute is not valid UTF-8", .0.display())]
    InvalidEncoding(PathBuf),

    /// Any other I/O failure
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Classify an I/O error raised while touching `path`
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::Unsupported => Self::Unsupported(path),
            _ => Self::Io { path, source: err },
        }
    }

    /// The path the error concerns
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path)
            | Self::PermissionDenied(path)
            | Self::Unsupported(path)
            | Self::InvalidEncoding(path)
            | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
