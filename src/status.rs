//! Exit status codes for the CLI
//!
//! - 0: Every target was processed
//! - 1: At least one target failed, or the find scope was unavailable
//! - 2: Usage error; nothing was touched

use std::process::{ExitCode, Termination};

/// Exit status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Full success
    Success = 0,
    /// One or more targets failed
    Failure = 1,
    /// Invalid command line
    Usage = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Status for a run that failed with `error` before finishing
    #[must_use]
    pub const fn from_error(error: &crate::TagError) -> Self {
        if error.is_usage() { Self::Usage } else { Self::Failure }
    }
}
