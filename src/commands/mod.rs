//! Command implementations
//!
//! The [`Processor`] performs the one operation an [`Invocation`] selects.
//! Each operation family lives in its own module with an `execute` function:
//! - [`tag`]: set, add and remove
//! - [`list`]: list
//! - [`search`]: match and find
//!
//! Per-target failures are written to the error stream as `tag: <error>` and
//! counted in the returned [`Outcome`]; they never stop later targets.

pub mod list;
pub mod search;
pub mod tag;

use crate::config::ScopeSettings;
use crate::discovery;
use crate::options::{Invocation, OperationMode, TraversalFlags};
use crate::status::ExitStatus;
use crate::store::{StoreError, TagStore};
use crate::TagError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, TagError>;

/// Counters collected while performing an operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Targets handled without error
    pub processed: usize,
    /// Records printed
    pub reported: usize,
    /// Targets that failed
    pub failed: usize,
    /// Find candidates that could not be read
    pub skipped: usize,
}

impl Outcome {
    /// Exit status for a run that produced this outcome
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        if self.failed > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    fn merge(&mut self, other: Self) {
        self.processed += other.processed;
        self.reported += other.reported;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// Write a per-target failure to the error stream
///
/// # Errors
/// Returns an `io::Error` if the error stream cannot be written.
pub fn report_failure(err: &mut dyn Write, error: &StoreError) -> io::Result<()> {
    tracing::debug!(path = %error.path().display(), "target failed: {error}");
    writeln!(err, "tag: {error}")
}

/// Performs the operation of one invocation against a tag store
pub struct Processor<'a, S: TagStore> {
    invocation: &'a Invocation,
    store: S,
    scopes: ScopeSettings,
}

impl<'a, S: TagStore> Processor<'a, S> {
    #[must_use]
    pub fn new(invocation: &'a Invocation, store: S) -> Self {
        Self {
            invocation,
            store,
            scopes: ScopeSettings::default(),
        }
    }

    /// Use `scopes` to resolve find scopes
    #[must_use]
    pub fn with_scopes(mut self, scopes: ScopeSettings) -> Self {
        self.scopes = scopes;
        self
    }

    #[must_use]
    pub const fn invocation(&self) -> &Invocation {
        self.invocation
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn scopes(&self) -> &ScopeSettings {
        &self.scopes
    }

    /// Perform the selected operation, writing records to `out` and
    /// per-target failures to `err`.
    ///
    /// # Errors
    /// Returns `TagError::Usage` (or a pattern error) before touching any
    /// target when the invocation is unusable, `TagError::ScopeError` when a
    /// find scope cannot be searched, and `TagError::IoError` when `out` or
    /// `err` cannot be written.
    pub fn perform(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome> {
        let mode = self.invocation.mode();
        tracing::debug!(
            ?mode,
            mutating = mode.is_mutating(),
            paths = self.invocation.paths().len(),
            "performing operation"
        );

        if !mode.allows_no_paths()
            && self.invocation.paths().is_empty()
            && let Some(selector) = mode.selector()
        {
            return Err(TagError::Usage(format!(
                "the -{selector} operation requires at least one path"
            )));
        }

        let outcome = match mode {
            OperationMode::None => {
                return Err(TagError::Usage("unrecognized operation mode".into()));
            }
            OperationMode::Unknown => {
                return Err(TagError::Usage("no operation mode specified".into()));
            }
            OperationMode::Set => tag::execute(self, tag::Update::Set, err)?,
            OperationMode::Add => tag::execute(self, tag::Update::Add, err)?,
            OperationMode::Remove => tag::execute(self, tag::Update::Remove, err)?,
            OperationMode::Match => search::match_targets(self, out, err)?,
            OperationMode::Find => search::find(self, out, err)?,
            OperationMode::List => list::execute(self, out, err)?,
        };
        out.flush()?;
        Ok(outcome)
    }

    /// Run `visit` on every target produced from `operands`.
    ///
    /// `visit` returns whether it printed a record. Store errors (from the
    /// walk or from `visit`) are reported and counted; any other error aborts.
    fn visit_targets<F>(
        &self,
        operands: &[PathBuf],
        traversal: TraversalFlags,
        err: &mut dyn Write,
        mut visit: F,
    ) -> Result<Outcome>
    where
        F: FnMut(&Path) -> Result<bool>,
    {
        let mut outcome = Outcome::default();
        for operand in operands {
            for target in discovery::expand(operand, traversal) {
                match target.map_err(TagError::from).and_then(|path| visit(&path)) {
                    Ok(reported) => {
                        outcome.processed += 1;
                        outcome.reported += usize::from(reported);
                    }
                    Err(TagError::StoreError(e)) => {
                        report_failure(err, &e)?;
                        outcome.failed += 1;
                    }
                    Err(other) => return Err(other),
                }
            }
        }
        Ok(outcome)
    }
}
