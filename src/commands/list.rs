//! List command

use super::{Outcome, Processor};
use crate::output;
use crate::store::TagStore;
use crate::TagError;
use std::io::Write;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TagError>;

/// Execute the list operation
///
/// Without path operands the current directory's contents are listed.
///
/// # Errors
/// Returns an error if `out` or `err` cannot be written.
pub fn execute<S: TagStore>(
    processor: &Processor<'_, S>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let invocation = processor.invocation();
    let flags = invocation.output();
    let store = processor.store();

    let (operands, traversal) = if invocation.paths().is_empty() {
        let mut traversal = invocation.traversal();
        traversal.enter = true;
        (vec![PathBuf::from(".")], traversal)
    } else {
        (invocation.paths().to_vec(), invocation.traversal())
    };

    processor.visit_targets(&operands, traversal, err, |path| {
        let tags = store.read_tags(path)?;
        output::write_record(out, path, path.is_dir(), &tags, flags)?;
        Ok(true)
    })
}
