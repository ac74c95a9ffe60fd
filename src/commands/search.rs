//! Match and find commands

use super::{Outcome, Processor, report_failure};
use crate::discovery::{self, scope_roots};
use crate::output;
use crate::patterns::TagQuery;
use crate::store::{StoreError, TagStore};
use crate::TagError;
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, TagError>;

/// Report every target whose tags match the configured tags
///
/// # Errors
/// Returns `TagError::PatternError` when a tag is not a valid glob, before
/// any target is read.
pub fn match_targets<S: TagStore>(
    processor: &Processor<'_, S>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let invocation = processor.invocation();
    let query = TagQuery::from_tags(invocation.tags())?;
    let flags = invocation.output();
    let store = processor.store();

    processor.visit_targets(invocation.paths(), invocation.traversal(), err, |path| {
        let tags = store.read_tags(path)?;
        if !query.matches(&tags) {
            return Ok(false);
        }
        output::write_record(out, path, path.is_dir(), &tags, flags)?;
        Ok(true)
    })
}

/// Search below each root for files whose tags match
///
/// Roots are the path operands, or the roots of the invocation's scope when
/// there are none. Each root's children are searched, and with `--recursive`
/// all of its descendants. A missing root is a failure; candidates that
/// cannot be read are skipped with a warning and counted.
///
/// # Errors
/// Returns `TagError::PatternError` for an invalid glob and
/// `TagError::ScopeError` when the scope cannot be searched.
pub fn find<S: TagStore>(
    processor: &Processor<'_, S>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let invocation = processor.invocation();
    let query = TagQuery::from_tags(invocation.tags())?;
    tracing::debug!(
        patterns = query.patterns.len(),
        globs = query.patterns.iter().filter(|p| p.is_glob()).count(),
        "compiled query"
    );
    let roots = if invocation.paths().is_empty() {
        scope_roots(invocation.scope(), processor.scopes())?
    } else {
        invocation.paths().to_vec()
    };

    let mut outcome = Outcome::default();
    for root in &roots {
        if !root.exists() {
            let error = StoreError::from_io(root, io::Error::from(io::ErrorKind::NotFound));
            report_failure(err, &error)?;
            outcome.failed += 1;
            continue;
        }
        tracing::debug!(root = %root.display(), scope = %invocation.scope(), "searching");
        outcome.merge(search_root(processor, &query, root, out)?);
    }
    Ok(outcome)
}

fn search_root<S: TagStore>(
    processor: &Processor<'_, S>,
    query: &TagQuery,
    root: &Path,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let invocation = processor.invocation();
    let flags = invocation.output();
    let mut outcome = Outcome::default();

    for candidate in discovery::find_candidates(root, invocation.traversal()) {
        let read = candidate.and_then(|path| {
            let tags = processor.store().read_tags(&path)?;
            Ok((path, tags))
        });
        let (path, tags) = match read {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("skipping unreadable candidate: {e}");
                outcome.skipped += 1;
                continue;
            }
        };

        outcome.processed += 1;
        if query.matches(&tags) {
            output::write_record(out, &path, path.is_dir(), &tags, flags)?;
            outcome.reported += 1;
        }
    }
    Ok(outcome)
}
