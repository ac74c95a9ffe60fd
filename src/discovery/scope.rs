//! Find scope resolution
//!
//! Maps a [`SearchScope`] to the directories a find operation walks when the
//! command line names no roots of its own.

use crate::config::ScopeSettings;
use crate::options::SearchScope;
use std::path::PathBuf;
use thiserror::Error;

/// Errors resolving a search scope
#[derive(Debug, Error)]
pub enum ScopeError {
    /// Nothing is configured for the scope
    #[error("no roots are configured for the {scope} scope")]
    NoRoots { scope: SearchScope },

    /// The scope exists but cannot be searched
    #[error("the {scope} scope is unavailable: {reason}")]
    Unavailable { scope: SearchScope, reason: String },
}

/// Directories to search for `scope`
///
/// # Errors
/// Returns `ScopeError::NoRoots` when the scope has no configured roots and
/// `ScopeError::Unavailable` when none of its roots exist.
pub fn scope_roots(scope: SearchScope, settings: &ScopeSettings) -> Result<Vec<PathBuf>, ScopeError> {
    let configured = match scope {
        SearchScope::None => return Ok(vec![PathBuf::from(".")]),
        SearchScope::Home => {
            let home = settings.home.clone().or_else(dirs::home_dir).ok_or_else(|| {
                ScopeError::Unavailable {
                    scope,
                    reason: "home directory could not be determined".into(),
                }
            })?;
            vec![home]
        }
        SearchScope::Local => settings.local.clone(),
        SearchScope::Network => settings.network.clone(),
    };

    if configured.is_empty() {
        return Err(ScopeError::NoRoots { scope });
    }

    let existing: Vec<PathBuf> = configured.into_iter().filter(|p| p.is_dir()).collect();
    if existing.is_empty() {
        return Err(ScopeError::Unavailable {
            scope,
            reason: "none of its directories exist".into(),
        });
    }
    Ok(existing)
}
