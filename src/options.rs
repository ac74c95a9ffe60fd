//! Parsed invocation options
//!
//! Everything the command line decides is collected here into a single
//! immutable [`Invocation`] value. It is built once by [`crate::cli`] and only
//! read afterwards by the [`crate::commands::Processor`].

use crate::store::TagSet;
use std::path::PathBuf;

/// The single action an invocation performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// An operation was requested but not recognized
    None,
    /// No operation was requested at all
    Unknown,
    /// Replace each target's tags
    Set,
    /// Union each target's tags with the given tags
    Add,
    /// Subtract the given tags from each target's tags
    Remove,
    /// Report targets whose tags match
    Match,
    /// Search roots for files whose tags match
    Find,
    /// Report each target's tags
    List,
}

impl OperationMode {
    /// Map a selector letter (`s`, `a`, `r`, `m`, `f`, `l`) to its mode.
    ///
    /// Unrecognized selectors yield [`OperationMode::None`].
    #[must_use]
    pub const fn from_selector(selector: char) -> Self {
        match selector {
            's' => Self::Set,
            'a' => Self::Add,
            'r' => Self::Remove,
            'm' => Self::Match,
            'f' => Self::Find,
            'l' => Self::List,
            _ => Self::None,
        }
    }

    /// The selector letter of a concrete mode
    #[must_use]
    pub const fn selector(self) -> Option<char> {
        match self {
            Self::Set => Some('s'),
            Self::Add => Some('a'),
            Self::Remove => Some('r'),
            Self::Match => Some('m'),
            Self::Find => Some('f'),
            Self::List => Some('l'),
            Self::None | Self::Unknown => None,
        }
    }

    /// Whether the mode rewrites the tag attribute
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Set | Self::Add | Self::Remove)
    }

    /// Whether the mode can run without path operands
    #[must_use]
    pub const fn allows_no_paths(self) -> bool {
        matches!(self, Self::List | Self::Find)
    }

    /// Default presentation for the records this mode prints
    #[must_use]
    pub const fn default_output(self) -> OutputFlags {
        match self {
            Self::List => OutputFlags {
                name: true,
                tags: true,
                ..OutputFlags::NONE
            },
            _ => OutputFlags {
                name: true,
                ..OutputFlags::NONE
            },
        }
    }
}

/// Presentation toggles for output records
///
/// Each toggle is independent of the others and only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputFlags {
    /// Print the file name
    pub name: bool,
    /// Print the file's tags
    pub tags: bool,
    /// One tag per line beneath the name
    pub garrulous: bool,
    /// Terminate records with NUL instead of newline
    pub nul_terminate: bool,
    /// Colorize tag names
    pub color: bool,
    /// Append `/` to directory names
    pub slash: bool,
}

impl OutputFlags {
    /// No toggles enabled
    pub const NONE: Self = Self {
        name: false,
        tags: false,
        garrulous: false,
        nul_terminate: false,
        color: false,
        slash: false,
    };

    #[must_use]
    pub const fn with_name(mut self, v: bool) -> Self {
        self.name = v;
        self
    }

    #[must_use]
    pub const fn with_tags(mut self, v: bool) -> Self {
        self.tags = v;
        self
    }

    #[must_use]
    pub const fn with_garrulous(mut self, v: bool) -> Self {
        self.garrulous = v;
        self
    }

    #[must_use]
    pub const fn with_nul_terminate(mut self, v: bool) -> Self {
        self.nul_terminate = v;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, v: bool) -> Self {
        self.color = v;
        self
    }

    #[must_use]
    pub const fn with_slash(mut self, v: bool) -> Self {
        self.slash = v;
        self
    }

    /// Record terminator byte
    #[must_use]
    pub const fn terminator(&self) -> u8 {
        if self.nul_terminate { b'\0' } else { b'\n' }
    }
}

/// Domain a find operation searches when no roots are given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Current directory
    #[default]
    None,
    /// The user's home directory
    Home,
    /// Local volumes
    Local,
    /// Network volumes
    Network,
}

impl std::fmt::Display for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Home => "home",
            Self::Local => "local",
            Self::Network => "network",
        };
        f.write_str(name)
    }
}

/// How directories are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalFlags {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Descend into directories
    pub recursive: bool,
    /// Replace directory operands by their contents
    pub enter: bool,
}

/// Fully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    mode: OperationMode,
    output: OutputFlags,
    scope: SearchScope,
    traversal: TraversalFlags,
    tags: TagSet,
    paths: Vec<PathBuf>,
}

impl Invocation {
    #[must_use]
    pub const fn new(
        mode: OperationMode,
        output: OutputFlags,
        scope: SearchScope,
        traversal: TraversalFlags,
        tags: TagSet,
        paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            mode,
            output,
            scope,
            traversal,
            tags,
            paths,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> OperationMode {
        self.mode
    }

    #[must_use]
    pub const fn output(&self) -> OutputFlags {
        self.output
    }

    #[must_use]
    pub const fn scope(&self) -> SearchScope {
        self.scope
    }

    #[must_use]
    pub const fn traversal(&self) -> TraversalFlags {
        self.traversal
    }

    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
