//! Command-line interface definitions and parsing
//!
//! This module defines the CLI of `tag` using the `clap` crate and turns the
//! parsed arguments into an [`Invocation`].
//!
//! # Operations
//!
//! At most one operation flag may be given; without one, `tag` lists.
//!
//! - **-s/--set TAGS**: replace the tags of each path
//! - **-a/--add TAGS**: add tags to each path
//! - **-r/--remove TAGS**: remove tags from each path
//! - **-m/--match TAGS**: print the paths whose tags match
//! - **-f/--find TAGS**: search for files whose tags match
//! - **-l/--list**: print each path with its tags
//!
//! `TAGS` is a comma-separated list such as `work,draft`.
//!
//! # Examples
//!
//! ```
//! use tag::cli::Cli;
//! use tag::options::OperationMode;
//!
//! let cli = Cli::parse_from_args(["tag", "--add", "work,draft", "notes.txt"]);
//! let invocation = cli.invocation(false);
//! assert_eq!(invocation.mode(), OperationMode::Add);
//! assert_eq!(invocation.tags().len(), 2);
//! ```

use crate::options::{Invocation, OperationMode, OutputFlags, SearchScope, TraversalFlags};
use crate::store::TagSet;
use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tag")]
#[command(about = "Manipulate and query tags on files", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["set", "add", "remove", "match_tags", "find", "list"])))]
#[command(group(ArgGroup::new("scope").args(["home", "local", "network"])))]
pub struct Cli {
    /// Set the tags of each path, replacing existing tags
    #[arg(short = 's', long = "set", value_name = "TAGS")]
    pub set: Option<String>,

    /// Add tags to each path
    #[arg(short = 'a', long = "add", value_name = "TAGS")]
    pub add: Option<String>,

    /// Remove tags from each path
    #[arg(short = 'r', long = "remove", value_name = "TAGS")]
    pub remove: Option<String>,

    /// Print the paths whose tags match (`*` matches any tag)
    #[arg(short = 'm', long = "match", value_name = "TAGS")]
    pub match_tags: Option<String>,

    /// Find files whose tags match
    #[arg(short = 'f', long = "find", value_name = "TAGS")]
    pub find: Option<String>,

    /// List the tags of each path (default)
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Show file names
    #[arg(short = 'n', long = "name", overrides_with = "no_name")]
    pub name: bool,

    /// Hide file names
    #[arg(short = 'N', long = "no-name", overrides_with = "name")]
    pub no_name: bool,

    /// Show tags
    #[arg(short = 't', long = "tags", overrides_with = "no_tags")]
    pub tags: bool,

    /// Hide tags
    #[arg(short = 'T', long = "no-tags", overrides_with = "tags")]
    pub no_tags: bool,

    /// Print one tag per line
    #[arg(short = 'g', long = "garrulous", overrides_with = "no_garrulous")]
    pub garrulous: bool,

    /// Print tags on the same line as the name
    #[arg(short = 'G', long = "no-garrulous", overrides_with = "garrulous")]
    pub no_garrulous: bool,

    /// Colorize tags
    #[arg(short = 'c', long = "color")]
    pub color: bool,

    /// Append / to directory names
    #[arg(short = 'p', long = "slash")]
    pub slash: bool,

    /// Terminate records with NUL instead of newline
    #[arg(short = '0', long = "nul")]
    pub nul: bool,

    /// Include hidden entries when enumerating directories
    #[arg(short = 'A', long = "all")]
    pub all: bool,

    /// Operate on the contents of directory operands
    #[arg(short = 'e', long = "enter")]
    pub enter: bool,

    /// Recurse into directories
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Find in the home directory
    #[arg(long = "home")]
    pub home: bool,

    /// Find on local volumes
    #[arg(long = "local")]
    pub local: bool,

    /// Find on network volumes
    #[arg(long = "network")]
    pub network: bool,

    /// Print shell completions and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Files and directories to operate on
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Parse command line arguments, exiting with a usage message on error
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list, exiting with a usage message on error
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Selector letter and tag argument of the requested operation
    fn selected(&self) -> Option<(char, &str)> {
        [
            ('s', self.set.as_deref()),
            ('a', self.add.as_deref()),
            ('r', self.remove.as_deref()),
            ('m', self.match_tags.as_deref()),
            ('f', self.find.as_deref()),
        ]
        .into_iter()
        .find_map(|(selector, tags)| tags.map(|t| (selector, t)))
        .or_else(|| self.list.then_some(('l', "")))
    }

    /// The requested operation; listing when none was given
    #[must_use]
    pub fn mode(&self) -> OperationMode {
        match self.selected() {
            Some((selector, _)) => OperationMode::from_selector(selector),
            None => OperationMode::List,
        }
    }

    #[must_use]
    pub fn scope(&self) -> SearchScope {
        if self.home {
            SearchScope::Home
        } else if self.local {
            SearchScope::Local
        } else if self.network {
            SearchScope::Network
        } else {
            SearchScope::None
        }
    }

    /// Output toggles: the mode's defaults with command line overrides
    #[must_use]
    pub fn output(&self, color_by_default: bool) -> OutputFlags {
        let mut flags = self.mode().default_output();
        if self.name || self.no_name {
            flags.name = self.name;
        }
        if self.tags || self.no_tags {
            flags.tags = self.tags;
        }
        if self.garrulous || self.no_garrulous {
            flags.garrulous = self.garrulous;
        }
        flags
            .with_color(self.color || color_by_default)
            .with_slash(self.slash)
            .with_nul_terminate(self.nul)
    }

    #[must_use]
    pub const fn traversal(&self) -> TraversalFlags {
        TraversalFlags {
            show_hidden: self.all,
            recursive: self.recursive,
            enter: self.enter,
        }
    }

    /// Tags given to the operation
    #[must_use]
    pub fn tag_set(&self) -> TagSet {
        self.selected()
            .map(|(_, tags)| TagSet::decode(tags))
            .unwrap_or_default()
    }

    /// Build the immutable invocation performed by the processor
    #[must_use]
    pub fn invocation(&self, color_by_default: bool) -> Invocation {
        Invocation::new(
            self.mode(),
            self.output(color_by_default),
            self.scope(),
            self.traversal(),
            self.tag_set(),
            self.paths.clone(),
        )
    }
}

/// Write the completion script for `shell`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
