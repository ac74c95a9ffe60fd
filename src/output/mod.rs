//! Output formatting for CLI display
//!
//! One record is printed per listed, matched or found file. Its shape depends
//! only on the [`OutputFlags`]:
//!
//! ```text
//! name + tags     notes.txt<TAB>draft,work
//! name only       notes.txt
//! tags only       draft,work
//! garrulous       notes.txt
//!                     draft
//!                     work
//! ```
//!
//! Each record ends with a newline, or a NUL byte with `--nul`.

use crate::options::OutputFlags;
use crate::store::TagSet;
use colored::{Color, Colorize};
use std::io::{self, Write};
use std::path::Path;

const GARRULOUS_INDENT: &str = "    ";

const TAG_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

/// Color assigned to a tag name, stable across runs
#[must_use]
pub fn tag_color(tag: &str) -> Color {
    let hash = tag
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    TAG_PALETTE[hash as usize % TAG_PALETTE.len()]
}

fn format_tag(tag: &str, color: bool) -> String {
    if color {
        tag.color(tag_color(tag)).to_string()
    } else {
        tag.to_string()
    }
}

/// Path bytes as stored by the filesystem, marking directories when requested
///
/// Names are never re-encoded, so non-UTF-8 paths survive `--nul` output.
#[must_use]
pub fn format_name(path: &Path, is_dir: bool, flags: OutputFlags) -> Vec<u8> {
    let mut name = path.as_os_str().as_encoded_bytes().to_vec();
    if flags.slash && is_dir && !name.ends_with(b"/") {
        name.push(b'/');
    }
    name
}

/// Format one complete record, terminator included
#[must_use]
pub fn format_record(path: &Path, is_dir: bool, tags: &TagSet, flags: OutputFlags) -> Vec<u8> {
    let tags: Vec<String> = if flags.tags {
        tags.iter().map(|t| format_tag(t, flags.color)).collect()
    } else {
        Vec::new()
    };

    let mut record = if flags.name {
        format_name(path, is_dir, flags)
    } else {
        Vec::new()
    };

    if flags.garrulous {
        let indent = if flags.name { GARRULOUS_INDENT } else { "" };
        for (i, tag) in tags.iter().enumerate() {
            if flags.name || i > 0 {
                record.push(b'\n');
            }
            record.extend_from_slice(indent.as_bytes());
            record.extend_from_slice(tag.as_bytes());
        }
    } else if !tags.is_empty() {
        if flags.name {
            record.push(b'\t');
        }
        record.extend_from_slice(tags.join(",").as_bytes());
    }
    record.push(flags.terminator());
    record
}

/// Write one record to `out`
///
/// # Errors
/// Returns an `io::Error` if writing fails.
pub fn write_record<W: Write + ?Sized>(
    out: &mut W,
    path: &Path,
    is_dir: bool,
    tags: &TagSet,
    flags: OutputFlags,
) -> io::Result<()> {
    out.write_all(&format_record(path, is_dir, tags, flags))
}
