//! core/overrides.rs
//!
//! User-supplied general tags, used instead of inference.
//!
//! The file is six plain lines, in this order:
//!
//! ```text
//! Common
//! Be
//! Hip-Hop
//! GOOD
//! 2005
//! True
//! ```
//!
//! The last line switches debug output on when it is exactly "True".
//! Artist, album and year must not be blank; genre and label may be.

use std::path::Path;

use tracing::info;

use super::error::{Result, TagError};
use super::types::GeneralTags;

pub const OVERRIDE_LINES: usize = 6;

/// Read and parse an override file.
pub fn load_override_file(path: &Path) -> Result<GeneralTags> {
    let content = std::fs::read_to_string(path)?;
    let tags = parse_override(&content)?;
    info!(path = %path.display(), "loaded general tags from override file");
    Ok(tags)
}

/// Split the content into exactly six lines, trailing whitespace removed.
pub fn parse_override_lines(content: &str) -> Result<Vec<String>> {
    let lines: Vec<String> = content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    if lines.len() != OVERRIDE_LINES {
        return Err(TagError::MalformedRules { lines: lines.len() });
    }
    Ok(lines)
}

/// Six override lines -> [`GeneralTags`].
pub fn parse_override(content: &str) -> Result<GeneralTags> {
    let mut lines = parse_override_lines(content)?.into_iter();
    let mut next = || lines.next().unwrap_or_default();

    let artist = next();
    let album = next();
    let genre = next();
    let publisher = next();
    let year_text = next();
    let debug = next() == "True";

    for (field, value) in [("artist", &artist), ("album", &album), ("year", &year_text)] {
        if value.trim().is_empty() {
            return Err(TagError::EmptyRule { field });
        }
    }

    let year = year_text
        .trim()
        .parse::<i32>()
        .map_err(|_| TagError::parse("year", &year_text))?;

    Ok(GeneralTags {
        artist,
        album,
        genre,
        publisher,
        year,
        debug,
    })
}
