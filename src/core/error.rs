//! core/error.rs
//!
//! One error enum for the whole pipeline.

use thiserror::Error;

/// Result alias used by every core module.
pub type Result<T> = std::result::Result<T, TagError>;

#[derive(Debug, Error)]
pub enum TagError {
    /// A delimiter pair (or landmark) is missing from the markup.
    #[error("could not find text between {start:?} and {end:?}")]
    NotFound { start: String, end: String },

    /// Override file must hold exactly six lines.
    #[error("override file must have exactly 6 lines, found {lines}")]
    MalformedRules { lines: usize },

    /// Override file line that may not be blank (artist, album, year).
    #[error("override file has an empty {field} line")]
    EmptyRule { field: &'static str },

    /// A field that has to be an integer (track number, year) is not one.
    #[error("{field} is not an integer: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document retrieval failed (status or transport).
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("ID3 error: {0}")]
    Id3(#[from] id3::Error),
}

impl TagError {
    pub(crate) fn not_found(start: &str, end: &str) -> Self {
        TagError::NotFound {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn parse(field: &'static str, value: &str) -> Self {
        TagError::Parse {
            field,
            value: value.to_string(),
        }
    }
}
