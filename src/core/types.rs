//! Core data types shared between the pipeline stages and the front end.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No markup scanning code
//! - No filesystem code
//! - No tag writing code
//!
//! Every record is built once and never mutated afterwards.

use std::path::PathBuf;

/// Album-wide tags, shared by every track of the album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralTags {
    /// Album artist. Also the first entry of every track's performer list.
    pub artist: String,

    pub album: String,

    /// Canonical genre, or "" when the page has none.
    pub genre: String,

    /// Canonical label, or "" when the page has none.
    pub publisher: String,

    /// Release year.
    pub year: i32,

    /// Log every written record (sixth line of an override file == "True").
    pub debug: bool,
}

/// Per-track tags, one per track row found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificTags {
    pub title: String,

    pub track_number: u32,

    /// Semicolon-joined performer list.
    /// Always starts with the album artist; featured artists follow.
    pub artists: String,
}

/// Everything needed to tag one album.
#[derive(Debug, Clone)]
pub struct Album {
    pub general: GeneralTags,

    /// Tracks in document order.
    pub tracks: Vec<SpecificTags>,
}

/// Run-wide settings, threaded explicitly through the apply stage.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Folder holding the "<artist> - <title>.mp3" files.
    pub music_dir: PathBuf,

    /// Log every written record at info level.
    pub debug: bool,

    /// Build and log the records, but leave the files alone.
    pub dry_run: bool,
}

/// Outcome of the tag writing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Files that got new tags.
    pub written: usize,

    /// Tracks without a matching file on disk.
    pub missing: Vec<PathBuf>,
}

/// What an MP3's tag holds after writing, read back for debug output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub track_number: Option<u32>,
    pub genre: Option<String>,
    pub publisher: Option<String>,
    pub year: Option<i32>,
}
