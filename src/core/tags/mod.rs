//! core/tags/mod.rs
//!
//! ID3 tag write/read-back utilities.
//! Public API:
//! - [`write_track_tags`] writes one album's general tags plus one track's specific tags.
//! - [`read_written_tags`] reads the result back for debug output.

mod read;
mod write;

pub use read::read_written_tags;
pub use write::write_track_tags;
