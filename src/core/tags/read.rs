//! Read back what [`super::write_track_tags`] wrote.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};

use super::super::error::Result;
use super::super::types::WrittenTags;

/// Summarise the tag of one MP3.
pub fn read_written_tags(path: &Path) -> Result<WrittenTags> {
    let tag = Tag::read_from_path(path)?;

    Ok(WrittenTags {
        title: tag.title().map(str::to_owned),
        artist: tag.artist().map(str::to_owned),
        album_artist: tag.album_artist().map(str::to_owned),
        album: tag.album().map(str::to_owned),
        track_number: tag.track(),
        // raw TCON text; the crate helper would decode "(17)"-style ids
        genre: text_frame(&tag, "TCON"),
        publisher: text_frame(&tag, "TPUB"),
        year: tag.date_released().map(|ts| ts.year),
    })
}

/// Get a best-effort string value from a frame id.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}
