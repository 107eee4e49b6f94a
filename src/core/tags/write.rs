//! Write album + track tags onto an MP3.

use std::path::Path;

use id3::{Tag, TagLike, Timestamp, Version};

use super::super::error::Result;
use super::super::types::{GeneralTags, SpecificTags};

/// Helper: set/remove a plain text frame (T***)
fn set_text_or_remove(tag: &mut Tag, id: &str, v: &str) {
    match v.trim() {
        "" => {
            let _ = tag.remove(id); // TagLike::remove returns Vec<Frame>; discard it
        }
        s => tag.set_text(id, s.to_string()),
    }
}

fn year_only(year: i32) -> Timestamp {
    Timestamp {
        year,
        month: None,
        day: None,
        hour: None,
        minute: None,
        second: None,
    }
}

/// Write the tags for one track file.
///
/// - Loads the existing tag if there is one, otherwise starts fresh
/// - Empty genre/publisher => the frame is removed
/// - Existing comments are cleared
/// - The year goes into release, original release and recording dates
pub fn write_track_tags(path: &Path, general: &GeneralTags, track: &SpecificTags) -> Result<()> {
    let mut tag = Tag::read_from_path(path).unwrap_or_else(|_| Tag::new());

    tag.set_title(track.title.as_str());
    tag.set_artist(track.artists.as_str());
    tag.set_album_artist(general.artist.as_str());
    tag.set_album(general.album.as_str());
    tag.set_track(track.track_number);

    set_text_or_remove(&mut tag, "TCON", &general.genre);
    set_text_or_remove(&mut tag, "TPUB", &general.publisher);

    let _ = tag.remove("COMM");

    tag.set_date_released(year_only(general.year));
    tag.set_original_date_released(year_only(general.year));
    tag.set_date_recorded(year_only(general.year));

    // choose v2.4 consistently
    tag.write_to_path(path, Version::Id3v24)?;

    Ok(())
}
