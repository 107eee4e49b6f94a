//! core/specific.rs
//!
//! Per-track ("specific") tags from cleaned track fragments.
//!
//! A cleaned fragment looks like:
//! - "3.Outcast"
//! - "3.Outcast (featuring Black Thought and Chuck D)"

use tracing::debug;

use super::clean::{replace_all, strip_all};
use super::error::{Result, TagError};
use super::landmarks::FEATURING;
use super::types::{GeneralTags, SpecificTags};

/// Build one record per fragment, keeping fragment order.
///
/// The first fragment that fails to parse aborts the whole batch.
pub fn generate_specific_tags(
    fragments: &[String],
    general: &GeneralTags,
) -> Result<Vec<SpecificTags>> {
    fragments
        .iter()
        .map(|fragment| specific_tags(fragment, &general.artist))
        .collect()
}

/// Split one cleaned fragment into title, track number and performers.
pub fn specific_tags(fragment: &str, album_artist: &str) -> Result<SpecificTags> {
    let (number, rest) = fragment
        .split_once('.')
        .ok_or_else(|| TagError::parse("track number", fragment))?;

    let track_number = number
        .trim()
        .parse::<u32>()
        .map_err(|_| TagError::parse("track number", number))?;

    let (title, artists) = match rest.find(FEATURING) {
        None => (rest, album_artist.to_string()),
        Some(i) => {
            let features = parse_features(&rest[i..]);
            (&rest[..i], format!("{album_artist};{features}"))
        }
    };

    debug!(track_number, title, %artists, "track");

    Ok(SpecificTags {
        title: title.to_string(),
        track_number,
        artists,
    })
}

/// " (featuring A, B and C)" -> "A;B;C"
///
/// Text without the featuring marker is returned unchanged.
pub fn parse_features(clause: &str) -> String {
    if !clause.contains(FEATURING) {
        return clause.to_string();
    }

    let names = strip_all(clause, FEATURING);
    let names = strip_all(&names, ")");
    let names = replace_all(&names, " and ", ";");
    replace_all(&names, ", ", ";")
}
