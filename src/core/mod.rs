//! core/mod.rs
//!
//! The brain of the app:
//! - Scan a Wikipedia album page for landmark markup
//! - Clean the raw fragments and turn them into tag records
//! - Write the records onto the album's MP3 files
//!
//! The pipeline is explicit and modular:
//!   (A) document -> track fragments (scan + clean)
//!   (B) document / override file -> GeneralTags
//!   (C) fragments + GeneralTags -> Vec<SpecificTags>
//!   (D) records -> ID3 frames on disk
//!
//! (A)-(C) are pure text work and never touch the filesystem, except for
//! reading an override file. main.rs only wires the stages together.

pub mod clean;
pub mod error;
pub mod fetch;
pub mod general;
pub mod landmarks;
pub mod library;
pub mod normalize;
pub mod overrides;
pub mod scan;
pub mod specific;
pub mod tags;
pub mod types;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use error::Result;
use landmarks::{TRACK_ROW_END, TRACK_ROW_STARTS};
use types::{Album, ApplyReport, RunConfig};

/// Cleaned track fragments, in document order.
///
/// Rows alternate background colours, so each colour is scanned separately
/// and the results are merged back by position.
pub fn extract_track_fragments(document: &str) -> Result<Vec<String>> {
    let mut rows = Vec::new();
    for start in TRACK_ROW_STARTS {
        rows.extend(scan::get_all_between(document, start, TRACK_ROW_END)?);
    }
    rows.sort_by_key(|raw| scan::offset_of(document, raw));

    Ok(rows.into_iter().map(clean::clean_fragment).collect())
}

/// Build the full set of records for one album page.
///
/// - `override_path` given: general tags come from that file
/// - otherwise: general tags are inferred from the page
pub fn build_album(document: &str, override_path: Option<&Path>) -> Result<Album> {
    let general = match override_path {
        Some(path) => overrides::load_override_file(path)?,
        None => general::infer_general_tags(document)?,
    };

    let fragments = extract_track_fragments(document)?;
    let tracks = specific::generate_specific_tags(&fragments, &general)?;

    info!(
        artist = %general.artist,
        album = %general.album,
        tracks = tracks.len(),
        "album metadata ready"
    );

    Ok(Album { general, tracks })
}

/// Write every track's tags onto "<dir>/<artist> - <title>.mp3".
///
/// - Tracks without a file are skipped and reported, not an error
/// - MP3s in the folder that match no track are logged
/// - `dry_run` logs what would be written and leaves files untouched
pub fn apply_album(album: &Album, config: &RunConfig) -> Result<ApplyReport> {
    let general = &album.general;
    let verbose = config.debug || general.debug;
    let mut report = ApplyReport::default();
    let mut matched = HashSet::new();

    if !config.music_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", config.music_dir.display()),
        )
        .into());
    }

    for track in &album.tracks {
        let path = library::track_file(&config.music_dir, &general.artist, &track.title);
        if !path.is_file() {
            warn!(path = %path.display(), "no file for track {}", track.track_number);
            report.missing.push(path);
            continue;
        }

        if config.dry_run {
            info!(path = %path.display(), ?track, "dry run, not writing");
            matched.insert(path);
            continue;
        }

        tags::write_track_tags(&path, general, track)?;
        report.written += 1;

        if verbose {
            let written = tags::read_written_tags(&path)?;
            info!(path = %path.display(), ?written, "tagged");
        } else {
            debug!(path = %path.display(), "tagged");
        }
        matched.insert(path);
    }

    for path in library::scan_mp3s(&config.music_dir)? {
        if !matched.contains(&path) {
            warn!(path = %path.display(), "mp3 matches no track on the page");
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TagError;
    use crate::core::types::{GeneralTags, SpecificTags};

    const PAGE: &str = include_str!("../../tests/fixtures/album.html");

    fn track(title: &str, track_number: u32, artists: &str) -> SpecificTags {
        SpecificTags {
            title: title.to_string(),
            track_number,
            artists: artists.to_string(),
        }
    }

    #[test]
    fn fragments_come_out_clean_and_in_document_order() {
        let fragments = extract_track_fragments(PAGE).unwrap();
        assert_eq!(
            fragments,
            vec![
                "1.Be (Intro)",
                "2.The Corner (featuring The Last Poets)",
                "3.Go! (featuring Kanye West and John Mayer)",
                "4.Real People",
                "5.Testify",
            ]
        );
    }

    #[test]
    fn album_page_end_to_end() {
        let album = build_album(PAGE, None).unwrap();

        assert_eq!(
            album.general,
            GeneralTags {
                artist: "Common".to_string(),
                album: "Be".to_string(),
                genre: "Hip-Hop".to_string(),
                publisher: "GOOD".to_string(),
                year: 2005,
                debug: false,
            }
        );
        assert_eq!(
            album.tracks,
            vec![
                track("Be (Intro)", 1, "Common"),
                track("The Corner", 2, "Common;The Last Poets"),
                track("Go!", 3, "Common;Kanye West;John Mayer"),
                track("Real People", 4, "Common"),
                track("Testify", 5, "Common"),
            ]
        );
    }

    #[test]
    fn override_file_replaces_inference() {
        let dir = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules.txt");
        std::fs::write(&rules, "Common Sense\nBe\nRap\nGeffen\n2004\nTrue\n").unwrap();

        let album = build_album(PAGE, Some(&rules)).unwrap();
        assert_eq!(album.general.artist, "Common Sense");
        assert!(album.general.debug);
        assert_eq!(album.tracks[1].artists, "Common Sense;The Last Poets");
    }

    #[test]
    fn page_without_artist_fails() {
        let page = PAGE.replace("class=\"contributor\"", "class=\"someone\"");
        assert!(build_album(&page, None).is_err());
    }

    #[test]
    fn apply_writes_present_files_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        for title in ["Be (Intro)", "Go!"] {
            std::fs::write(dir.path().join(format!("Common - {title}.mp3")), [0u8; 16]).unwrap();
        }
        std::fs::write(dir.path().join("Stray - Song.mp3"), [0u8; 16]).unwrap();

        let album = build_album(PAGE, None).unwrap();
        let config = RunConfig {
            music_dir: dir.path().to_path_buf(),
            debug: true,
            dry_run: false,
        };
        let report = apply_album(&album, &config).unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(report.missing.len(), 3);
        assert!(report.missing.contains(&dir.path().join("Common - Testify.mp3")));

        let go = tags::read_written_tags(&dir.path().join("Common - Go!.mp3")).unwrap();
        assert_eq!(go.track_number, Some(3));
        assert_eq!(go.artist.as_deref(), Some("Common;Kanye West;John Mayer"));
    }

    #[test]
    fn missing_music_dir_fails_before_any_track() {
        let dir = tempfile::tempdir().unwrap();
        let album = build_album(PAGE, None).unwrap();
        let config = RunConfig {
            music_dir: dir.path().join("not-there"),
            debug: false,
            dry_run: false,
        };

        let err = apply_album(&album, &config).unwrap_err();
        match err {
            TagError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an IO error, got {other:?}"),
        }
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Common - Testify.mp3");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let album = build_album(PAGE, None).unwrap();
        let config = RunConfig {
            music_dir: dir.path().to_path_buf(),
            debug: false,
            dry_run: true,
        };
        let report = apply_album(&album, &config).unwrap();

        assert_eq!(report.written, 0);
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 16]);
    }
}
