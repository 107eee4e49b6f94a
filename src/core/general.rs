//! core/general.rs
//!
//! Album-level ("general") tag inference from a Wikipedia album page.
//!
//! - artist, album, year: their landmarks must exist, otherwise the run fails
//! - genre, publisher: best-effort, an empty string when nothing is found
//!
//! Infobox cells come in two layouts, so genre/publisher try an ordered list
//! of [`CellStrategy`] functions and keep the first one that succeeds.

use tracing::debug;

use super::clean::{clean_infobox_value, strip_all, unwrap_all_links, unwrap_link_text};
use super::error::{Result, TagError};
use super::landmarks::{ExtractionRule, Field, LIST_ITEM, VALUE_SEPARATOR};
use super::normalize::{normalized_genre, normalized_publisher};
use super::scan::get_between;
use super::types::GeneralTags;

/// Turns the raw contents of an infobox cell into one value.
pub type CellStrategy = fn(&str) -> Result<String>;

/// Tried in order; the first success wins.
pub const CELL_STRATEGIES: &[CellStrategy] = &[first_list_item, leading_value];

/// Infer the general tags from the page markup.
///
/// `debug` is always false here; only an override file can switch it on.
pub fn infer_general_tags(document: &str) -> Result<GeneralTags> {
    let artist = infer_artist(document)?;
    let album = infer_album(document)?;
    let genre = infer_cell(document, Field::Genre, normalized_genre);
    let publisher = infer_cell(document, Field::Publisher, normalized_publisher);
    let year = infer_year(document)?;

    debug!(%artist, %album, %genre, %publisher, year, "inferred general tags");

    Ok(GeneralTags {
        artist,
        album,
        genre,
        publisher,
        year,
        debug: false,
    })
}

/// Raw region for a landmark rule, honouring its anchor.
pub fn region<'a>(document: &'a str, rule: ExtractionRule) -> Result<&'a str> {
    let haystack = match rule.anchor {
        Some(anchor) => {
            let at = document
                .find(anchor)
                .ok_or_else(|| TagError::not_found(anchor, rule.start))?;
            &document[at..]
        }
        None => document,
    };
    get_between(haystack, rule.start, rule.end)
}

fn infer_artist(document: &str) -> Result<String> {
    let raw = region(document, Field::Artist.rule())?;
    Ok(clean_infobox_value(&unwrap_all_links(raw)))
}

fn infer_album(document: &str) -> Result<String> {
    let raw = region(document, Field::Album.rule())?;
    Ok(clean_infobox_value(raw))
}

/// "(2013)" after the chronology anchor. Stray "(" from nested parentheses is dropped.
fn infer_year(document: &str) -> Result<i32> {
    let raw = region(document, Field::Year.rule())?;
    let year = strip_all(raw, "(");
    year.trim()
        .parse::<i32>()
        .map_err(|_| TagError::parse("year", &year))
}

/// Best-effort cell value: cleaned and normalized, or "" when missing.
fn infer_cell(document: &str, field: Field, normalize: fn(&str) -> &str) -> String {
    let cell = match region(document, field.rule()) {
        Ok(cell) => cell,
        Err(e) => {
            debug!(field = field.name(), "no infobox cell: {e}");
            return String::new();
        }
    };

    let Some(raw) = first_success(cell, CELL_STRATEGIES) else {
        debug!(field = field.name(), "no strategy matched the cell");
        return String::new();
    };

    normalize(&clean_infobox_value(&raw)).to_string()
}

/// Run strategies in order, returning the first `Ok`.
pub fn first_success(cell: &str, strategies: &[CellStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(cell).ok())
}

/// `<ul><li>Value</li><li>...</li></ul>` -> "Value"
pub fn first_list_item(cell: &str) -> Result<String> {
    let item = get_between(cell, LIST_ITEM.start, LIST_ITEM.end)?;
    Ok(unwrap_link_text(item))
}

/// `<a ...>Value</a>, extra text` -> "Value"
pub fn leading_value(cell: &str) -> Result<String> {
    let text = unwrap_link_text(cell);
    Ok(leading_segment(&text).to_string())
}

/// Everything before the first ", " that follows the first character.
fn leading_segment(text: &str) -> &str {
    let Some(first) = text.chars().next() else {
        return text;
    };
    let skip = first.len_utf8();
    match text[skip..].find(VALUE_SEPARATOR) {
        Some(i) => &text[..skip + i],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENRE_ROW: &str = "<th scope=\"row\"><a href=\"/wiki/Music_genre\" title=\"Music genre\">Genre</a></th><td class=\"category hlist\">";
    const LABEL_ROW: &str = "<th scope=\"row\"><a href=\"/wiki/Record_label\" title=\"Record label\">Label</a></th><td class=\"hlist\">";
    const YEAR_CELL: &str = "<td style=\"width: 33%; text-align: center; vertical-align: top; padding: .2em .1em\">";

    fn page(genre_cell: &str, label_cell: &str) -> String {
        format!(
            "<div class=\"contributor\" style=\"display:inline\"><a href=\"/wiki/Common_(rapper)\" title=\"Common (rapper)\">Common</a></div>\
             {GENRE_ROW}{genre_cell}</td>\
             {LABEL_ROW}{label_cell}</td>\
             <p><i><b>Be</b></i> is the sixth studio album</p>\
             <br />(1999)\
             {YEAR_CELL}<a href=\"/wiki/Be_(album)\" title=\"Be\"><i>Be</i></a><br />(2005)</td>"
        )
    }

    #[test]
    fn infers_all_fields() {
        let html = page(
            "<div class=\"hlist\"><ul><li><a href=\"/wiki/Hip_hop\" title=\"Hip hop\">Hip hop</a></li><li>Soul</li></ul></div>",
            "<a href=\"/wiki/GOOD_Music\" title=\"GOOD Music\">GOOD</a>, <a href=\"/wiki/Geffen\" title=\"Geffen\">Geffen</a>",
        );
        let tags = infer_general_tags(&html).unwrap();
        assert_eq!(
            tags,
            GeneralTags {
                artist: "Common".to_string(),
                album: "Be".to_string(),
                genre: "Hip-Hop".to_string(),
                publisher: "GOOD".to_string(),
                year: 2005,
                debug: false,
            }
        );
    }

    #[test]
    fn single_value_cell_without_separator_is_kept_whole() {
        let html = page("Jazz rap<sup class=\"reference\">[1]</sup>", "Visionary Music Group");
        let tags = infer_general_tags(&html).unwrap();
        assert_eq!(tags.genre, "Jazz rap");
        assert_eq!(tags.publisher, "Visionary");
    }

    #[test]
    fn missing_optional_cells_degrade_to_empty() {
        let html = page("", "").replace(GENRE_ROW, "").replace(LABEL_ROW, "");
        let tags = infer_general_tags(&html).unwrap();
        assert_eq!(tags.genre, "");
        assert_eq!(tags.publisher, "");
    }

    #[test]
    fn missing_artist_is_fatal() {
        let html = page("Soul", "Geffen").replace("contributor", "someone");
        assert!(matches!(
            infer_general_tags(&html),
            Err(TagError::NotFound { .. })
        ));
    }

    #[test]
    fn year_uses_anchor_not_first_parenthesis() {
        let html = page("Soul", "Geffen");
        assert_eq!(infer_year(&html).unwrap(), 2005);
    }

    #[test]
    fn nested_parenthesis_in_year_is_stripped() {
        let html = page("Soul", "Geffen").replace("<br />(2005)", "<br />((2005)");
        assert_eq!(infer_year(&html).unwrap(), 2005);
    }

    #[test]
    fn non_numeric_year_is_a_parse_error() {
        let html = page("Soul", "Geffen").replace("(2005)", "(TBA)");
        assert!(matches!(
            infer_general_tags(&html),
            Err(TagError::Parse { field: "year", .. })
        ));
    }

    #[test]
    fn strategies_fall_through_in_order() {
        assert!(first_list_item("no list here").is_err());
        assert_eq!(
            first_success("Pop, Rock", CELL_STRATEGIES),
            Some("Pop".to_string())
        );
        assert_eq!(
            first_success("<li>Funk</li>, Soul", CELL_STRATEGIES),
            Some("Funk".to_string())
        );
        assert_eq!(first_success("anything", &[first_list_item]), None);
    }

    #[test]
    fn leading_segment_handles_edge_cases() {
        assert_eq!(leading_segment(""), "");
        assert_eq!(leading_segment("Solo"), "Solo");
        assert_eq!(leading_segment("A, B, C"), "A");
    }
}
