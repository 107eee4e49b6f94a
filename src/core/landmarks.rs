//! core/landmarks.rs
//!
//! Every literal marker the pipeline looks for in a Wikipedia album page.
//!
//! If Wikipedia changes its markup, this is the file to update: parsing code
//! only ever refers to these tables, never to raw markup strings.

/// Literal markers bounding one region of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    /// When set, the search for `start` begins at the first occurrence of
    /// this marker instead of at the top of the document.
    pub anchor: Option<&'static str>,
    pub start: &'static str,
    pub end: &'static str,
}

/// Album-level fields located by landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Artist,
    Album,
    Genre,
    Publisher,
    Year,
}

impl Field {
    #[cfg(test)]
    pub const ALL: [Field; 5] = [
        Field::Artist,
        Field::Album,
        Field::Genre,
        Field::Publisher,
        Field::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Genre => "genre",
            Field::Publisher => "publisher",
            Field::Year => "year",
        }
    }

    /// The landmark rule for this field.
    pub fn rule(self) -> ExtractionRule {
        match self {
            Field::Artist => ExtractionRule {
                anchor: None,
                start: "<div class=\"contributor\" style=\"display:inline\">",
                end: "</div>",
            },
            Field::Album => ExtractionRule {
                anchor: None,
                start: "<p><i><b>",
                end: "</b></i>",
            },
            Field::Genre => ExtractionRule {
                anchor: None,
                start: concat!(
                    "<th scope=\"row\"><a href=\"/wiki/Music_genre\" title=\"Music genre\">Genre</a></th>",
                    "<td class=\"category hlist\">"
                ),
                end: "</td>",
            },
            Field::Publisher => ExtractionRule {
                anchor: None,
                start: "title=\"Record label\">Label</a></th><td class=\"hlist\">",
                end: "</td>",
            },
            Field::Year => ExtractionRule {
                anchor: Some(
                    "<td style=\"width: 33%; text-align: center; vertical-align: top; padding: .2em .1em\">",
                ),
                start: "<br />(",
                end: ")",
            },
        }
    }
}

/// A multi-valued infobox cell renders one value per list item.
pub const LIST_ITEM: ExtractionRule = ExtractionRule {
    anchor: None,
    start: "<li>",
    end: "</li>",
};

/// Separator between a single value and trailing descriptive text.
pub const VALUE_SEPARATOR: &str = ", ";

/// Opening cell of a track-listing row, once per row background colour.
/// Rows alternate colours, so both have to be scanned.
pub const TRACK_ROW_STARTS: [&str; 2] = [
    concat!(
        "<tr style=\"background-color:#fff\">",
        "<td style=\"padding-right:10px;text-align:right;vertical-align:top\">"
    ),
    concat!(
        "<tr style=\"background-color:#f7f7f7\">",
        "<td style=\"padding-right:10px;text-align:right;vertical-align:top\">"
    ),
];

/// Closing marker of a track row's cells.
pub const TRACK_ROW_END: &str = "</td>";

/// Marks the start of a track's guest performer clause.
pub const FEATURING: &str = " (featuring ";
