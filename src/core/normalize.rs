//! core/normalize.rs
//!
//! Raw infobox value -> canonical tag value.
//! Unknown values pass through unchanged.

/// Known raw genre strings and the tag value they map to.
pub const GENRES: &[(&str, &str)] = &[
    ("Hip hop", "Hip-Hop"),
    ("Conscious hip hop", "Hip-Hop"),
    ("West Coast hip hop", "Hip-Hop"),
];

/// Known raw label strings and the tag value they map to.
pub const PUBLISHERS: &[(&str, &str)] = &[("Visionary Music Group", "Visionary")];

fn lookup<'a>(table: &[(&str, &'a str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}

pub fn normalized_genre(raw: &str) -> &str {
    lookup(GENRES, raw)
}

pub fn normalized_publisher(raw: &str) -> &str {
    lookup(PUBLISHERS, raw)
}
