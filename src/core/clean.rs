//! core/clean.rs
//!
//! Garbage removal for raw markup fragments.
//!
//! The building blocks are literal string edits:
//! - [`strip_all`] / [`strip_between`] remove text
//! - [`replace_all`] substitutes text
//! - [`unwrap_link_text`] turns `<a href="...">Text</a>` into `Text`
//!
//! [`CleanRules`] bundles an ordered list of those edits. The two rule sets
//! used by the pipeline live at the bottom of this file.

/// Remove every occurrence of `target`.
///
/// Re-scans until nothing is left, so "aabb" minus "ab" is "" (not "ab").
pub fn strip_all(text: &str, target: &str) -> String {
    replace_all(text, target, "")
}

/// Remove every `start ... end` span, both markers included.
///
/// Stops at the first `start` that has no `end` after it; the remaining text
/// is returned as-is.
pub fn strip_between(text: &str, start: &str, end: &str) -> String {
    let mut out = text.to_string();
    if start.is_empty() || end.is_empty() {
        return out;
    }

    while let Some(i) = out.find(start) {
        let Some(j) = out[i + start.len()..].find(end) else {
            break;
        };
        let stop = i + start.len() + j + end.len();
        out.replace_range(i..stop, "");
    }

    out
}

/// Replace every occurrence of `old` with `new`.
///
/// When `new` cannot reintroduce `old`, passes repeat until `old` is gone
/// entirely. When it can, a single left-to-right pass is made so the edit
/// always terminates.
pub fn replace_all(text: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    if new.contains(old) {
        return text.replace(old, new);
    }

    let mut out = text.replace(old, new);
    while out.contains(old) {
        out = out.replace(old, new);
    }
    out
}

const LINK_OPEN: &str = "<a href=\"";
const LINK_TEXT: &str = "\">";
const LINK_CLOSE: &str = "</a>";

/// Replace the FIRST `<a href="...">Text</a>` span with `Text`.
///
/// - 'pre<a href="u">Song</a>post' -> "preSongpost"
/// - No link (or a link that never closes) -> input unchanged
pub fn unwrap_link_text(text: &str) -> String {
    let Some(open) = text.find(LINK_OPEN) else {
        return text.to_string();
    };
    let Some(inner) = text[open..].find(LINK_TEXT).map(|i| open + i + LINK_TEXT.len()) else {
        return text.to_string();
    };
    let Some(close) = text[inner..].find(LINK_CLOSE).map(|i| inner + i) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..open]);
    out.push_str(&text[inner..close]);
    out.push_str(&text[close + LINK_CLOSE.len()..]);
    out
}

/// Apply [`unwrap_link_text`] until the text stops changing.
pub fn unwrap_all_links(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = unwrap_link_text(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// An ordered cleanup recipe.
///
/// Applied as: links -> strip -> strip_between -> replace.
/// Links go first: stripping `"` earlier would break `href="` detection.
#[derive(Debug, Clone, Copy)]
pub struct CleanRules {
    pub unwrap_links: bool,
    pub strip: &'static [&'static str],
    pub strip_between: &'static [(&'static str, &'static str)],
    pub replace: &'static [(&'static str, &'static str)],
}

impl CleanRules {
    pub fn apply(&self, text: &str) -> String {
        let mut out = if self.unwrap_links {
            unwrap_all_links(text)
        } else {
            text.to_string()
        };

        for target in self.strip {
            out = strip_all(&out, target);
        }
        for (start, end) in self.strip_between {
            out = strip_between(&out, start, end);
        }
        for (old, new) in self.replace {
            out = replace_all(&out, old, new);
        }

        out
    }
}

/// Cleanup for one track row (number cell + title cell).
pub const TRACK_ROW_RULES: CleanRules = CleanRules {
    unwrap_links: true,
    strip: &[
        "</td>",
        "<td style=\"vertical-align:top\">",
        "\"",
        "\n",
        "<span style=font-size:85%>",
        "</span>",
        "</span",
    ],
    strip_between: &[],
    replace: &[(" / ", " "), (" : ", " "), ("&amp;", "&")],
};

/// Cleanup for one infobox value (genre, label, ...).
pub const INFOBOX_RULES: CleanRules = CleanRules {
    unwrap_links: false,
    strip: &["\"", "\n"],
    strip_between: &[("<sup", "</sup>")],
    replace: &[("&amp;", "&")],
};

/// Clean one raw track fragment.
pub fn clean_fragment(fragment: &str) -> String {
    TRACK_ROW_RULES.apply(fragment)
}

/// Clean one raw infobox value. Footnote markers (`<sup>`) are dropped.
pub fn clean_infobox_value(value: &str) -> String {
    INFOBOX_RULES.apply(value)
}
