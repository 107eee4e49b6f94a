//! core/scan.rs
//!
//! Bounded substring scanner.
//! Everything here is literal, case-sensitive `str::find` work. No regex, no DOM.
//!
//! All functions borrow from the input, so a scan never copies the document.

use super::error::{Result, TagError};

/// Text strictly between the first `start` and the first `end` after it.
///
/// - "pre[x]body[/x]post" with ("[x]", "[/x]") -> "body"
/// - Either marker missing -> `TagError::NotFound`
pub fn get_between<'a>(text: &'a str, start: &str, end: &str) -> Result<&'a str> {
    if start.is_empty() || end.is_empty() {
        return Err(TagError::not_found(start, end));
    }

    let begin = text
        .find(start)
        .map(|i| i + start.len())
        .ok_or_else(|| TagError::not_found(start, end))?;

    let len = text[begin..]
        .find(end)
        .ok_or_else(|| TagError::not_found(start, end))?;

    Ok(&text[begin..begin + len])
}

/// Every region opened by `start`, in document order.
///
/// Each region runs to the SECOND `end` after its `start`: the first `end`
/// is kept as interior content. Track rows close their number cell before
/// the title cell, so the title only ends at the second `</td>`:
///
/// ```text
/// <td ...>2.</td>
/// <td style="vertical-align:top">"Outcast"</td>
/// ```
///
/// Regions never overlap; scanning resumes after the closing `end`.
/// A `start` followed by fewer than two `end` markers is a `NotFound` error.
pub fn get_all_between<'a>(text: &'a str, start: &str, end: &str) -> Result<Vec<&'a str>> {
    Ok(find_all_between(text, start, end)?
        .into_iter()
        .map(|(_, fragment)| fragment)
        .collect())
}

/// Byte offset of `fragment` inside `text`.
///
/// `fragment` has to be a slice of `text`, as every fragment returned by
/// this module is. Lets callers merge several scans back into document order.
pub fn offset_of(text: &str, fragment: &str) -> usize {
    let offset = (fragment.as_ptr() as usize).wrapping_sub(text.as_ptr() as usize);
    debug_assert!(offset + fragment.len() <= text.len());
    offset
}

/// Same as [`get_all_between`], but each fragment comes with its byte offset
/// into `text`.
pub fn find_all_between<'a>(
    text: &'a str,
    start: &str,
    end: &str,
) -> Result<Vec<(usize, &'a str)>> {
    let mut out = Vec::new();
    if start.is_empty() || end.is_empty() {
        return Ok(out);
    }

    let mut pos = 0;
    while let Some(i) = text[pos..].find(start) {
        let begin = pos + i + start.len();
        let rest = &text[begin..];

        // skip the first end marker, stop at the second
        let first = rest
            .find(end)
            .ok_or_else(|| TagError::not_found(start, end))?;
        let after_first = first + end.len();
        let second = rest[after_first..]
            .find(end)
            .ok_or_else(|| TagError::not_found(start, end))?;

        let stop = begin + after_first + second;
        out.push((begin, &text[begin..stop]));
        pos = stop + end.len();
    }

    Ok(out)
}
