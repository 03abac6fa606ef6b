// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlighting and replacement driven by a match-offset list.
//!
//! Offsets are character offsets into the original text, as produced by the
//! scanners. The span length is the pattern's character count; a
//! case-insensitive match may occupy a different number of bytes than the
//! pattern itself.

use serde::Deserialize;

use crate::error::ReplaceError;

/// Emphasis markers placed around each highlighted match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Markers {
    #[serde(default = "Markers::default_marker")]
    pub open: String,
    #[serde(default = "Markers::default_marker")]
    pub close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: Self::default_marker(),
            close: Self::default_marker(),
        }
    }
}

impl Markers {
    pub(crate) fn default_marker() -> String {
        "**".to_string()
    }
}

/// How replacement treats overlapping matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReplacePolicy {
    /// Keep the earliest of any overlapping matches, drop the rest.
    #[default]
    Disjoint,
    /// Refuse overlapping or out-of-range matches.
    Strict,
}

/// Byte offset of every character boundary in `text`, including the end.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Wrap each match in `**` markers.
pub fn highlight(text: &str, pattern: &str, matches: &[usize]) -> String {
    highlight_with(text, pattern, matches, &Markers::default())
}

/// Wrap each match in the given markers.
///
/// Matches are walked in order. Text between the cursor and the next match
/// is copied once; when a match starts before the cursor (it overlaps the
/// previous one) nothing is copied before it, and the marked span is emitted
/// in full.
pub fn highlight_with(text: &str, pattern: &str, matches: &[usize], markers: &Markers) -> String {
    let pattern_len = pattern.chars().count();
    if matches.is_empty() || pattern_len == 0 {
        return text.to_string();
    }

    let bounds = char_boundaries(text);
    let char_len = bounds.len() - 1;
    let byte_at = |offset: usize| bounds[offset.min(char_len)];

    let mut out = String::with_capacity(
        text.len() + matches.len() * (markers.open.len() + markers.close.len()),
    );
    let mut cursor = 0;
    for &offset in matches {
        if offset > cursor {
            out.push_str(&text[byte_at(cursor)..byte_at(offset)]);
        }
        let end = offset.saturating_add(pattern_len);
        out.push_str(&markers.open);
        out.push_str(&text[byte_at(offset)..byte_at(end)]);
        out.push_str(&markers.close);
        cursor = cursor.max(end);
    }
    out.push_str(&text[byte_at(cursor)..]);
    out
}

/// Replace matches under the given policy.
pub fn replace_all(
    text: &str,
    pattern: &str,
    replacement: &str,
    matches: &[usize],
    policy: ReplacePolicy,
) -> Result<String, ReplaceError> {
    match policy {
        ReplacePolicy::Strict => replace_all_overlapping(text, pattern, replacement, matches),
        ReplacePolicy::Disjoint => Ok(replace_all_disjoint(text, pattern, replacement, matches)),
    }
}

/// Replace matches that must already be disjoint and in increasing order.
///
/// Fails on the first match that starts before the previous one ends or runs
/// past the end of the text.
pub fn replace_all_overlapping(
    text: &str,
    pattern: &str,
    replacement: &str,
    matches: &[usize],
) -> Result<String, ReplaceError> {
    let pattern_len = pattern.chars().count();
    if pattern_len == 0 {
        return Err(ReplaceError::EmptyPattern);
    }

    let bounds = char_boundaries(text);
    let text_len = bounds.len() - 1;
    let mut previous_end = 0;
    for (i, &offset) in matches.iter().enumerate() {
        if offset > text_len || text_len - offset < pattern_len {
            return Err(ReplaceError::OutOfBounds { offset, text_len });
        }
        if i > 0 && offset < previous_end {
            return Err(ReplaceError::Overlapping {
                offset,
                previous_end,
            });
        }
        previous_end = offset + pattern_len;
    }

    Ok(substitute(text, &bounds, pattern_len, replacement, matches))
}

/// Replace matches after greedily dropping any that overlap an earlier one.
///
/// Out-of-range offsets are dropped as well. An empty pattern leaves the
/// text unchanged.
pub fn replace_all_disjoint(
    text: &str,
    pattern: &str,
    replacement: &str,
    matches: &[usize],
) -> String {
    let pattern_len = pattern.chars().count();
    if pattern_len == 0 {
        return text.to_string();
    }

    let bounds = char_boundaries(text);
    let text_len = bounds.len() - 1;
    let mut next_free = 0;
    let mut kept = Vec::with_capacity(matches.len());
    for &offset in matches {
        if offset < next_free || offset > text_len || text_len - offset < pattern_len {
            continue;
        }
        kept.push(offset);
        next_free = offset + pattern_len;
    }

    substitute(text, &bounds, pattern_len, replacement, &kept)
}

/// Splice `replacement` over each span, shifting later positions by the
/// accumulated length change. Spans must be disjoint, increasing, and in
/// bounds.
fn substitute(
    text: &str,
    bounds: &[usize],
    pattern_len: usize,
    replacement: &str,
    matches: &[usize],
) -> String {
    let mut out = text.to_string();
    let mut delta: isize = 0;
    for &offset in matches {
        let start = bounds[offset];
        let end = bounds[offset + pattern_len];
        let adjusted_start = start.saturating_add_signed(delta);
        let adjusted_end = end.saturating_add_signed(delta);
        out.replace_range(adjusted_start..adjusted_end, replacement);
        delta += replacement.len() as isize - (end - start) as isize;
    }
    out
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
