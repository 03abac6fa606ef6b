// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case folding applied before every comparison.
//!
//! Folding is one character in, one character out. Characters whose
//! lowercase form expands to several characters (`İ` → `i̇`) are kept as-is,
//! so offsets computed on folded text index the original text directly.

/// Fold a single character to lowercase without changing the character count.
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Lowercase a string, preserving its character count.
pub fn normalize(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Folded characters of `s`, indexed by character offset.
pub(crate) fn folded_chars(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
