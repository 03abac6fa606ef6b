// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boyer-Moore style scanner using only the bad-character rule.
//!
//! After a full match the window advances by one position, so overlapping
//! occurrences are reported. After a mismatch the skip is looked up for the
//! window's last text character, not the mismatching one.

use crate::bad_char::BadCharTable;
use crate::error::SearchError;
use crate::normalize::folded_chars;
use crate::scanner::{Algorithm, Scanner};

/// Shift scanner with a prebuilt bad-character table.
#[derive(Debug, Clone)]
pub struct ShiftScanner {
    pattern: Vec<char>,
    table: BadCharTable,
}

impl ShiftScanner {
    pub fn new(pattern: &str) -> Result<Self, SearchError> {
        let pattern = folded_chars(pattern);
        let table = BadCharTable::from_folded(&pattern)?;
        Ok(Self { pattern, table })
    }

    pub fn table(&self) -> &BadCharTable {
        &self.table
    }
}

impl Scanner for ShiftScanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BoyerMoore
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        scan_folded(&folded_chars(text), &self.pattern, &self.table)
    }
}

/// Find every case-insensitive occurrence of `pattern` in `text`.
///
/// Empty text, empty pattern, or a pattern longer than the text yield no
/// matches.
pub fn shift_scan(text: &str, pattern: &str) -> Vec<usize> {
    ShiftScanner::new(pattern)
        .map(|scanner| scanner.find_all(text))
        .unwrap_or_default()
}

fn scan_folded(text: &[char], pattern: &[char], table: &BadCharTable) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut matches = Vec::new();
    if m == 0 || n == 0 || m > n {
        return matches;
    }

    let mut shift = 0;
    while shift <= n - m {
        let window = &text[shift..shift + m];
        let matched = window.iter().rev().zip(pattern.iter().rev()).all(|(t, p)| t == p);

        if matched {
            matches.push(shift);
            shift += 1;
        } else {
            shift += table.skip(window[m - 1]);
        }
    }
    matches
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
