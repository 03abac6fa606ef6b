// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bad-character skip table for the shift scanner.
//!
//! For a pattern of length `L`, every character at index `0..L-1` maps to
//! `L-1-i`, with later occurrences overwriting earlier ones. The final
//! character is never stored: a window ending in a character with no entry
//! shifts by the full pattern length.

use std::collections::HashMap;

use crate::error::SearchError;
use crate::normalize::folded_chars;

/// Characters below this code point live in the fixed-size array.
const DIRECT_SLOTS: usize = 256;

/// Skip distances keyed by character.
///
/// Slot value 0 means "no entry"; stored skips are always at least 1.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    pattern_len: usize,
    direct: [usize; DIRECT_SLOTS],
    extended: HashMap<char, usize>,
}

/// Build the table for `pattern` after case folding.
pub fn build_bad_char_table(pattern: &str) -> Result<BadCharTable, SearchError> {
    BadCharTable::from_folded(&folded_chars(pattern))
}

impl BadCharTable {
    /// Build from an already folded pattern.
    pub(crate) fn from_folded(pattern: &[char]) -> Result<Self, SearchError> {
        let len = pattern.len();
        if len == 0 {
            return Err(SearchError::EmptyPattern);
        }

        let mut table = Self {
            pattern_len: len,
            direct: [0; DIRECT_SLOTS],
            extended: HashMap::new(),
        };
        for (i, &c) in pattern[..len - 1].iter().enumerate() {
            table.insert(c, len - 1 - i);
        }
        Ok(table)
    }

    fn insert(&mut self, c: char, skip: usize) {
        let code = c as usize;
        if code < DIRECT_SLOTS {
            self.direct[code] = skip;
        } else {
            self.extended.insert(c, skip);
        }
    }

    /// Stored skip for `c`, if any.
    pub fn get(&self, c: char) -> Option<usize> {
        let code = c as usize;
        if code < DIRECT_SLOTS {
            match self.direct[code] {
                0 => None,
                skip => Some(skip),
            }
        } else {
            self.extended.get(&c).copied()
        }
    }

    /// Shift distance for a window ending in `c`.
    #[inline]
    pub fn skip(&self, c: char) -> usize {
        self.get(c).unwrap_or(self.pattern_len)
    }

    /// Length of the pattern the table was built from.
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.direct.iter().filter(|&&skip| skip != 0).count() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored `(char, skip)` entries: direct slots in code order, then the rest.
    pub fn entries(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        let direct = self
            .direct
            .iter()
            .enumerate()
            .filter(|(_, skip)| **skip != 0)
            .filter_map(|(code, &skip)| char::from_u32(code as u32).map(|c| (c, skip)));
        direct.chain(self.extended.iter().map(|(&c, &skip)| (c, skip)))
    }
}

#[cfg(test)]
#[path = "bad_char_tests.rs"]
mod tests;
