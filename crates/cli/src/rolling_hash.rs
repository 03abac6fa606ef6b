// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rabin-Karp scanner over a polynomial rolling hash.
//!
//! Hashes use base 256 and modulus 101 over Unicode scalar values. With a
//! modulus this small, equal hashes are frequent for unequal windows, so
//! every hash hit is confirmed character by character.

use crate::error::SearchError;
use crate::normalize::folded_chars;
use crate::scanner::{Algorithm, Scanner};

/// Alphabet base.
pub const BASE: i64 = 256;

/// Hash modulus.
pub const PRIME: i64 = 101;

#[inline]
fn code(c: char) -> i64 {
    i64::from(u32::from(c))
}

/// Horner's-rule hash of `chars`.
pub fn hash_chars(chars: &[char]) -> i64 {
    chars
        .iter()
        .fold(0, |hash, &c| (hash * BASE + code(c)) % PRIME)
}

/// `BASE^(len-1) mod PRIME`, the weight of a window's leading character.
fn leading_weight(len: usize) -> i64 {
    (1..len).fold(1, |acc, _| (acc * BASE) % PRIME)
}

/// Hash of a fixed-width window that slides one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    value: i64,
    multiplier: i64,
}

impl RollingHash {
    /// Hash the initial window.
    pub fn new(window: &[char]) -> Self {
        Self {
            value: hash_chars(window),
            multiplier: leading_weight(window.len()),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Drop `outgoing` from the front of the window and append `incoming`.
    pub fn roll(&mut self, outgoing: char, incoming: char) {
        let mut next = (BASE * (self.value - code(outgoing) * self.multiplier) + code(incoming)) % PRIME;
        if next < 0 {
            next += PRIME;
        }
        self.value = next;
    }
}

/// Matches plus the number of hash hits rejected on confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashScan {
    pub matches: Vec<usize>,
    pub spurious_hits: usize,
}

/// Rabin-Karp scanner with a precomputed pattern hash.
#[derive(Debug, Clone)]
pub struct HashScanner {
    pattern: Vec<char>,
    pattern_hash: i64,
}

impl HashScanner {
    pub fn new(pattern: &str) -> Result<Self, SearchError> {
        let pattern = folded_chars(pattern);
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let pattern_hash = hash_chars(&pattern);
        Ok(Self {
            pattern,
            pattern_hash,
        })
    }

    pub fn pattern_hash(&self) -> i64 {
        self.pattern_hash
    }

    /// Scan `text`, also counting windows whose hash matched but whose
    /// characters did not.
    pub fn scan(&self, text: &str) -> HashScan {
        let text = folded_chars(text);
        let n = text.len();
        let m = self.pattern.len();
        let mut result = HashScan::default();
        if n == 0 || m > n {
            return result;
        }

        let mut window = RollingHash::new(&text[..m]);
        for i in 0..=n - m {
            if window.value() == self.pattern_hash {
                if text[i..i + m] == self.pattern[..] {
                    result.matches.push(i);
                } else {
                    result.spurious_hits += 1;
                }
            }
            if i < n - m {
                window.roll(text[i], text[i + m]);
            }
        }
        result
    }
}

impl Scanner for HashScanner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        self.scan(text).matches
    }
}

/// Find every case-insensitive occurrence of `pattern` in `text`.
///
/// Empty text, empty pattern, or a pattern longer than the text yield no
/// matches.
pub fn hash_scan(text: &str, pattern: &str) -> Vec<usize> {
    HashScanner::new(pattern)
        .map(|scanner| scanner.find_all(text))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "rolling_hash_tests.rs"]
mod tests;
