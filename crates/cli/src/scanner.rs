// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Common interface for the two scanners.

use std::fmt;

use serde::Serialize;

/// The search algorithms compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "Boyer-Moore")]
    BoyerMoore,
    #[serde(rename = "Rabin-Karp")]
    RabinKarp,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled single-pattern scanner.
///
/// Implementations fold case on their own copy of the text and report every
/// occurrence, overlapping ones included, as strictly increasing character
/// offsets into the original text.
pub trait Scanner: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn find_all(&self, text: &str) -> Vec<usize>;
}
