// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs both scanners over the same input and times each one.
//!
//! The scanners share nothing, so parallel mode simply hands them to
//! `rayon::join`. No algorithm is preferred; the comparison only reports.

use std::time::{Duration, Instant};

use crate::rolling_hash::HashScanner;
use crate::scanner::{Algorithm, Scanner};
use crate::shift::ShiftScanner;

/// Whether the two scans run one after the other or concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Sequential,
    Parallel,
}

/// Outcome of one scanner over the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRun {
    pub algorithm: Algorithm,
    pub matches: Vec<usize>,
    pub elapsed: Duration,
    /// Hash hits rejected by confirmation (Rabin-Karp only).
    pub spurious_hits: Option<usize>,
}

impl ScanRun {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Side-by-side results for the same text and pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub shift: ScanRun,
    pub hash: ScanRun,
}

impl Comparison {
    /// Scan `text` for `pattern` with both algorithms.
    ///
    /// An empty pattern yields two empty runs.
    pub fn run(text: &str, pattern: &str, mode: RunMode) -> Self {
        let (shift, hash) = match mode {
            RunMode::Sequential => (run_shift(text, pattern), run_hash(text, pattern)),
            RunMode::Parallel => {
                rayon::join(|| run_shift(text, pattern), || run_hash(text, pattern))
            }
        };

        tracing::debug!(
            "{}: {} matches in {:?}; {}: {} matches in {:?}",
            shift.algorithm,
            shift.match_count(),
            shift.elapsed,
            hash.algorithm,
            hash.match_count(),
            hash.elapsed
        );
        if let Some(spurious) = hash.spurious_hits {
            tracing::debug!("rabin-karp rejected {} spurious hash hits", spurious);
        }

        let comparison = Self { shift, hash };
        if !comparison.agrees() {
            tracing::warn!(
                "scanners disagree: boyer-moore {:?}, rabin-karp {:?}",
                comparison.shift.matches,
                comparison.hash.matches
            );
        }
        comparison
    }

    /// True when both scanners reported the same offsets in the same order.
    pub fn agrees(&self) -> bool {
        self.shift.matches == self.hash.matches
    }

    /// The strictly faster algorithm, or `None` on a tie.
    pub fn faster(&self) -> Option<Algorithm> {
        match self.shift.elapsed.cmp(&self.hash.elapsed) {
            std::cmp::Ordering::Less => Some(self.shift.algorithm),
            std::cmp::Ordering::Greater => Some(self.hash.algorithm),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Runs in display order.
    pub fn runs(&self) -> [&ScanRun; 2] {
        [&self.shift, &self.hash]
    }
}

fn run_shift(text: &str, pattern: &str) -> ScanRun {
    let start = Instant::now();
    let matches = ShiftScanner::new(pattern)
        .map(|scanner| scanner.find_all(text))
        .unwrap_or_default();
    ScanRun {
        algorithm: Algorithm::BoyerMoore,
        matches,
        elapsed: start.elapsed(),
        spurious_hits: None,
    }
}

fn run_hash(text: &str, pattern: &str) -> ScanRun {
    let start = Instant::now();
    let scan = HashScanner::new(pattern)
        .map(|scanner| scanner.scan(text))
        .unwrap_or_default();
    ScanRun {
        algorithm: Algorithm::RabinKarp,
        matches: scan.matches,
        elapsed: start.elapsed(),
        spurious_hits: Some(scan.spurious_hits),
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
