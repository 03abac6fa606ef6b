// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact, case-insensitive substring search with two independent scanners.
//!
//! - [`shift`]: Boyer-Moore with the bad-character rule only
//! - [`rolling_hash`]: Rabin-Karp over a base-256, mod-101 rolling hash
//!
//! Both report every occurrence, overlapping ones included, as character
//! offsets into the original text, so their results can be cross-checked.
//! [`transform`] turns a match list into highlighted or replaced text.

pub mod bad_char;
pub mod cli;
pub mod color;
pub mod compare;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod rolling_hash;
pub mod scanner;
pub mod shift;
pub mod transform;

#[cfg(test)]
pub mod test_utils;

pub use bad_char::{BadCharTable, build_bad_char_table};
pub use compare::{Comparison, RunMode, ScanRun};
pub use error::{ReplaceError, SearchError};
pub use normalize::normalize;
pub use rolling_hash::{HashScanner, hash_scan};
pub use scanner::{Algorithm, Scanner};
pub use shift::{ShiftScanner, shift_scan};
pub use transform::{
    Markers, ReplacePolicy, highlight, highlight_with, replace_all, replace_all_disjoint,
    replace_all_overlapping,
};
