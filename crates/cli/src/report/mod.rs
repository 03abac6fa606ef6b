// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of search results.
//!
//! Text output is a comparison table followed by the highlighted and
//! replaced text; JSON output carries the same data plus the raw offsets.

mod json;
mod text;

use crate::compare::Comparison;

pub use json::render_json;
pub use text::render_text;

/// Everything produced by one search invocation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub pattern: String,
    pub comparison: Comparison,
    /// Text with matches marked, `None` when nothing matched.
    pub highlighted: Option<String>,
    /// Text after replacement, when a replacement was requested.
    pub replaced: Option<String>,
}

impl SearchReport {
    pub fn has_matches(&self) -> bool {
        !self.comparison.shift.matches.is_empty()
    }
}
