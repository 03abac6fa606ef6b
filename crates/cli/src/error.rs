// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

/// Errors raised when building a scanner.
///
/// The scan functions themselves are total: empty inputs and patterns longer
/// than the text yield no matches rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// Errors raised by strict replacement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("match at offset {offset} runs past the end of the text ({text_len} characters)")]
    OutOfBounds { offset: usize, text_len: usize },

    #[error("match at offset {offset} overlaps the previous match ending at {previous_end}")]
    Overlapping { offset: usize, previous_end: usize },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Search completed and both scanners agreed.
    Success = 0,
    /// The scanners reported different offsets.
    Disagreement = 1,
    /// Bad arguments, config, or input.
    UsageError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
