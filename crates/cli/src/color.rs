// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` argument values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice from explicit flags. `no_color` wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

impl ColorMode {
    /// Color choice for stdout given the `--no-color` shorthand.
    pub fn choice(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Auto => resolve_color(false, no_color),
        }
    }
}

/// Color scheme for report output.
pub mod scheme {
    use super::*;

    /// Table headers and section titles.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Verdict naming the faster algorithm.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// "No matches" notice.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Scanner disagreement.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Tie between the scanners.
    pub fn info() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
