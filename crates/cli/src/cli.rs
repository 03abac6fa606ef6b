// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::color::ColorMode;
use crate::config::Config;
use crate::compare::RunMode;
use crate::transform::ReplacePolicy;

/// Case-insensitive substring search with Boyer-Moore and Rabin-Karp, side by side
#[derive(Parser, Debug)]
#[command(name = "duoscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Text to search in (reads --file or stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text to search from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Replace every match with this text
    #[arg(short, long, value_name = "TEXT")]
    pub replace: Option<String>,

    /// How to treat overlapping matches when replacing
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<ReplacePolicy>,

    /// Run both scanners concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "DUOSCAN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Replacement text, treating an empty value as absent.
    pub fn replacement(&self) -> Option<&str> {
        self.replace.as_deref().filter(|r| !r.is_empty())
    }

    /// Replacement policy: flag, then config.
    pub fn replace_policy(&self, config: &Config) -> ReplacePolicy {
        self.policy.unwrap_or(config.replace.policy)
    }

    /// Run mode: `--parallel` forces parallel, otherwise config decides.
    pub fn run_mode(&self, config: &Config) -> RunMode {
        if self.parallel {
            RunMode::Parallel
        } else {
            config.scan.run_mode()
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
