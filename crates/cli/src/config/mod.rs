// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `duoscan.toml` configuration.
//!
//! Every section is optional; missing keys take the defaults in
//! [`defaults`]. Unknown keys are rejected so typos surface immediately.

pub mod defaults;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::compare::RunMode;
use crate::transform::{Markers, ReplacePolicy};

/// Parsed configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version; only 1 is accepted.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Emphasis markers for highlighted matches.
    #[serde(default)]
    pub highlight: Markers,

    #[serde(default)]
    pub replace: ReplaceConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            highlight: Markers::default(),
            replace: ReplaceConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::VERSION
    }
}

/// `[replace]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceConfig {
    /// "disjoint" drops overlapping matches, "strict" rejects them.
    #[serde(default)]
    pub policy: ReplacePolicy,
}

/// `[scan]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Run both scanners concurrently.
    #[serde(default)]
    pub parallel: bool,
}

impl ScanConfig {
    pub fn run_mode(&self) -> RunMode {
        if self.parallel {
            RunMode::Parallel
        } else {
            RunMode::Sequential
        }
    }
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if config.version != defaults::VERSION {
        anyhow::bail!(
            "{}: unsupported config version {} (expected {})",
            path.display(),
            config.version,
            defaults::VERSION
        );
    }
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
