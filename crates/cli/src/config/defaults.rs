// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Supported config format version.
pub const VERSION: u32 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "duoscan.toml";

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV: &str = "DUOSCAN_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DUOSCAN_LOG";

/// Log filter used when `DUOSCAN_LOG` is unset.
pub const LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "duoscan=debug";
