// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `DUOSCAN_LOG` when set; otherwise warnings only,
//! or debug output for this crate with `--verbose`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::defaults::{LOG_ENV, LOG_FILTER, VERBOSE_LOG_FILTER};

/// Filter used when `DUOSCAN_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_LOG_FILTER } else { LOG_FILTER }
}

/// Install the global subscriber. Returns false if one was already set.
pub fn init(verbose: bool) -> bool {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
