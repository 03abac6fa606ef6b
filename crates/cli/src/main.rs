// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use duoscan::cli::Cli;
use duoscan::error::ExitCode;

mod cmd_search;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    duoscan::logging::init(cli.verbose);

    match cmd_search::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            tracing::debug!("search failed: {:?}", e);
            eprintln!("error: {:#}", e);
            ExitCode::UsageError.into()
        }
    }
}
