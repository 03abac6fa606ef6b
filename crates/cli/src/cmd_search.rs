// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `duoscan` search command implementation.
//!
//! Collects the text, runs both scanners, then highlights and optionally
//! replaces using the Boyer-Moore match list.

use std::io::{self, Read, Write};

use anyhow::Context;
use termcolor::StandardStream;

use duoscan::cli::{Cli, OutputFormat};
use duoscan::compare::Comparison;
use duoscan::config::{self, Config};
use duoscan::discovery;
use duoscan::error::ExitCode;
use duoscan::file_reader::FileContent;
use duoscan::report::{self, SearchReport};
use duoscan::transform;

/// Run the search command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd) {
        Some(path) => config::load(&path)?,
        None => Config::default(),
    };

    let content = match &cli.file {
        Some(path) => Some(
            FileContent::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };
    let stdin_text;
    let text: &str = match (&cli.text, &content) {
        (Some(text), _) => text.as_str(),
        (None, Some(content)) => content
            .as_str()
            .context("input file is not valid UTF-8")?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            stdin_text = buf;
            stdin_text.as_str()
        }
    };

    if text.is_empty() || cli.pattern.is_empty() {
        anyhow::bail!("please enter both text and pattern");
    }
    tracing::debug!(
        "searching {} characters for {:?}",
        text.chars().count(),
        cli.pattern
    );

    let comparison = Comparison::run(text, &cli.pattern, cli.run_mode(&config));
    let matches = &comparison.shift.matches;

    let highlighted = if matches.is_empty() {
        None
    } else {
        Some(transform::highlight_with(
            text,
            &cli.pattern,
            matches,
            &config.highlight,
        ))
    };

    let replaced = match cli.replacement() {
        Some(replacement) if !matches.is_empty() => Some(transform::replace_all(
            text,
            &cli.pattern,
            replacement,
            matches,
            cli.replace_policy(&config),
        )?),
        _ => None,
    };

    let agrees = comparison.agrees();
    let search_report = SearchReport {
        pattern: cli.pattern.clone(),
        comparison,
        highlighted,
        replaced,
    };

    match cli.output {
        OutputFormat::Json => {
            let value = report::render_json(&search_report);
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(cli.color.choice(cli.no_color));
            report::render_text(&search_report, &mut stdout)?;
        }
    }

    Ok(if agrees {
        ExitCode::Success
    } else {
        ExitCode::Disagreement
    })
}
