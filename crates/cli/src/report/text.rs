// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use super::SearchReport;
use crate::color::scheme;

const TABLE_WIDTH: usize = 42;

fn write_styled(out: &mut dyn WriteColor, spec: &ColorSpec, line: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", line)?;
    out.reset()?;
    writeln!(out)
}

/// Write the comparison table, verdict, highlighted text and replacement.
pub fn render_text(report: &SearchReport, out: &mut dyn WriteColor) -> io::Result<()> {
    let comparison = &report.comparison;
    let separator = "\u{2500}".repeat(TABLE_WIDTH);

    writeln!(out, "{}", separator)?;
    let header = format!("{:<18} {:>10}  {:>11}", "Algorithm", "Time (s)", "Matches");
    write_styled(out, &scheme::header(), &header)?;
    writeln!(out, "{}", separator)?;
    for run in comparison.runs() {
        writeln!(
            out,
            "{:<18} {:>10.6}  {:>11}",
            run.algorithm.name(),
            run.elapsed.as_secs_f64(),
            run.match_count()
        )?;
    }
    writeln!(out, "{}", separator)?;

    match comparison.faster() {
        Some(algorithm) => write_styled(
            out,
            &scheme::pass(),
            &format!("{} algorithm was more efficient in this case!", algorithm),
        )?,
        None => write_styled(out, &scheme::info(), "Both algorithms performed similarly.")?,
    }

    if !comparison.agrees() {
        write_styled(
            out,
            &scheme::fail(),
            &format!(
                "Scanners disagree: {} found {:?}, {} found {:?}",
                comparison.shift.algorithm,
                comparison.shift.matches,
                comparison.hash.algorithm,
                comparison.hash.matches
            ),
        )?;
    }
    writeln!(out)?;

    match &report.highlighted {
        Some(highlighted) => {
            write_styled(out, &scheme::header(), "Matches Found:")?;
            writeln!(out, "{}", highlighted)?;
        }
        None => write_styled(out, &scheme::warn(), "No matches found!")?,
    }

    if let Some(replaced) = &report.replaced {
        writeln!(out)?;
        write_styled(out, &scheme::header(), "Text after replacement:")?;
        writeln!(out, "{}", replaced)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
