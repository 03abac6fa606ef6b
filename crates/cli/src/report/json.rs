// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::SearchReport;

/// Build the JSON document for a report.
pub fn render_json(report: &SearchReport) -> serde_json::Value {
    let comparison = &report.comparison;

    let algorithms: Vec<serde_json::Value> = comparison
        .runs()
        .iter()
        .map(|run| {
            let mut entry = json!({
                "name": run.algorithm,
                "elapsed_seconds": run.elapsed.as_secs_f64(),
                "matches": run.match_count(),
                "offsets": run.matches,
            });
            if let Some(spurious) = run.spurious_hits {
                entry["spurious_hits"] = json!(spurious);
            }
            entry
        })
        .collect();

    json!({
        "pattern": report.pattern,
        "algorithms": algorithms,
        "agree": comparison.agrees(),
        "faster": comparison.faster(),
        "highlighted": report.highlighted,
        "replaced": report.replaced,
    })
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
