// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for searching.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Text output
// =============================================================================

/// Both algorithms appear in the comparison table with their match counts
#[test]
fn prints_comparison_table() {
    let project = Project::empty();
    project
        .cmd()
        .args(["abc", "ABCabc", "--no-color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Algorithm"))
        .stdout(predicates::str::contains("Boyer-Moore"))
        .stdout(predicates::str::contains("Rabin-Karp"))
        .stdout(predicates::str::contains("Matches Found:"))
        .stdout(predicates::str::contains("**ABC****abc**"));
}

/// A pattern that never occurs prints the notice instead of highlighted text
#[test]
fn reports_no_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["xyz", "hello world", "--no-color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches found!"))
        .stdout(predicates::str::contains("Matches Found:").not());
}

/// Empty text is rejected before searching
#[test]
fn empty_text_is_rejected() {
    let project = Project::empty();
    project
        .cmd()
        .args(["abc", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("please enter both text and pattern"));
}

/// Empty pattern is rejected before searching
#[test]
fn empty_pattern_is_rejected() {
    let project = Project::empty();
    project
        .cmd()
        .args(["", "some text"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("please enter both text and pattern"));
}

// =============================================================================
// Input sources
// =============================================================================

/// Text can be read from a file
#[test]
fn reads_text_from_file() {
    let project = Project::empty();
    project.file("input.txt", "one two ONE");
    let value = json_output(project.cmd().args(["one", "--file", "input.txt", "-o", "json"]));
    assert_eq!(value["algorithms"][0]["offsets"], serde_json::json!([0, 8]));
}

/// Text is read from stdin when neither TEXT nor --file is given
#[test]
fn reads_text_from_stdin() {
    let project = Project::empty();
    let mut cmd = project.cmd();
    cmd.args(["aa", "-o", "json"]);
    assert_cmd::Command::from_std(cmd)
        .write_stdin("aaaa")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"matches\": 3"));
}

/// A missing input file is an error naming the path
#[test]
fn missing_file_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["abc", "--file", "nope.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("nope.txt"));
}

// =============================================================================
// JSON output
// =============================================================================

/// JSON output carries offsets, agreement, and highlighted text
#[test]
fn json_output_reports_both_scanners() {
    let project = Project::empty();
    let value = json_output(project.cmd().args(["aa", "aaaa", "--output", "json"]));
    assert_eq!(value["pattern"], "aa");
    assert_eq!(value["agree"], true);
    assert_eq!(value["highlighted"], "**aa****aa****aa**");
    assert!(value["replaced"].is_null());

    let algorithms = value["algorithms"].as_array().unwrap();
    assert_eq!(algorithms.len(), 2);
    for algorithm in algorithms {
        assert_eq!(algorithm["offsets"], serde_json::json!([0, 1, 2]));
        assert!(algorithm["elapsed_seconds"].as_f64().unwrap() >= 0.0);
    }
    assert!(algorithms[1]["spurious_hits"].is_u64());
}

/// Parallel mode produces the same matches
#[test]
fn parallel_mode_agrees() {
    let project = Project::empty();
    let value = json_output(project.cmd().args(["the", "The other theme", "--parallel", "-o", "json"]));
    assert_eq!(value["agree"], true);
    assert_eq!(value["algorithms"][0]["offsets"], serde_json::json!([0, 5, 10]));
}
