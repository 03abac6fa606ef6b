// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for replacement.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Replacement text is printed after the highlighted matches
#[test]
fn replaces_matches() {
    let project = Project::empty();
    project
        .cmd()
        .args(["abc", "abcabc", "--replace", "X", "--no-color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Text after replacement:\nXX\n"));
}

/// The default policy drops matches overlapping an earlier one
#[test]
fn disjoint_policy_is_default() {
    let project = Project::empty();
    let value = json_output(project.cmd().args(["aa", "aaaa", "-r", "b", "-o", "json"]));
    assert_eq!(value["replaced"], "bb");
}

/// The strict policy refuses overlapping matches
#[test]
fn strict_policy_rejects_overlaps() {
    let project = Project::empty();
    project
        .cmd()
        .args(["aa", "aaaa", "-r", "b", "--policy", "strict"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("overlaps the previous match"));
}

/// The strict policy accepts disjoint matches
#[test]
fn strict_policy_accepts_disjoint_matches() {
    let project = Project::empty();
    let value = json_output(
        project
            .cmd()
            .args(["cat", "Cat, cat", "-r", "dog", "--policy", "strict", "-o", "json"]),
    );
    assert_eq!(value["replaced"], "dog, dog");
}

/// An empty replacement means no replacement
#[test]
fn empty_replacement_is_ignored() {
    let project = Project::empty();
    let value = json_output(project.cmd().args(["abc", "abcabc", "-r", "", "-o", "json"]));
    assert!(value["replaced"].is_null());
}

/// No replacement is produced when nothing matched
#[test]
fn no_replacement_without_matches() {
    let project = Project::empty();
    let value = json_output(project.cmd().args(["xyz", "abc", "-r", "q", "-o", "json"]));
    assert!(value["replaced"].is_null());
    assert!(value["highlighted"].is_null());
}
