// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Highlight markers come from duoscan.toml
#[test]
fn config_sets_highlight_markers() {
    let project = Project::empty();
    project.config(
        r#"version = 1

[highlight]
open = "["
close = "]"
"#,
    );
    let value = json_output(project.cmd().args(["abc", "xabcx", "-o", "json"]));
    assert_eq!(value["highlighted"], "x[abc]x");
}

/// The replace policy comes from duoscan.toml unless overridden
#[test]
fn config_sets_replace_policy() {
    let project = Project::empty();
    project.config(
        r#"version = 1

[replace]
policy = "strict"
"#,
    );
    project
        .cmd()
        .args(["aa", "aaa", "-r", "b"])
        .assert()
        .failure()
        .code(2);

    let value = json_output(
        project
            .cmd()
            .args(["aa", "aaa", "-r", "b", "--policy", "disjoint", "-o", "json"]),
    );
    assert_eq!(value["replaced"], "ba");
}

/// Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let project = Project::empty();
    project.config("version = 1\nunknown_key = true\n");
    project
        .cmd()
        .args(["a", "a"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// An explicit config path is honored, including via the environment
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("custom.toml", "version = 1\n[highlight]\nopen = \"<\"\nclose = \">\"\n");

    let value = json_output(project.cmd().args(["b", "abc", "-C", "custom.toml", "-o", "json"]));
    assert_eq!(value["highlighted"], "a<b>c");

    let value = json_output(
        project
            .cmd()
            .env("DUOSCAN_CONFIG", "custom.toml")
            .args(["b", "abc", "-o", "json"]),
    );
    assert_eq!(value["highlighted"], "a<b>c");
}

/// Unsupported versions are rejected
#[test]
fn unsupported_version_fails() {
    let project = Project::empty();
    project.config("version = 3\n");
    project
        .cmd()
        .args(["a", "a"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported config version"));
}
