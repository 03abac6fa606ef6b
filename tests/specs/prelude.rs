//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the duoscan binary, isolated from
/// any config or log filter in the caller's environment.
pub fn duoscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("duoscan"));
    cmd.env_remove("DUOSCAN_CONFIG").env_remove("DUOSCAN_LOG");
    cmd
}

/// A temporary directory acting as the working directory for a run.
///
/// Contains a `.git` directory so config discovery never walks above it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write duoscan.toml.
    pub fn config(&self, content: &str) {
        std::fs::write(self.path().join("duoscan.toml"), content).unwrap();
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).unwrap();
    }

    /// duoscan command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = duoscan_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Parse stdout of a `--output json` run.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("should be valid JSON")
}
