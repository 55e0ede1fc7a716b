// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `lanes` binary with git identity lookups isolated from the host.
pub fn lanes() -> Command {
    let mut cmd = cargo_bin_cmd!("lanes");
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create an initialized temp directory with the default board
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lanes()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an item and return its ID
pub fn create_item(temp: &TempDir, kind: &str, title: &str, extra: &[&str]) -> String {
    let output = lanes()
        .args(["new", kind, title, "-o", "id"])
        .args(extra)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "lanes new failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
