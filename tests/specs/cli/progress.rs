// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lanes progress` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lanes() -> Command {
    cargo_bin_cmd!("lanes")
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lanes().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn create(temp: &TempDir, args: &[&str]) {
    lanes()
        .arg("new")
        .args(args)
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn empty_board_is_zero_percent() {
    let temp = init_temp();

    lanes()
        .arg("progress")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0/0 completed (0%), 0 remaining"));
}

#[test]
fn rounds_to_nearest_percent() {
    let temp = init_temp();
    create(&temp, &["task", "A", "-s", "concluido"]);
    create(&temp, &["task", "B", "-s", "backlog"]);
    create(&temp, &["task", "C", "-s", "em_progresso"]);

    lanes()
        .arg("progress")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3 completed (33%), 2 remaining"));
}

#[test]
fn legacy_done_status_counts_as_completed() {
    let temp = init_temp();
    create(&temp, &["task", "A", "-s", "done"]);
    create(&temp, &["task", "B", "-s", "Concluído"]);
    create(&temp, &["task", "C", "-s", "blocked"]);

    lanes()
        .arg("progress")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2/3 completed (67%)"));
}

#[test]
fn sprint_restricts_counts() {
    let temp = init_temp();
    create(&temp, &["task", "A", "-s", "concluido", "--sprint", "s1"]);
    create(&temp, &["task", "B", "--sprint", "s1"]);
    create(&temp, &["task", "C", "-s", "concluido", "--sprint", "s2"]);

    let output = lanes()
        .args(["progress", "--sprint", "s1", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let progress: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(progress["completed"], 1);
    assert_eq!(progress["total"], 2);
    assert_eq!(progress["percentage"], 50);
}

#[test]
fn kind_selects_item_kind() {
    let temp = init_temp();
    create(&temp, &["epic", "Platform", "-s", "completed"]);
    create(&temp, &["task", "Open"]);

    lanes()
        .args(["progress", "-k", "epic"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 completed (100%)"));
}
