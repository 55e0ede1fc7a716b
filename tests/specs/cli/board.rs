// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lanes board` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn lanes() -> Command {
    cargo_bin_cmd!("lanes")
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lanes().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn create(temp: &TempDir, args: &[&str]) -> String {
    let output = lanes()
        .arg("new")
        .args(args)
        .args(["-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "lanes new failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn board_ids(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = lanes()
        .arg("board")
        .args(args)
        .args(["-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn empty_board_lists_every_column() {
    let temp = init_temp();

    lanes()
        .arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog (0)"))
        .stdout(predicate::str::contains("Em Progresso (0)"))
        .stdout(predicate::str::contains("Concluído (0)"))
        .stdout(predicate::str::contains("No column").not());
}

#[test]
fn new_items_land_in_initial_column() {
    let temp = init_temp();
    let id = create(&temp, &["task", "Write docs"]);

    lanes()
        .arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog (1)"))
        .stdout(predicate::str::contains(format!("  - {id}: Write docs")));
}

#[parameterized(
    english_doing = { "doing", "em_progresso" },
    portuguese_name = { "Em Progresso", "em_progresso" },
    english_done = { "done", "concluido" },
    accented_name = { "CONCLUÍDO", "concluido" },
    icebox = { "icebox", "backlog" },
)]
fn legacy_statuses_resolve_to_columns(status: &str, column: &str) {
    let temp = init_temp();
    let id = create(&temp, &["task", "Legacy", "-s", status]);

    let output = lanes()
        .args(["board", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bucket = board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column)
        .unwrap();
    assert_eq!(bucket["count"], 1);
    assert_eq!(bucket["items"][0]["id"], id.as_str());
}

#[test]
fn unmatched_status_is_listed_separately() {
    let temp = init_temp();
    let id = create(&temp, &["task", "Stuck", "-s", "blocked"]);

    lanes()
        .arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No column (1)"))
        .stdout(predicate::str::contains(format!("{id}: Stuck [blocked]")));
}

#[test]
fn filters_combine() {
    let temp = init_temp();
    let login = create(
        &temp,
        &["task", "Fix login", "-p", "high", "--sprint", "s1"],
    );
    let logout = create(&temp, &["task", "Fix logout", "-p", "low", "--sprint", "s1"]);
    let other = create(&temp, &["task", "Login audit", "-p", "high", "--sprint", "s2"]);

    assert_eq!(board_ids(&temp, &["-q", "LOGIN"]), vec![login.clone(), other.clone()]);
    assert_eq!(board_ids(&temp, &["--sprint", "s1"]).len(), 2);
    assert_eq!(board_ids(&temp, &["-q", "login", "--sprint", "s1"]), vec![login]);
    assert_eq!(board_ids(&temp, &["-p", "low"]), vec![logout]);
    assert_eq!(board_ids(&temp, &["--sprint", "all"]).len(), 3);
}

#[test]
fn story_filter_narrows_tasks() {
    let temp = init_temp();
    let story = create(&temp, &["story", "Checkout"]);
    let inside = create(&temp, &["task", "Form", "--story", &story]);
    create(&temp, &["task", "Elsewhere"]);

    assert_eq!(board_ids(&temp, &["--story", &story]), vec![inside]);
}

#[test]
fn kind_selects_item_kind() {
    let temp = init_temp();
    let epic = create(&temp, &["epic", "Platform"]);
    create(&temp, &["task", "Unrelated"]);

    assert_eq!(board_ids(&temp, &["-k", "epic"]), vec![epic]);
}

#[test]
fn wip_limit_is_reported_not_enforced() {
    let temp = init_temp();
    let path = temp.path().join(".lanes/config.toml");
    let config = std::fs::read_to_string(&path).unwrap();
    let config = config.replacen(
        "id = \"em_progresso\"",
        "id = \"em_progresso\"\nwip_limit = 1",
        1,
    );
    std::fs::write(&path, config).unwrap();

    create(&temp, &["task", "One", "-s", "em_progresso"]);
    create(&temp, &["task", "Two", "-s", "em_progresso"]);

    lanes()
        .arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Em Progresso (2/1)"))
        .stdout(predicate::str::contains(
            "warning: em_progresso is over its WIP limit",
        ));
}

#[test]
fn invalid_board_config_fails_with_hint() {
    let temp = init_temp();
    let path = temp.path().join(".lanes/config.toml");
    let config = std::fs::read_to_string(&path).unwrap();
    // Rename a column so its display name collides with another column's id.
    let config = config.replacen("name = \"Em Progresso\"", "name = \"backlog\"", 1);
    std::fs::write(&path, config).unwrap();

    lanes()
        .arg("board")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid board"));
}
