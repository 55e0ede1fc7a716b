// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lanes move` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lanes() -> Command {
    let mut cmd = cargo_bin_cmd!("lanes");
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1");
    cmd
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lanes().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn set_user_email(temp: &TempDir, email: &str) {
    let path = temp.path().join(".lanes/config.toml");
    let content = std::fs::read_to_string(&path).unwrap();
    let line = format!("email = \"{email}\"\n");
    let content = if content.contains("[user]\n") {
        content.replacen("[user]\n", &format!("[user]\n{line}"), 1)
    } else {
        format!("{content}\n[user]\n{line}")
    };
    std::fs::write(&path, content).unwrap();
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

fn board_json(temp: &TempDir, kind: &str) -> serde_json::Value {
    let output = lanes()
        .args(["board", "-k", kind, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn column_ids(board: &serde_json::Value, column: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column)
        .unwrap()["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn move_reports_destination_column() {
    let temp = init_temp();
    let id = create(&temp, &["task", "Write docs"]);

    lanes()
        .args(["move", &id, "em_progresso"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("moved {id} to Em Progresso")));

    let board = board_json(&temp, "task");
    assert_eq!(column_ids(&board, "em_progresso"), vec![id]);
}

#[test]
fn move_claims_unassigned_item_for_configured_user() {
    let temp = init_temp();
    set_user_email(&temp, "ana@example.com");
    let id = create(&temp, &["task", "Fix login"]);

    lanes()
        .args(["move", &id, "em_progresso"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Assigned {id} to ana@example.com"
        )));

    lanes()
        .args(["board", "-a", "ana@example.com", "-o", "id"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));
}

#[test]
fn move_keeps_existing_assignee() {
    let temp = init_temp();
    set_user_email(&temp, "ana@example.com");
    let id = create(&temp, &["task", "Fix login", "-a", "bob@example.com"]);

    lanes()
        .args(["move", &id, "em_progresso"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned").not());

    lanes()
        .args(["board", "-a", "bob@example.com", "-o", "id"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));
}

#[test]
fn finishing_last_task_completes_the_whole_chain() {
    let temp = init_temp();
    let epic = create(&temp, &["epic", "Platform"]);
    let feature = create(&temp, &["feature", "Payments", "--epic", &epic]);
    let story = create(&temp, &["story", "Checkout", "--feature", &feature]);
    let t1 = create(&temp, &["task", "Form", "--story", &story]);
    let t2 = create(&temp, &["task", "Submit", "--story", &story]);

    lanes()
        .args(["move", &t1, "concluido"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("completed").not());

    lanes()
        .args(["move", &t2, "concluido"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("story {story} completed")))
        .stdout(predicate::str::contains(format!("feature {feature} completed")))
        .stdout(predicate::str::contains(format!("epic {epic} completed")));

    for kind in ["story", "feature", "epic"] {
        lanes()
            .args(["progress", "-k", kind])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("1/1 completed (100%)"));
    }
}

#[test]
fn open_sibling_keeps_story_open() {
    let temp = init_temp();
    let story = create(&temp, &["story", "Checkout"]);
    let t1 = create(&temp, &["task", "Form", "--story", &story]);
    create(&temp, &["task", "Submit", "--story", &story]);

    lanes()
        .args(["move", &t1, "concluido"])
        .current_dir(temp.path())
        .assert()
        .success();

    lanes()
        .args(["progress", "-k", "story"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0/1 completed (0%)"));
}

#[test]
fn same_column_without_index_is_unchanged() {
    let temp = init_temp();
    let id = create(&temp, &["task", "Idle"]);

    lanes()
        .args(["move", &id, "backlog"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id} is already in backlog")));
}

#[test]
fn same_column_with_index_reorders_without_saving() {
    let temp = init_temp();
    let a = create(&temp, &["task", "First"]);
    create(&temp, &["task", "Second"]);

    lanes()
        .args(["move", &a, "backlog", "--index", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Reordered {a} within backlog")));

    // Ordering lives only in the session; the store keeps the item as it was.
    let board = board_json(&temp, "task");
    assert_eq!(column_ids(&board, "backlog").len(), 2);
}

#[test]
fn unknown_column_lists_available_columns() {
    let temp = init_temp();
    let id = create(&temp, &["task", "Lost"]);

    lanes()
        .args(["move", &id, "archive"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("column not found: 'archive'"))
        .stderr(predicate::str::contains("backlog, em_progresso, concluido"));
}

#[test]
fn unknown_item_fails() {
    let temp = init_temp();

    lanes()
        .args(["move", "task-deadbeef", "concluido"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: task-deadbeef"));
}

#[test]
fn kind_flag_selects_the_board() {
    let temp = init_temp();
    let story = create(&temp, &["story", "Checkout"]);

    lanes()
        .args(["move", &story, "em_progresso"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found"));

    lanes()
        .args(["move", &story, "em_progresso", "-k", "story"])
        .current_dir(temp.path())
        .assert()
        .success();
}
