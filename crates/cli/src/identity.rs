// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Acting-user identity for implicit self-assignment on moves.

use std::process::Command;

use crate::config::Config;

/// Returns the acting user's email, if one is known.
///
/// Resolution order:
/// 1. `user.email` in `.lanes/config.toml`
/// 2. Git config user.email
///
/// With neither, moves skip self-assignment.
pub fn acting_user(config: &Config) -> Option<String> {
    config
        .user
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(String::from)
        .or_else(get_git_user_email)
}

fn get_git_user_email() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.email"])
        .output()
        .ok()?;

    if output.status.success() {
        let email = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !email.is_empty() {
            return Some(email);
        }
    }
    None
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
