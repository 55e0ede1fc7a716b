// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn configured_email_wins() {
    let mut config = Config::new("x");
    config.user.email = Some("  ana@example.com ".into());
    assert_eq!(acting_user(&config).as_deref(), Some("ana@example.com"));
}

#[test]
fn blank_configured_email_is_ignored() {
    let mut config = Config::new("x");
    config.user.email = Some("   ".into());
    // Falls through to git, which may or may not be configured here.
    assert_ne!(acting_user(&config).as_deref(), Some("   "));
    assert_ne!(acting_user(&config).as_deref(), Some(""));
}
