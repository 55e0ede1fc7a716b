// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

// CLI parsing tests, split by command.

use super::*;


// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_init_defaults() {
    let cli = parse(&["lanes", "init"]).unwrap();
    match cli.command {
        Command::Init { name, path } => {
            assert_eq!(name, "Board");
            assert!(path.is_none());
        }
        _ => unreachable!("expected Init command"),
    }
}

#[test]
fn test_progress_with_sprint_json() {
    let cli = parse(&["lanes", "progress", "--sprint", "s1", "-o", "json"]).unwrap();
    match cli.command {
        Command::Progress {
            kind,
            sprint,
            output,
        } => {
            assert_eq!(kind.kind, EntityKind::Task);
            assert_eq!(sprint.as_deref(), Some("s1"));
            assert_eq!(output, OutputFormat::Json);
        }
        _ => unreachable!("expected Progress command"),
    }
}

#[test]
fn test_unknown_command_fails() {
    assert!(parse(&["lanes", "drag"]).is_err());
}
