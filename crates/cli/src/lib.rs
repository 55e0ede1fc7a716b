// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lnrs - command-line front end for the lanes workflow board.
//!
//! Each command opens the project's `.lanes/` directory, drives the
//! [`lanes_core`] engine against the local SQLite store, and prints the
//! result. A move on the command line is the same gesture as a card drag:
//! the item's status becomes the destination column id, an unassigned item
//! is claimed by the acting user, and completion cascades up the hierarchy.
//!
//! ```rust,ignore
//! use lnrs::{find_work_dir, get_db_path, Config, Database};
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;
mod identity;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, KindArg, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use lanes_core::Database;

use commands::new::NewOptions;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(dispatch(command))
}

async fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init { name, path } => commands::init::run(&name, path),
        Command::New {
            kind,
            title,
            status,
            story,
            feature,
            epic,
            sprint,
            priority,
            type_id,
            assignee,
            output,
        } => {
            commands::new::run(
                NewOptions {
                    kind,
                    title,
                    status,
                    story,
                    feature,
                    epic,
                    sprint,
                    priority,
                    type_id,
                    assignee,
                },
                output,
            )
            .await
        }
        Command::Board {
            kind,
            filter,
            output,
        } => commands::board::run(kind.kind, filter.into_filter_set(), output).await,
        Command::Move {
            id,
            column,
            index,
            kind,
        } => commands::mv::run(&id, &column, index, kind.kind).await,
        Command::Progress {
            kind,
            sprint,
            output,
        } => commands::progress::run(kind.kind, sprint.as_deref(), output).await,
    }
}
