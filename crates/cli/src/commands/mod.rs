// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod init;
pub mod mv;
pub mod new;
pub mod progress;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use lanes_core::{BoardSession, Database, EntityKind, Notifier};
use std::path::PathBuf;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Load a board session for one entity kind over the database.
pub async fn open_session<'a, N: Notifier>(
    db: &'a Database,
    config: &Config,
    kind: EntityKind,
    notifier: N,
) -> Result<BoardSession<&'a Database, N>> {
    let board = config.board()?;
    let session = BoardSession::load(board, kind, db, notifier, config.engine).await?;
    Ok(session)
}
