// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.lanes/config.toml` and includes:
//! - `board`: the workflow columns items are bucketed into
//! - `user.email`: the acting user for self-assignment on moves
//! - `engine`: cascade and rollback behavior
//! - `workspace`: Optional path to store the database in a different location

use lanes_core::{Board, BoardConfig, Column, EngineOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".lanes";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "items.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.lanes/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub engine: EngineOptions,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Falls back to `git config user.email` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Config {
    /// A config holding the default three-column board.
    pub fn new(name: &str) -> Self {
        Config {
            workspace: None,
            user: UserConfig::default(),
            engine: EngineOptions::default(),
            board: default_board(name),
        }
    }

    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Validates the configured board.
    pub fn board(&self) -> Result<Board> {
        Ok(Board::new(self.board.clone())?)
    }
}

/// backlog (initial) -> em_progresso -> concluido (final)
pub fn default_board(name: &str) -> BoardConfig {
    BoardConfig {
        id: "main".to_string(),
        name: name.to_string(),
        project_id: None,
        columns: vec![
            Column::new("backlog", "Backlog", 0)
                .initial()
                .with_color("#94a3b8"),
            Column::new("em_progresso", "Em Progresso", 1).with_color("#3b82f6"),
            Column::new("concluido", "Concluído", 2)
                .final_()
                .with_color("#22c55e"),
        ],
    }
}

/// Find the `.lanes` directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(DB_FILE_NAME)
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(DB_FILE_NAME)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Create `.lanes/` under `path` with a default config.
///
/// An existing `.lanes/` without a config file is reused.
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    fs::write(&gitignore_path, "# Local database\nitems.db\nitems.db-*\n")?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
