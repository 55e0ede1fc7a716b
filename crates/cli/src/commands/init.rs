// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::Database;
use std::path::{Path, PathBuf};

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(name: &str, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let (work_dir, config) = run_impl(&target_path, name)?;

    println!("Initialized board at {}", work_dir.display());
    let columns: Vec<&str> = config.board.columns.iter().map(|c| c.id.as_str()).collect();
    println!("Columns: {}", columns.join(", "));
    Ok(())
}

pub(crate) fn run_impl(path: &Path, name: &str) -> Result<(PathBuf, Config)> {
    let config = Config::new(name);
    config.board()?;

    let work_dir = init_work_dir(path, &config)?;
    Database::open(&get_db_path(&work_dir, &config))?;
    write_gitignore(&work_dir)?;

    tracing::debug!(work_dir = %work_dir.display(), "initialized");
    Ok((work_dir, config))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
