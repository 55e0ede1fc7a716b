// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lanes-core operations.

use thiserror::Error;

/// All possible errors that can occur in lanes-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("column not found: {0}\n  hint: the column id must be one of the board's configured columns")]
    ColumnNotFound(String),

    #[error(
        "invalid entity kind: '{0}'\n  hint: valid kinds are: task, story, feature, epic"
    )]
    InvalidEntityKind(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("duplicate column id '{0}'\n  hint: every column on a board needs a unique id")]
    DuplicateColumn(String),

    #[error("columns '{first}' and '{second}' both resolve to '{key}'\n  hint: rename one of them so statuses map to a single column")]
    ColumnCollision {
        first: String,
        second: String,
        key: String,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("store error: {0}")]
    Store(String),
}

/// A specialized Result type for lanes-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
