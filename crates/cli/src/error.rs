// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the lnrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'lanes init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("item not found: {0}\n  hint: run 'lanes board' to see item ids")]
    ItemNotFound(String),

    #[error("column not found: '{column}'\n  hint: board columns are: {available}")]
    ColumnNotFound { column: String, available: String },

    #[error("invalid kind: '{0}'\n  hint: valid kinds are: task, story, feature, epic")]
    InvalidEntityKind(String),

    #[error("a {kind} cannot have a {parent} parent\n  hint: tasks belong to stories, stories to features, features to epics")]
    InvalidParent { kind: String, parent: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid board: {0}\n  hint: fix the [board] section of .lanes/config.toml")]
    InvalidBoard(String),

    #[error("move of {id} was reverted: {reason}")]
    MoveReverted { id: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),

    #[error("store error: {0}")]
    Store(String),
}

/// A specialized Result type for lnrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<lanes_core::Error> for Error {
    fn from(e: lanes_core::Error) -> Self {
        match e {
            lanes_core::Error::ItemNotFound(id) => Error::ItemNotFound(id),
            lanes_core::Error::ColumnNotFound(column) => Error::ColumnNotFound {
                column,
                available: String::from("see 'lanes board'"),
            },
            lanes_core::Error::InvalidEntityKind(s) => Error::InvalidEntityKind(s),
            e @ (lanes_core::Error::InvalidBoard(_)
            | lanes_core::Error::DuplicateColumn(_)
            | lanes_core::Error::ColumnCollision { .. }) => Error::InvalidBoard(e.to_string()),
            lanes_core::Error::Database(e) => Error::Database(e),
            lanes_core::Error::Io(e) => Error::Io(e),
            lanes_core::Error::Json(e) => Error::Json(e),
            lanes_core::Error::CorruptedData(s) => Error::CorruptedData(s),
            lanes_core::Error::Store(s) => Error::Store(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
