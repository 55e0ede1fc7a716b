// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board definitions: an ordered list of workflow columns for one project.
//!
//! A [`Board`] can only be built from a [`BoardConfig`] that passes
//! validation, so every status resolves to at most one column.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::error::{Error, Result};
use crate::status::{self, CanonicalStatus};

/// One workflow stage on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Written as the item status when an item lands in this column.
    pub id: String,
    /// Display name, also used for legacy status matching.
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_initial: bool,
    /// Items here count as completed.
    #[serde(default)]
    pub is_final: bool,
    /// Advisory only; never enforced by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>, order: i32) -> Self {
        Column {
            id: id.into(),
            name: name.into(),
            color: String::new(),
            order,
            is_initial: false,
            is_final: false,
            wip_limit: None,
        }
    }

    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_wip_limit(mut self, limit: u32) -> Self {
        self.wip_limit = Some(limit);
        self
    }

    /// Whether a raw status value belongs in this column.
    pub fn accepts(&self, status: &str) -> bool {
        status::matches(status, &self.id, &self.name)
    }
}

/// Unvalidated board definition, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A validated board with columns sorted by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    columns: Vec<Column>,
}

impl Board {
    /// Validates and builds a board.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, two columns share an id,
    /// or two columns would both accept the same status value.
    pub fn new(config: BoardConfig) -> Result<Self> {
        let mut columns = config.columns;
        if columns.is_empty() {
            return Err(Error::InvalidBoard(format!(
                "board '{}' has no columns",
                config.id
            )));
        }
        columns.sort_by_key(|c| c.order);

        validate_columns(&columns)?;

        Ok(Board {
            id: config.id,
            name: config.name,
            project_id: config.project_id,
            columns,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// The first column flagged initial, or the first column when none is.
    pub fn initial_column(&self) -> &Column {
        self.columns
            .iter()
            .find(|c| c.is_initial)
            .unwrap_or(&self.columns[0])
    }

    /// The column a status value renders in, if any.
    pub fn resolve(&self, status: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.accepts(status))
    }

    /// Whether a status value resolves to a final column.
    pub fn is_completed(&self, status: &str) -> bool {
        self.resolve(status).is_some_and(|c| c.is_final)
    }

    pub fn final_column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.is_final)
            .map(|c| c.id.as_str())
    }
}

impl TryFrom<BoardConfig> for Board {
    type Error = Error;

    fn try_from(config: BoardConfig) -> Result<Self> {
        Board::new(config)
    }
}

fn validate_columns(columns: &[Column]) -> Result<()> {
    let mut ids = HashSet::new();
    for column in columns {
        if !ids.insert(column.id.as_str()) {
            return Err(Error::DuplicateColumn(column.id.clone()));
        }
    }

    // Not enforced: the first initial column wins.
    let initial_count = columns.iter().filter(|c| c.is_initial).count();
    if initial_count > 1 {
        warn!(count = initial_count, "more than one column is marked initial");
    }

    for (i, a) in columns.iter().enumerate() {
        let a_name = status::normalize(&a.name);
        let a_group = CanonicalStatus::from_normalized(&a_name);

        for b in &columns[i + 1..] {
            let b_name = status::normalize(&b.name);
            let key = if a_name == b_name {
                Some(a_name.clone())
            } else if a_group.is_some() && a_group == CanonicalStatus::from_normalized(&b_name) {
                a_group.map(|g| g.as_str().to_string())
            } else if b.accepts(&a.id) {
                Some(a.id.clone())
            } else if a.accepts(&b.id) {
                Some(b.id.clone())
            } else {
                None
            };

            if let Some(key) = key {
                return Err(Error::ColumnCollision {
                    first: a.id.clone(),
                    second: b.id.clone(),
                    key,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
