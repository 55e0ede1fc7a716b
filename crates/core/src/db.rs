// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed data-access collaborator.
//!
//! All four entity kinds share one `items` table. Hierarchy references are
//! plain nullable columns; nothing is enforced referentially.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::item::{CascadeLevel, EntityKind, ItemPatch, NewItem, WorkItem};
use crate::store::{DataAccess, ItemFilter};

/// SQL schema for the work item database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    kind TEXT NOT NULL,
    title TEXT NOT NULL,
    status TEXT NOT NULL,
    story_id TEXT,
    feature_id TEXT,
    epic_id TEXT,
    sprint_id TEXT,
    assigned_to_email TEXT,
    priority TEXT,
    type_id TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_kind ON items(kind);
CREATE INDEX IF NOT EXISTS idx_items_story ON items(story_id);
CREATE INDEX IF NOT EXISTS idx_items_feature ON items(feature_id);
CREATE INDEX IF NOT EXISTS idx_items_epic ON items(epic_id);
CREATE INDEX IF NOT EXISTS idx_items_sprint ON items(sprint_id);
"#;

const ITEM_COLUMNS: &str = "id, kind, title, status, story_id, feature_id, epic_id, sprint_id,
     assigned_to_email, priority, type_id, created_at, updated_at";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn row_to_item(row: &Row<'_>) -> std::result::Result<WorkItem, rusqlite::Error> {
    let kind: String = row.get("kind")?;
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;
    Ok(WorkItem {
        id: row.get("id")?,
        kind: parse_db(&kind, "kind")?,
        title: row.get("title")?,
        status: row.get("status")?,
        story_id: row.get("story_id")?,
        feature_id: row.get("feature_id")?,
        epic_id: row.get("epic_id")?,
        sprint_id: row.get("sprint_id")?,
        assigned_to_email: row.get("assigned_to_email")?,
        priority: row.get("priority")?,
        type_id: row.get("type_id")?,
        created_at: parse_timestamp(&created_at, "created_at")?,
        updated_at: parse_timestamp(&updated_at, "updated_at")?,
    })
}

fn parent_column(level: CascadeLevel) -> &'static str {
    match level {
        CascadeLevel::Story => "story_id",
        CascadeLevel::Feature => "feature_id",
        CascadeLevel::Epic => "epic_id",
    }
}

/// SQLite database holding work items of every kind.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open a database at the given path, creating the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Store("database connection lock poisoned".to_string()))
    }

    /// Insert an item as-is.
    pub fn insert_item(&self, item: &WorkItem) -> Result<()> {
        let conn = self.conn()?;
        insert(&conn, item)
    }

    /// Get an item of the given kind by id.
    pub fn get_item(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        let conn = self.conn()?;
        get(&conn, kind, id)
    }

    /// List items of a kind passing the filter, oldest first.
    pub fn list_items(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        let mut sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE kind = ?1");
        let mut values = vec![kind.as_str().to_string()];

        if let Some((level, parent_id)) = &filter.parent {
            values.push(parent_id.clone());
            sql.push_str(&format!(" AND {} = ?{}", parent_column(*level), values.len()));
        }
        if let Some(sprint_id) = &filter.sprint_id {
            values.push(sprint_id.clone());
            sql.push_str(&format!(" AND sprint_id = ?{}", values.len()));
        }
        sql.push_str(" ORDER BY rowid");

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let items = stmt
            .query_map(params_from_iter(values.iter()), row_to_item)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Write the fields set in the patch.
    ///
    /// An empty patch writes nothing but still requires the item to exist.
    pub fn update_item(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        let conn = self.conn()?;
        if patch.is_empty() {
            return get(&conn, kind, id).map(|_| ());
        }
        conn.execute(
            "UPDATE items SET
                 status = COALESCE(?1, status),
                 assigned_to_email = COALESCE(?2, assigned_to_email),
                 updated_at = ?3
             WHERE id = ?4 AND kind = ?5",
            params![
                patch.status,
                patch.assigned_to_email,
                Utc::now().to_rfc3339(),
                id,
                kind.as_str()
            ],
        )?;
        if conn.changes() == 0 {
            return Err(Error::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Create an item with a generated id.
    pub fn create_item(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        let conn = self.conn()?;
        let now = Utc::now();
        let mut lookup_error = None;
        let id = generate_unique_id(kind, &new.title, &now, |candidate| {
            match exists(&conn, candidate) {
                Ok(found) => found,
                Err(e) => {
                    lookup_error = Some(e);
                    false
                }
            }
        });
        if let Some(e) = lookup_error {
            return Err(e);
        }
        let item = WorkItem::from_new(id, kind, new, now);
        insert(&conn, &item)?;
        Ok(item)
    }
}

fn get(conn: &Connection, kind: EntityKind, id: &str) -> Result<WorkItem> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1 AND kind = ?2"),
        params![id, kind.as_str()],
        row_to_item,
    )
    .optional()?
    .ok_or_else(|| Error::ItemNotFound(id.to_string()))
}

fn exists(conn: &Connection, id: &str) -> Result<bool> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(found)
}

fn insert(conn: &Connection, item: &WorkItem) -> Result<()> {
    conn.execute(
        &format!(
            "INSERT INTO items ({ITEM_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
        ),
        params![
            item.id,
            item.kind.as_str(),
            item.title,
            item.status,
            item.story_id,
            item.feature_id,
            item.epic_id,
            item.sprint_id,
            item.assigned_to_email,
            item.priority,
            item.type_id,
            item.created_at.to_rfc3339(),
            item.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

// Calls run to completion on the caller's thread; SQLite access is local and
// short, and the engine awaits each call before issuing the next.
#[async_trait]
impl DataAccess for Database {
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        self.list_items(kind, filter)
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        self.get_item(kind, id)
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        self.update_item(kind, id, patch)
    }

    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        self.create_item(kind, new)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
