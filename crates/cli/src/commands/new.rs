// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::{CascadeLevel, DataAccess, Database, EntityKind, NewItem, WorkItem};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

/// Fields for `lanes new`.
#[derive(Debug, Clone)]
pub struct NewOptions {
    pub kind: EntityKind,
    pub title: String,
    pub status: Option<String>,
    pub story: Option<String>,
    pub feature: Option<String>,
    pub epic: Option<String>,
    pub sprint: Option<String>,
    pub priority: Option<String>,
    pub type_id: Option<String>,
    pub assignee: Option<String>,
}

pub async fn run(options: NewOptions, output: OutputFormat) -> Result<()> {
    let (db, config, _work_dir) = open_db()?;
    let item = run_impl(&db, &config, options).await?;

    match output {
        OutputFormat::Text => println!("Created {} {}: {}", item.kind, item.id, item.title),
        OutputFormat::Id => println!("{}", item.id),
        OutputFormat::Json => println!("{}", serde_json::to_string(&item)?),
    }
    Ok(())
}

pub(crate) async fn run_impl(db: &Database, config: &Config, options: NewOptions) -> Result<WorkItem> {
    let title = options.title.trim();
    if title.is_empty() {
        return Err(Error::FieldEmpty { field: "title" });
    }

    let status = match options.status {
        Some(status) => status,
        None => config.board()?.initial_column().id.clone(),
    };

    let mut new = NewItem::new(title, status);
    for (level, parent) in [
        (CascadeLevel::Story, options.story),
        (CascadeLevel::Feature, options.feature),
        (CascadeLevel::Epic, options.epic),
    ] {
        let Some(parent) = parent else { continue };
        if options.kind.parent_level() != Some(level) {
            return Err(Error::InvalidParent {
                kind: options.kind.to_string(),
                parent: level.to_string(),
            });
        }
        new = new.with_parent(level, parent);
    }
    if let Some(sprint) = options.sprint {
        new = new.with_sprint(sprint);
    }
    if let Some(priority) = options.priority {
        new = new.with_priority(priority);
    }
    if let Some(type_id) = options.type_id {
        new = new.with_type(type_id);
    }
    if let Some(assignee) = options.assignee {
        new = new.with_assignee(assignee);
    }

    let item = db.create(options.kind, new).await?;
    tracing::info!(id = %item.id, kind = %item.kind, status = %item.status, "created");
    Ok(item)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
