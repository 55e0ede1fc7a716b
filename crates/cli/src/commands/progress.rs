// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::progress::aggregate;
use lanes_core::{DataAccess, Database, EntityKind, FilterSet, ItemFilter, Progress};

use super::{open_db, open_session};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_progress, ConsoleNotifier};
use crate::error::Result;

pub async fn run(kind: EntityKind, sprint: Option<&str>, output: OutputFormat) -> Result<()> {
    let (db, config, _work_dir) = open_db()?;
    let progress = run_impl(&db, &config, kind, sprint).await?;

    match output {
        OutputFormat::Text | OutputFormat::Id => println!("{}", format_progress(&progress)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&progress)?),
    }
    Ok(())
}

pub(crate) async fn run_impl(
    db: &Database,
    config: &Config,
    kind: EntityKind,
    sprint: Option<&str>,
) -> Result<Progress> {
    match sprint {
        Some(sprint_id) => {
            let items = db.list(kind, &ItemFilter::in_sprint(sprint_id)).await?;
            Ok(aggregate(&items, &config.board()?))
        }
        None => {
            let session = open_session(db, config, kind, ConsoleNotifier).await?;
            Ok(session.progress(&FilterSet::default()))
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
