// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::{Buckets, ColumnCount, Database, EntityKind, FilterSet};

use super::{open_db, open_session};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_board, BoardView, ConsoleNotifier};
use crate::error::Result;

pub async fn run(kind: EntityKind, filters: FilterSet, output: OutputFormat) -> Result<()> {
    let (db, config, _work_dir) = open_db()?;
    let (buckets, counts) = run_impl(&db, &config, kind, &filters).await?;

    match output {
        OutputFormat::Text => println!("{}", format_board(&buckets, &counts)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&BoardView::new(&buckets, &counts))?)
        }
        OutputFormat::Id => {
            for bucket in buckets.iter() {
                for item in &bucket.items {
                    println!("{}", item.id);
                }
            }
        }
    }
    Ok(())
}

pub(crate) async fn run_impl(
    db: &Database,
    config: &Config,
    kind: EntityKind,
    filters: &FilterSet,
) -> Result<(Buckets, Vec<ColumnCount>)> {
    let session = open_session(db, config, kind, ConsoleNotifier).await?;
    let buckets = session.buckets(filters);
    let counts = session.column_counts(filters);
    Ok((buckets, counts))
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
