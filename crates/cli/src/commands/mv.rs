// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `lanes move`: the command-line form of dragging a card.

use lanes_core::{Database, EntityKind, FilterSet, MoveOutcome, MoveRequest, Notifier};

use super::{open_db, open_session};
use crate::config::Config;
use crate::display::ConsoleNotifier;
use crate::error::{Error, Result};
use crate::identity::acting_user;

pub async fn run(id: &str, column: &str, index: Option<usize>, kind: EntityKind) -> Result<()> {
    let (db, config, _work_dir) = open_db()?;
    let actor = acting_user(&config);

    let outcome = run_impl(
        &db,
        &config,
        ConsoleNotifier,
        id,
        column,
        index,
        kind,
        actor.as_deref(),
    )
    .await?;

    match outcome {
        MoveOutcome::Unchanged => println!("{} is already in {}", id, column),
        MoveOutcome::Reordered => println!("Reordered {} within {}", id, column),
        MoveOutcome::Moved { assigned_to, .. } => {
            if let Some(email) = assigned_to {
                println!("Assigned {} to {}", id, email);
            }
        }
        MoveOutcome::Reverted { error } => {
            return Err(Error::MoveReverted {
                id: id.to_string(),
                reason: error,
            });
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_impl<N: Notifier>(
    db: &Database,
    config: &Config,
    notifier: N,
    id: &str,
    column: &str,
    index: Option<usize>,
    kind: EntityKind,
    actor: Option<&str>,
) -> Result<MoveOutcome> {
    let mut session = open_session(db, config, kind, notifier).await?;

    if session.board().column(column).is_none() {
        let available: Vec<&str> = session
            .board()
            .columns()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        return Err(Error::ColumnNotFound {
            column: column.to_string(),
            available: available.join(", "),
        });
    }

    let item = session
        .items()
        .iter()
        .find(|i| i.id == id)
        .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

    // Items whose status matches no column are moved out of their raw status.
    let source_column = session
        .board()
        .resolve(&item.status)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| item.status.clone());
    let source_index = session
        .buckets(&FilterSet::default())
        .get(&source_column)
        .and_then(|items| items.iter().position(|i| i.id == id));

    let request = MoveRequest {
        item_id: id.to_string(),
        source_column,
        dest_column: column.to_string(),
        source_index,
        dest_index: index,
    };
    Ok(session.apply_move(&request, actor).await?)
}

#[cfg(test)]
#[path = "mv_tests.rs"]
mod tests;
