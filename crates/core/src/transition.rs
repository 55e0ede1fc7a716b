// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-and-drop moves between board columns.
//!
//! A [`BoardSession`] holds the in-memory item collection for one entity
//! kind. Moves update that collection optimistically, persist the changed
//! fields, then run the cascade. A failed write is reported once through
//! the notifier and rolled back; it is never retried.
//!
//! Every mutating operation takes `&mut self`, so moves on one session are
//! serialized and no locking is needed around the collection.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::cascade::{CascadeEngine, CascadeMode, CompletedParent};
use crate::error::{Error, Result};
use crate::item::{EntityKind, ItemPatch, WorkItem};
use crate::notify::{Notification, Notifier};
use crate::progress::{aggregate, column_counts, ColumnCount, Progress};
use crate::resolve::{bucket, Buckets, FilterSet};
use crate::store::{DataAccess, ItemFilter};

/// How a failed write is undone in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RollbackStrategy {
    /// Reload the whole collection from the store.
    #[default]
    Resync,
    /// Restore only the moved item from its pre-move copy.
    Snapshot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    #[serde(default)]
    pub cascade: CascadeMode,
    #[serde(default)]
    pub rollback: RollbackStrategy,
}

/// One drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub item_id: String,
    pub source_column: String,
    pub dest_column: String,
    /// Position within the source column, if the gesture reports one.
    pub source_index: Option<usize>,
    /// Position within the destination column, if the gesture reports one.
    pub dest_index: Option<usize>,
}

impl MoveRequest {
    pub fn new(
        item_id: impl Into<String>,
        source_column: impl Into<String>,
        dest_column: impl Into<String>,
    ) -> Self {
        MoveRequest {
            item_id: item_id.into(),
            source_column: source_column.into(),
            dest_column: dest_column.into(),
            source_index: None,
            dest_index: None,
        }
    }

    /// Sets the within-column positions (builder pattern).
    pub fn at(mut self, source_index: usize, dest_index: usize) -> Self {
        self.source_index = Some(source_index);
        self.dest_index = Some(dest_index);
        self
    }

    fn same_column(&self) -> bool {
        self.source_column == self.dest_column
    }

    fn index_changed(&self) -> bool {
        matches!(self.dest_index, Some(dest) if Some(dest) != self.source_index)
    }
}

/// What a move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Same column, same position.
    Unchanged,
    /// Same column, new position. Nothing was persisted.
    Reordered,
    Moved {
        status: String,
        assigned_to: Option<String>,
        completed_parents: Vec<CompletedParent>,
    },
    /// The write failed and in-memory state was rolled back.
    Reverted { error: String },
}

/// Board state for one entity kind plus the collaborators moves go through.
pub struct BoardSession<S, N> {
    board: Board,
    kind: EntityKind,
    items: Vec<WorkItem>,
    store: S,
    notifier: N,
    options: EngineOptions,
}

impl<S: DataAccess, N: Notifier> BoardSession<S, N> {
    /// Loads every item of `kind` from the store.
    pub async fn load(
        board: Board,
        kind: EntityKind,
        store: S,
        notifier: N,
        options: EngineOptions,
    ) -> Result<Self> {
        let items = store.list(kind, &ItemFilter::all()).await?;
        debug!(board = board.id(), %kind, count = items.len(), "loaded board session");
        Ok(BoardSession {
            board,
            kind,
            items,
            store,
            notifier,
            options,
        })
    }

    /// Replaces the in-memory collection with the store's current contents.
    pub async fn reload(&mut self) -> Result<()> {
        self.items = self.store.list(self.kind, &ItemFilter::all()).await?;
        Ok(())
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn buckets(&self, filters: &FilterSet) -> Buckets {
        bucket(&self.items, &self.board, filters)
    }

    /// Completion over the items visible under `filters`.
    pub fn progress(&self, filters: &FilterSet) -> Progress {
        let visible: Vec<WorkItem> = self
            .items
            .iter()
            .filter(|i| filters.matches(i))
            .cloned()
            .collect();
        aggregate(&visible, &self.board)
    }

    pub fn column_counts(&self, filters: &FilterSet) -> Vec<ColumnCount> {
        column_counts(&self.buckets(filters))
    }

    /// Applies one drag gesture.
    ///
    /// `actor` is the acting user's email. An unassigned item moved by a
    /// known actor is assigned to them; a blank email counts as unknown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`] or [`Error::ColumnNotFound`] for a
    /// gesture that names something this session does not hold. Store
    /// failures are reported as [`MoveOutcome::Reverted`] instead.
    pub async fn apply_move(&mut self, request: &MoveRequest, actor: Option<&str>) -> Result<MoveOutcome> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == request.item_id)
            .ok_or_else(|| Error::ItemNotFound(request.item_id.clone()))?;
        let dest = self
            .board
            .column(&request.dest_column)
            .ok_or_else(|| Error::ColumnNotFound(request.dest_column.clone()))?;
        let (dest_id, dest_name) = (dest.id.clone(), dest.name.clone());

        if request.same_column() {
            if !request.index_changed() {
                debug!(item = %request.item_id, column = %dest_id, "move is a no-op");
                return Ok(MoveOutcome::Unchanged);
            }
            self.reorder(pos, &dest_id, request.dest_index.unwrap_or_default());
            debug!(item = %request.item_id, column = %dest_id, "reordered within column");
            return Ok(MoveOutcome::Reordered);
        }

        let snapshot = self.items[pos].clone();
        let mut patch = ItemPatch::status(dest_id.clone());
        if snapshot.assigned_to_email.is_none() {
            patch.assigned_to_email = actor
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string);
        }

        self.items[pos].apply_patch(&patch);

        if let Err(e) = self.store.update(self.kind, &snapshot.id, &patch).await {
            warn!(item = %snapshot.id, column = %dest_id, error = %e, "move failed, rolling back");
            self.notifier.notify(Notification::error(format!(
                "could not move {} to {}: {e}",
                snapshot.id, dest_name
            )));
            self.roll_back(snapshot).await;
            return Ok(MoveOutcome::Reverted {
                error: e.to_string(),
            });
        }

        let moved = self.items[pos].clone();
        let completed = CascadeEngine::new(&self.store)
            .with_terminal_statuses(self.board.final_column_ids())
            .cascade_from(&moved, self.options.cascade)
            .await;

        info!(item = %moved.id, from = %request.source_column, to = %dest_id, "moved");
        self.notifier
            .notify(Notification::info(format!("moved {} to {}", moved.id, dest_name)));
        for parent in &completed {
            self.notifier.notify(Notification::info(format!(
                "{} {} completed",
                parent.level, parent.id
            )));
        }

        Ok(MoveOutcome::Moved {
            status: moved.status,
            assigned_to: patch.assigned_to_email,
            completed_parents: completed,
        })
    }

    /// Moves the item at `pos` to `index` among the items of `column_id`.
    fn reorder(&mut self, pos: usize, column_id: &str, index: usize) {
        let item = self.items.remove(pos);
        let members: Vec<usize> = match self.board.column(column_id) {
            Some(column) => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, i)| column.accepts(&i.status))
                .map(|(n, _)| n)
                .collect(),
            None => Vec::new(),
        };
        let at = match (members.get(index), members.last()) {
            (Some(&n), _) => n,
            (None, Some(&last)) => last + 1,
            (None, None) => pos,
        };
        self.items.insert(at.min(self.items.len()), item);
    }

    async fn roll_back(&mut self, snapshot: WorkItem) {
        if self.options.rollback == RollbackStrategy::Resync {
            match self.reload().await {
                Ok(()) => return,
                Err(e) => warn!(error = %e, "resync failed, restoring snapshot"),
            }
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == snapshot.id) {
            *item = snapshot;
        }
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
