// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::board::{Board, BoardConfig, Column};
use crate::error::{Error, Result};
use crate::item::{CascadeLevel, EntityKind, ItemPatch, NewItem, WorkItem};
use crate::store::{DataAccess, ItemFilter, MemoryStore};

/// backlog (initial) -> em_progresso -> concluido (final)
pub fn default_board() -> Board {
    Board::new(BoardConfig {
        id: "board-1".into(),
        name: "Sprint board".into(),
        project_id: Some("proj-1".into()),
        columns: vec![
            Column::new("backlog", "Backlog", 0).initial(),
            Column::new("em_progresso", "Em Progresso", 1),
            Column::new("concluido", "Concluído", 2).final_(),
        ],
    })
    .unwrap()
}

pub fn task(id: &str, status: &str) -> WorkItem {
    WorkItem::new(
        id.into(),
        EntityKind::Task,
        format!("Task {id}"),
        status.into(),
        Utc::now(),
    )
}

pub fn item(kind: EntityKind, id: &str, status: &str, parent: Option<&str>) -> WorkItem {
    let mut item = WorkItem::new(id.into(), kind, format!("{kind} {id}"), status.into(), Utc::now());
    if let (Some(level), Some(parent)) = (kind.parent_level(), parent) {
        match level {
            CascadeLevel::Story => item.story_id = Some(parent.into()),
            CascadeLevel::Feature => item.feature_id = Some(parent.into()),
            CascadeLevel::Epic => item.epic_id = Some(parent.into()),
        }
    }
    item
}

/// A [`MemoryStore`] whose calls can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_updates: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
    updates: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        FlakyStore {
            inner,
            ..Default::default()
        }
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of update calls that reached the store, failed or not.
    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Store("read refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DataAccess for FlakyStore {
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        self.check_reads()?;
        self.inner.list(kind, filter).await
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        self.check_reads()?;
        self.inner.get(kind, id).await
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(Error::Store("write refused".into()));
        }
        self.inner.update(kind, id, patch).await
    }

    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        self.inner.create(kind, new).await
    }
}
