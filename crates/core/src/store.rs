// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The data-access collaborator the engine persists through.
//!
//! The engine never stores anything itself. It assumes per-call consistency
//! (a `list` after an `update` sees that update) and nothing more: no
//! isolation across calls.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::item::{CascadeLevel, EntityKind, ItemPatch, NewItem, WorkItem};

/// Query filter for [`DataAccess::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Only items whose reference at this level equals the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<(CascadeLevel, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
}

impl ItemFilter {
    /// Everything.
    pub fn all() -> Self {
        ItemFilter::default()
    }

    /// Direct children of a parent at the given level.
    pub fn children_of(level: CascadeLevel, parent_id: impl Into<String>) -> Self {
        ItemFilter {
            parent: Some((level, parent_id.into())),
            sprint_id: None,
        }
    }

    pub fn in_sprint(sprint_id: impl Into<String>) -> Self {
        ItemFilter {
            parent: None,
            sprint_id: Some(sprint_id.into()),
        }
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        if let Some((level, id)) = &self.parent {
            let reference = match level {
                CascadeLevel::Story => &item.story_id,
                CascadeLevel::Feature => &item.feature_id,
                CascadeLevel::Epic => &item.epic_id,
            };
            if reference.as_ref() != Some(id) {
                return false;
            }
        }
        match &self.sprint_id {
            Some(sprint) => item.sprint_id.as_ref() == Some(sprint),
            None => true,
        }
    }
}

/// Persistence operations the engine drives.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Items of one kind passing the filter, in creation order.
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>>;

    /// One item by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`] if no item of that kind has the id.
    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem>;

    /// Writes only the fields set in the patch.
    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()>;

    /// Stores a new item and returns it with its generated id.
    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem>;
}

#[async_trait]
impl<T: DataAccess + ?Sized> DataAccess for Arc<T> {
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        (**self).list(kind, filter).await
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        (**self).get(kind, id).await
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        (**self).update(kind, id, patch).await
    }

    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        (**self).create(kind, new).await
    }
}

#[async_trait]
impl<T: DataAccess + ?Sized> DataAccess for &T {
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        (**self).list(kind, filter).await
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        (**self).get(kind, id).await
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        (**self).update(kind, id, patch).await
    }

    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        (**self).create(kind, new).await
    }
}

/// In-process store keyed by kind and id.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    items: HashMap<(EntityKind, String), WorkItem>,
    /// Insertion order, so `list` is stable.
    order: Vec<(EntityKind, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an item as-is, bypassing id generation.
    pub async fn insert(&self, item: WorkItem) {
        let mut inner = self.inner.lock().await;
        let key = (item.kind, item.id.clone());
        if inner.items.insert(key.clone(), item).is_none() {
            inner.order.push(key);
        }
    }
}

#[async_trait]
impl DataAccess for MemoryStore {
    async fn list(&self, kind: EntityKind, filter: &ItemFilter) -> Result<Vec<WorkItem>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .order
            .iter()
            .filter(|(k, _)| *k == kind)
            .filter_map(|key| inner.items.get(key))
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<WorkItem> {
        let inner = self.inner.lock().await;
        inner
            .items
            .get(&(kind, id.to_string()))
            .cloned()
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: &ItemPatch) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let item = inner
            .items
            .get_mut(&(kind, id.to_string()))
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;
        item.apply_patch(patch);
        item.updated_at = Utc::now();
        Ok(())
    }

    async fn create(&self, kind: EntityKind, new: NewItem) -> Result<WorkItem> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        let id = generate_unique_id(kind, &new.title, &now, |candidate| {
            inner.items.contains_key(&(kind, candidate.to_string()))
        });
        let item = WorkItem::from_new(id.clone(), kind, new, now);
        inner.items.insert((kind, id.clone()), item.clone());
        inner.order.push((kind, id));
        Ok(item)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
