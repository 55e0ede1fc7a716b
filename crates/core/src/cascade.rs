// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upward completion through the task -> story -> feature -> epic hierarchy.
//!
//! Children are always loaded fresh from the data-access collaborator. Two
//! moves can land close together, so a decision made from an in-memory
//! snapshot could already be stale.
//!
//! "Done" is judged on a fixed vocabulary, never on board columns: the
//! child kind's terminal token, any token in the `Done` synonym group, or
//! one of the extra terminal statuses registered on the engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::item::{CascadeLevel, ItemPatch, WorkItem};
use crate::status::CanonicalStatus;
use crate::store::{DataAccess, ItemFilter};

/// How far one cascade call climbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadeMode {
    /// Keep checking the next level after each completion, up to the epic.
    #[default]
    Chained,
    /// Check the immediate parent only; callers repeat the check upward.
    SingleLevel,
}

/// A parent the cascade just marked terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedParent {
    pub level: CascadeLevel,
    pub id: String,
}

/// Checks parents and completes them once all their children are done.
pub struct CascadeEngine<'a, S: ?Sized> {
    store: &'a S,
    extra_terminal: Vec<String>,
}

impl<'a, S: DataAccess + ?Sized> CascadeEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        CascadeEngine {
            store,
            extra_terminal: Vec::new(),
        }
    }

    /// Additional status values that count as done (e.g. final column ids).
    ///
    /// This deliberately widens the fixed terminal vocabulary so a child
    /// dragged into a final column whose id is not a terminal token still
    /// counts as done.
    pub fn with_terminal_statuses<I, T>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.extra_terminal.extend(statuses.into_iter().map(Into::into));
        self
    }

    pub fn is_done(&self, child: &WorkItem) -> bool {
        child.status == child.kind.terminal_status()
            || CanonicalStatus::recognize(&child.status) == Some(CanonicalStatus::Done)
            || self.extra_terminal.iter().any(|s| *s == child.status)
    }

    /// Completes the parent if every direct child is done.
    ///
    /// Returns true only if the parent was marked terminal by this call. A
    /// parent with no children is never completed.
    pub async fn maybe_complete_parent(&self, parent_id: &str, level: CascadeLevel) -> Result<bool> {
        Ok(self.complete_parent(parent_id, level).await?.is_some())
    }

    /// Cascades upward from an item that just changed.
    ///
    /// Failures are logged and end the climb; they never reach the caller.
    pub async fn cascade_from(&self, item: &WorkItem, mode: CascadeMode) -> Vec<CompletedParent> {
        let mut completed = Vec::new();
        let mut next = item.parent().map(|(level, id)| (level, id.to_string()));

        while let Some((level, parent_id)) = next.take() {
            match self.complete_parent(&parent_id, level).await {
                Ok(Some(parent)) => {
                    completed.push(CompletedParent {
                        level,
                        id: parent_id,
                    });
                    if mode == CascadeMode::Chained {
                        next = parent.parent().map(|(level, id)| (level, id.to_string()));
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(parent = %parent_id, %level, error = %e, "cascade check failed");
                }
            }
        }
        completed
    }

    async fn complete_parent(&self, parent_id: &str, level: CascadeLevel) -> Result<Option<WorkItem>> {
        let children = self
            .store
            .list(level.child_kind(), &ItemFilter::children_of(level, parent_id))
            .await?;

        if children.is_empty() {
            debug!(parent = %parent_id, %level, "no children, nothing to complete");
            return Ok(None);
        }

        let pending = children.iter().filter(|c| !self.is_done(c)).count();
        if pending > 0 {
            debug!(parent = %parent_id, %level, pending, "children still open");
            return Ok(None);
        }

        let mut parent = self.store.get(level.parent_kind(), parent_id).await?;
        let terminal = level.parent_kind().terminal_status();
        if parent.status == terminal {
            debug!(parent = %parent_id, %level, "already terminal");
            return Ok(None);
        }

        let patch = ItemPatch::status(terminal);
        self.store
            .update(level.parent_kind(), parent_id, &patch)
            .await?;
        parent.apply_patch(&patch);

        info!(parent = %parent_id, %level, children = children.len(), "auto-completed");
        Ok(Some(parent))
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
