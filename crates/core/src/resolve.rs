// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Column resolution: partition work items into per-column buckets.
//!
//! Column membership comes from the status normalizer; the current
//! [`FilterSet`] is applied on top. All filter predicates are independent
//! and AND-combined.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::board::{Board, Column};
use crate::item::{EntityKind, WorkItem};

/// Sprint selection for a board view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintFilter {
    /// No sprint filtering.
    #[default]
    All,
    Sprint(String),
}

impl FromStr for SprintFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SprintFilter::All)
        } else {
            Ok(SprintFilter::Sprint(s.to_string()))
        }
    }
}

/// The filters currently applied to a board view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub type_id: Option<String>,
    /// Exact assignee email.
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub sprint: SprintFilter,
    /// Exact story id. Applies to tasks only.
    #[serde(default)]
    pub story_id: Option<String>,
}

impl FilterSet {
    /// Returns true if the item passes every active filter.
    pub fn matches(&self, item: &WorkItem) -> bool {
        if let SprintFilter::Sprint(sprint) = &self.sprint {
            if item.sprint_id.as_ref() != Some(sprint) {
                return false;
            }
        }

        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            if !item.title.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }

        equals(&self.priority, &item.priority)
            && equals(&self.type_id, &item.type_id)
            && equals(&self.assignee, &item.assigned_to_email)
            && (item.kind != EntityKind::Task || equals(&self.story_id, &item.story_id))
    }
}

/// An unset filter passes everything; a set filter needs an exact match.
fn equals(filter: &Option<String>, value: &Option<String>) -> bool {
    match filter {
        None => true,
        Some(expected) => value.as_ref() == Some(expected),
    }
}

/// Items resolved into one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnBucket {
    pub column: Column,
    pub items: Vec<WorkItem>,
}

/// Result of bucketing a set of items on a board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buckets {
    /// One bucket per column, in board order.
    pub columns: Vec<ColumnBucket>,
    /// Filtered items whose status matched no column.
    pub unmatched: Vec<WorkItem>,
}

impl Buckets {
    pub fn get(&self, column_id: &str) -> Option<&[WorkItem]> {
        self.columns
            .iter()
            .find(|b| b.column.id == column_id)
            .map(|b| b.items.as_slice())
    }

    /// Number of items placed in some column.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|b| b.items.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnBucket> {
        self.columns.iter()
    }
}

/// Partitions items into per-column buckets.
///
/// The bucketed total may be less than the item count when some statuses
/// match no column.
pub fn bucket(items: &[WorkItem], board: &Board, filters: &FilterSet) -> Buckets {
    let visible: Vec<&WorkItem> = items.iter().filter(|i| filters.matches(i)).collect();

    let columns = board
        .columns()
        .iter()
        .map(|column| ColumnBucket {
            column: column.clone(),
            items: visible
                .iter()
                .filter(|i| column.accepts(&i.status))
                .map(|i| (*i).clone())
                .collect(),
        })
        .collect();

    let unmatched = visible
        .iter()
        .filter(|i| board.resolve(&i.status).is_none())
        .map(|i| (*i).clone())
        .collect();

    Buckets { columns, unmatched }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
