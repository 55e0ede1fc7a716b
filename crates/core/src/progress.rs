// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion counts derived from in-memory items. No I/O.

use serde::Serialize;

use crate::board::Board;
use crate::item::WorkItem;
use crate::resolve::Buckets;

/// Completed and total counts for a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`, or 0 when there are no items.
    pub percentage: u8,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Progress {
            completed,
            total,
            percentage,
        }
    }

    /// Items not yet completed (burndown input).
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Counts items whose resolved column is final.
pub fn aggregate(items: &[WorkItem], board: &Board) -> Progress {
    let completed = items.iter().filter(|i| board.is_completed(&i.status)).count();
    Progress::new(completed, items.len())
}

/// Item count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub column_id: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,
}

impl ColumnCount {
    /// Advisory only.
    pub fn over_limit(&self) -> bool {
        self.wip_limit.is_some_and(|limit| self.count > limit as usize)
    }
}

pub fn column_counts(buckets: &Buckets) -> Vec<ColumnCount> {
    buckets
        .iter()
        .map(|b| ColumnCount {
            column_id: b.column.id.clone(),
            count: b.items.len(),
            wip_limit: b.column.wip_limit,
        })
        .collect()
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
