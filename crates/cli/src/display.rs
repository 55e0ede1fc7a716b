// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lanes_core::{
    Buckets, ColumnCount, Notification, NotificationLevel, Notifier, Progress, WorkItem,
};
use serde::Serialize;

/// Maximum title width in board listings before truncation.
const TITLE_WIDTH: usize = 60;

/// Prints notifications as they arrive: info to stdout, errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => println!("{}", notification.message),
            NotificationLevel::Error => eprintln!("failed: {}", notification.message),
        }
    }
}

/// One column of the JSON board view.
#[derive(Debug, Serialize)]
pub struct ColumnView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,
    pub over_limit: bool,
    pub items: &'a [WorkItem],
}

#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub columns: Vec<ColumnView<'a>>,
    pub unmatched: &'a [WorkItem],
}

impl<'a> BoardView<'a> {
    pub fn new(buckets: &'a Buckets, counts: &[ColumnCount]) -> Self {
        let columns = buckets
            .iter()
            .zip(counts)
            .map(|(bucket, count)| ColumnView {
                id: &bucket.column.id,
                name: &bucket.column.name,
                count: count.count,
                wip_limit: count.wip_limit,
                over_limit: count.over_limit(),
                items: &bucket.items,
            })
            .collect();
        BoardView {
            columns,
            unmatched: &buckets.unmatched,
        }
    }
}

/// Truncate a title to `width` characters, marking the cut with "...".
pub fn truncate(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let kept: String = title.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Format an item as a single listing line.
///
/// Output format:
/// ```text
///   - task-a1b2c3d4: Fix login (ana@example.com)
/// ```
pub fn format_item_line(item: &WorkItem) -> String {
    let title = truncate(&item.title, TITLE_WIDTH);
    match &item.assigned_to_email {
        Some(email) => format!("  - {}: {} ({})", item.id, title, email),
        None => format!("  - {}: {}", item.id, title),
    }
}

/// Render the text board: a heading per column, then unmatched items.
pub fn format_board(buckets: &Buckets, counts: &[ColumnCount]) -> String {
    let mut lines = Vec::new();

    for (bucket, count) in buckets.iter().zip(counts) {
        let heading = match count.wip_limit {
            Some(limit) => format!("{} ({}/{})", bucket.column.name, count.count, limit),
            None => format!("{} ({})", bucket.column.name, count.count),
        };
        lines.push(heading);
        if count.over_limit() {
            lines.push(format!(
                "  warning: {} is over its WIP limit",
                bucket.column.id
            ));
        }
        lines.extend(bucket.items.iter().map(format_item_line));
        lines.push(String::new());
    }

    if !buckets.unmatched.is_empty() {
        lines.push(format!("No column ({})", buckets.unmatched.len()));
        for item in &buckets.unmatched {
            lines.push(format!("{} [{}]", format_item_line(item), item.status));
        }
        lines.push(String::new());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

pub fn format_progress(progress: &Progress) -> String {
    format!(
        "{}/{} completed ({}%), {} remaining",
        progress.completed,
        progress.total,
        progress.percentage,
        progress.remaining()
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
