// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient user notifications raised by board moves.

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Receives notifications from the presentation layer's point of view.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
