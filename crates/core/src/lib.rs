// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lanes-core: workflow board engine
//!
//! Maps free-form item statuses onto configurable board columns, applies
//! drag-and-drop moves with rollback, cascades completion up the
//! task -> story -> feature -> epic hierarchy, and derives progress counts.
//! Persistence is delegated to a [`DataAccess`] collaborator.

pub mod board;
pub mod cascade;
pub mod db;
pub mod error;
pub mod id;
pub mod item;
pub mod notify;
pub mod progress;
pub mod resolve;
pub mod status;
pub mod store;
pub mod transition;

#[cfg(test)]
mod test_support;

pub use board::{Board, BoardConfig, Column};
pub use cascade::{CascadeEngine, CascadeMode, CompletedParent};
pub use db::Database;
pub use error::{Error, Result};
pub use item::{CascadeLevel, EntityKind, ItemPatch, NewItem, WorkItem};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier};
pub use progress::{ColumnCount, Progress};
pub use resolve::{Buckets, FilterSet, SprintFilter};
pub use status::CanonicalStatus;
pub use store::{DataAccess, ItemFilter, MemoryStore};
pub use transition::{BoardSession, EngineOptions, MoveOutcome, MoveRequest, RollbackStrategy};
