// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item types shared by tasks, stories, features, and epics.
//!
//! The engine treats all four entity kinds through one [`WorkItem`] shape.
//! Hierarchy edges (task -> story -> feature -> epic) are nullable references
//! and are never enforced referentially.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The four levels of the work hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Smallest unit of work; belongs to a story.
    Task,
    /// User-facing slice of work; belongs to a feature.
    Story,
    /// Group of stories; belongs to an epic.
    Feature,
    /// Top-level initiative.
    Epic,
}

impl EntityKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::Story => "story",
            EntityKind::Feature => "feature",
            EntityKind::Epic => "epic",
        }
    }

    /// Fixed completion token written when an item of this kind is completed
    /// by the cascade.
    pub fn terminal_status(&self) -> &'static str {
        match self {
            EntityKind::Task | EntityKind::Story => "done",
            EntityKind::Feature | EntityKind::Epic => "completed",
        }
    }

    /// The cascade level that owns items of this kind, if any.
    pub fn parent_level(&self) -> Option<CascadeLevel> {
        match self {
            EntityKind::Task => Some(CascadeLevel::Story),
            EntityKind::Story => Some(CascadeLevel::Feature),
            EntityKind::Feature => Some(CascadeLevel::Epic),
            EntityKind::Epic => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "task" => Ok(EntityKind::Task),
            "story" => Ok(EntityKind::Story),
            "feature" => Ok(EntityKind::Feature),
            "epic" => Ok(EntityKind::Epic),
            _ => Err(Error::InvalidEntityKind(s.to_string())),
        }
    }
}

/// A parent level checked by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeLevel {
    /// A story completes when all of its tasks are done.
    Story,
    /// A feature completes when all of its stories are done.
    Feature,
    /// An epic completes when all of its features are done.
    Epic,
}

impl CascadeLevel {
    pub fn as_str(&self) -> &'static str {
        self.parent_kind().as_str()
    }

    /// Kind of the item being completed at this level.
    pub fn parent_kind(&self) -> EntityKind {
        match self {
            CascadeLevel::Story => EntityKind::Story,
            CascadeLevel::Feature => EntityKind::Feature,
            CascadeLevel::Epic => EntityKind::Epic,
        }
    }

    /// Kind of the children inspected at this level.
    pub fn child_kind(&self) -> EntityKind {
        match self {
            CascadeLevel::Story => EntityKind::Task,
            CascadeLevel::Feature => EntityKind::Story,
            CascadeLevel::Epic => EntityKind::Feature,
        }
    }
}

impl fmt::Display for CascadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CascadeLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "story" => Ok(CascadeLevel::Story),
            "feature" => Ok(CascadeLevel::Feature),
            "epic" => Ok(CascadeLevel::Epic),
            _ => Err(Error::InvalidEntityKind(s.to_string())),
        }
    }
}

/// The primary entity moved across board columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier (format: `{kind}-{hash}`).
    pub id: String,
    /// Level in the work hierarchy.
    pub kind: EntityKind,
    /// Short description of the work.
    pub title: String,
    /// Raw status value: a column id or a legacy free-form token.
    pub status: String,
    /// Owning story (tasks only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<String>,
    /// Owning feature (stories only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    /// Owning epic (features only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Project-specific item type (bug, improvement, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates an item with no hierarchy, sprint, or assignment.
    pub fn new(
        id: String,
        kind: EntityKind,
        title: String,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        WorkItem {
            id,
            kind,
            title,
            status,
            story_id: None,
            feature_id: None,
            epic_id: None,
            sprint_id: None,
            assigned_to_email: None,
            priority: None,
            type_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Builds a stored item from creation fields.
    pub fn from_new(id: String, kind: EntityKind, new: NewItem, created_at: DateTime<Utc>) -> Self {
        WorkItem {
            id,
            kind,
            title: new.title,
            status: new.status,
            story_id: new.story_id,
            feature_id: new.feature_id,
            epic_id: new.epic_id,
            sprint_id: new.sprint_id,
            assigned_to_email: new.assigned_to_email,
            priority: new.priority,
            type_id: new.type_id,
            created_at,
            updated_at: created_at,
        }
    }

    /// The parent this item rolls up into, read from the reference that
    /// matches its kind. Other references are ignored.
    pub fn parent(&self) -> Option<(CascadeLevel, &str)> {
        let level = self.kind.parent_level()?;
        let id = match level {
            CascadeLevel::Story => self.story_id.as_deref(),
            CascadeLevel::Feature => self.feature_id.as_deref(),
            CascadeLevel::Epic => self.epic_id.as_deref(),
        }?;
        Some((level, id))
    }

    /// Applies the changed fields of a patch.
    pub fn apply_patch(&mut self, patch: &ItemPatch) {
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
        if let Some(email) = &patch.assigned_to_email {
            self.assigned_to_email = Some(email.clone());
        }
    }
}

/// Fields for creating a work item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub status: String,
    pub story_id: Option<String>,
    pub feature_id: Option<String>,
    pub epic_id: Option<String>,
    pub sprint_id: Option<String>,
    pub assigned_to_email: Option<String>,
    pub priority: Option<String>,
    pub type_id: Option<String>,
}

impl NewItem {
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        NewItem {
            title: title.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    /// Sets the parent reference for the given level (builder pattern).
    pub fn with_parent(mut self, level: CascadeLevel, id: impl Into<String>) -> Self {
        let id = Some(id.into());
        match level {
            CascadeLevel::Story => self.story_id = id,
            CascadeLevel::Feature => self.feature_id = id,
            CascadeLevel::Epic => self.epic_id = id,
        }
        self
    }

    pub fn with_sprint(mut self, sprint_id: impl Into<String>) -> Self {
        self.sprint_id = Some(sprint_id.into());
        self
    }

    pub fn with_assignee(mut self, email: impl Into<String>) -> Self {
        self.assigned_to_email = Some(email.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_type(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = Some(type_id.into());
        self
    }
}

/// Changed fields sent to the data-access collaborator on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_email: Option<String>,
}

impl ItemPatch {
    pub fn status(status: impl Into<String>) -> Self {
        ItemPatch {
            status: Some(status.into()),
            assigned_to_email: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to_email.is_none()
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
