// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument groups shared by several commands.

use clap::Args;
use lanes_core::{EntityKind, FilterSet, SprintFilter};

/// Which entity kind a board view holds.
#[derive(Args, Clone, Debug)]
pub struct KindArg {
    /// Item kind shown on the board (task, story, feature, epic)
    #[arg(long, short = 'k', default_value = "task")]
    pub kind: EntityKind,
}

/// Board filters. Active filters are combined with AND.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive title substring
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    #[arg(long, short)]
    pub priority: Option<String>,

    /// Project-specific item type
    #[arg(long = "type", short = 't')]
    pub type_id: Option<String>,

    /// Exact assignee email
    #[arg(long, short)]
    pub assignee: Option<String>,

    /// Sprint id, or "all"
    #[arg(long, default_value = "all")]
    pub sprint: SprintFilter,

    /// Owning story (tasks only)
    #[arg(long)]
    pub story: Option<String>,
}

impl FilterArgs {
    pub fn into_filter_set(self) -> FilterSet {
        FilterSet {
            search: self.search,
            priority: self.priority,
            type_id: self.type_id,
            assignee: self.assignee,
            sprint: self.sprint,
            story_id: self.story,
        }
    }
}
