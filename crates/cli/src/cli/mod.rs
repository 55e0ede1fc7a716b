// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use lanes_core::EntityKind;

pub use args::{FilterArgs, KindArg};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

#[derive(Parser)]
#[command(name = "lanes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A workflow board for tasks, stories, features, and epics")]
#[command(
    long_about = "A workflow board for tasks, stories, features, and epics.\n\n\
    Items are bucketed into configurable columns. Moving the last open task of a story \
    into a final column completes the story, and completion cascades up to the epic."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a board in the current directory
    #[command(after_help = "\
Examples:
  lanes init                      Create .lanes/ with the default board
  lanes init --name \"Web team\"    Name the board")]
    Init {
        /// Board display name
        #[arg(long, default_value = "Board")]
        name: String,

        /// Directory to initialize (default: current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Create a work item
    #[command(after_help = "\
Examples:
  lanes new epic \"Platform\"                      Create an epic
  lanes new story \"Checkout\" --feature <id>      Create a story under a feature
  lanes new task \"Form\" --story <id> -o id       Create a task, print only its id")]
    New {
        /// Item kind (task, story, feature, epic)
        kind: EntityKind,

        /// Item title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Initial status (default: the board's initial column)
        #[arg(long, short)]
        status: Option<String>,

        /// Owning story (tasks)
        #[arg(long)]
        story: Option<String>,

        /// Owning feature (stories)
        #[arg(long)]
        feature: Option<String>,

        /// Owning epic (features)
        #[arg(long)]
        epic: Option<String>,

        #[arg(long)]
        sprint: Option<String>,

        #[arg(long, short)]
        priority: Option<String>,

        /// Project-specific item type (bug, improvement, ...)
        #[arg(long = "type", short = 't')]
        type_id: Option<String>,

        /// Assignee email
        #[arg(long, short)]
        assignee: Option<String>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show items bucketed into board columns
    #[command(after_help = "\
Examples:
  lanes board                        All tasks by column
  lanes board --sprint s1            Tasks in sprint s1
  lanes board -q login -o json       Tasks whose title contains 'login', as JSON")]
    Board {
        #[command(flatten)]
        kind: KindArg,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Move an item to another column
    #[command(after_help = "\
Examples:
  lanes move <id> em_progresso        Start work (claims the item if unassigned)
  lanes move <id> concluido           Finish; may complete the parent story
  lanes move <id> backlog --index 0   Reorder within the current column")]
    Move {
        /// Item id
        id: String,

        /// Destination column id
        column: String,

        /// Position within the destination column
        #[arg(long)]
        index: Option<usize>,

        #[command(flatten)]
        kind: KindArg,
    },

    /// Show completion counts
    Progress {
        #[command(flatten)]
        kind: KindArg,

        /// Restrict to one sprint
        #[arg(long)]
        sprint: Option<String>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
