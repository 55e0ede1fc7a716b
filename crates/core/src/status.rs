// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status normalization.
//!
//! Status values come from several eras of data: free-text legacy values,
//! English tokens, Portuguese tokens, and column ids. [`matches`] decides
//! whether a raw status belongs to a given column, first match wins:
//!
//! 1. empty status never matches
//! 2. exact equality with the column id
//! 3. equality of the normalized status and normalized column name
//! 4. both sides fall in the same [`CanonicalStatus`] alias group
//!
//! An unmapped status matches no column. That gap is visible on the board
//! and is not an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Workflow stage that legacy status tokens are recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    Backlog,
    Todo,
    InProgress,
    /// Waiting on something external, including blocked work.
    Waiting,
    Review,
    Testing,
    Done,
}

impl CanonicalStatus {
    pub const ALL: [CanonicalStatus; 7] = [
        CanonicalStatus::Backlog,
        CanonicalStatus::Todo,
        CanonicalStatus::InProgress,
        CanonicalStatus::Waiting,
        CanonicalStatus::Review,
        CanonicalStatus::Testing,
        CanonicalStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalStatus::Backlog => "backlog",
            CanonicalStatus::Todo => "todo",
            CanonicalStatus::InProgress => "in_progress",
            CanonicalStatus::Waiting => "waiting",
            CanonicalStatus::Review => "review",
            CanonicalStatus::Testing => "testing",
            CanonicalStatus::Done => "done",
        }
    }

    /// Recognized tokens for this stage, in normalized form.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalStatus::Backlog => &["backlog", "product_backlog", "icebox"],
            CanonicalStatus::Todo => &[
                "todo", "to_do", "a_fazer", "pendente", "pending", "open", "novo",
            ],
            CanonicalStatus::InProgress => &[
                "in_progress",
                "em_progresso",
                "doing",
                "em_desenvolvimento",
                "em_andamento",
                "wip",
                "in_development",
                "fazendo",
            ],
            CanonicalStatus::Waiting => &[
                "waiting",
                "blocked",
                "on_hold",
                "aguardando",
                "bloqueado",
                "impedido",
                "em_espera",
            ],
            CanonicalStatus::Review => &[
                "review",
                "in_review",
                "code_review",
                "revisao",
                "em_revisao",
            ],
            CanonicalStatus::Testing => &[
                "testing",
                "qa",
                "teste",
                "em_teste",
                "testando",
                "homologacao",
            ],
            CanonicalStatus::Done => &[
                "done",
                "completed",
                "complete",
                "concluido",
                "finalizado",
                "feito",
                "closed",
                "resolved",
            ],
        }
    }

    /// Looks up the stage for an already-normalized token.
    pub fn from_normalized(token: &str) -> Option<CanonicalStatus> {
        Self::ALL
            .into_iter()
            .find(|canonical| canonical.aliases().contains(&token))
    }

    /// Normalizes a raw token and looks up its stage.
    pub fn recognize(raw: &str) -> Option<CanonicalStatus> {
        Self::from_normalized(&normalize(raw))
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercases, strips diacritics, turns whitespace runs and hyphens into
/// underscores.
///
/// `"Em Progresso"` and `"em-progresso"` both become `"em_progresso"`;
/// `"Concluído"` becomes `"concluido"`.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut out = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.push(if c == '-' { '_' } else { c });
    }
    out
}

/// Decides whether a raw status value belongs to a column.
pub fn matches(status: &str, column_id: &str, column_name: &str) -> bool {
    if status.trim().is_empty() {
        return false;
    }
    if status == column_id {
        return true;
    }

    let status = normalize(status);
    let column = normalize(column_name);
    if status == column {
        return true;
    }

    CanonicalStatus::from_normalized(&status)
        .is_some_and(|canonical| canonical.aliases().contains(&column.as_str()))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
