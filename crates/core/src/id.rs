// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item identifier generation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::item::EntityKind;

/// Generate an item ID from kind, title, and timestamp.
/// Format: {kind}-{hash} where hash is first 8 hex chars of SHA256(title + timestamp)
pub fn generate_id(kind: EntityKind, title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    format!("{}-{}", kind.as_str(), hex::encode(&hash[..4]))
}

/// Generate a unique ID, appending an incrementing suffix on collision.
pub fn generate_unique_id<F>(
    kind: EntityKind,
    title: &str,
    created_at: &DateTime<Utc>,
    mut exists: F,
) -> String
where
    F: FnMut(&str) -> bool,
{
    let base_id = generate_id(kind, title, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
