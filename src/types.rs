//! Core entity types.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned id, never reused.
    pub id: i64,
    /// User-supplied text, non-empty after trimming.
    pub description: String,
    /// Completion flag, flipped in place by the toggle operation.
    pub completed: bool,
    /// Creation time in epoch milliseconds, used only for sort order.
    pub created_at: i64,
}

impl Task {
    /// Map a row from `SELECT id, task, is_completed, created_at`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            completed: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}
