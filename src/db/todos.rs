//! Task CRUD operations.
//!
//! Every operation is a single parameterized statement; there are no
//! multi-statement transactions. Operations on ids that match no row are
//! silent no-ops, not errors.

use super::{Database, now_ms};
use crate::types::Task;
use anyhow::Result;
use rusqlite::{OptionalExtension, params};

impl Database {
    /// Insert a new task with `completed = false`.
    ///
    /// The caller is responsible for trimming and rejecting empty text;
    /// this method stores whatever it is given.
    pub fn create_task(&self, description: &str) -> Result<Task> {
        self.with_conn(|conn| {
            let created_at = now_ms();
            conn.execute(
                "INSERT INTO todos (task, is_completed, created_at) VALUES (?1, 0, ?2)",
                params![description, created_at],
            )?;

            Ok(Task {
                id: conn.last_insert_rowid(),
                description: description.to_string(),
                completed: false,
                created_at,
            })
        })
    }

    /// Remove the task with the given id.
    ///
    /// Returns whether a row was actually deleted.
    pub fn delete_task(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }

    /// Fetch the completion flag for the given id, `None` if absent.
    pub fn get_completed(&self, id: i64) -> Result<Option<bool>> {
        self.with_conn(|conn| {
            let completed = conn
                .query_row(
                    "SELECT is_completed FROM todos WHERE id = ?1",
                    params![id],
                    |row| row.get::<_, bool>(0),
                )
                .optional()?;
            Ok(completed)
        })
    }

    /// Set the completion flag for the given id; no-op if absent.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE todos SET is_completed = ?1 WHERE id = ?2",
                params![completed, id],
            )?;
            Ok(())
        })
    }

    /// List all tasks: incomplete first, newest first within each group.
    ///
    /// `id DESC` breaks same-millisecond creation ties so the order stays
    /// deterministic.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, task, is_completed, created_at FROM todos
                 ORDER BY is_completed ASC, created_at DESC, id DESC",
            )?;

            let tasks = stmt
                .query_map([], Task::from_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(tasks)
        })
    }
}
