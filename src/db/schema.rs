//! Table definitions for the task store.

use crate::error::Result;
use rusqlite::{Connection, Row};

use crate::models::Task;

/// Columns in persisted order; row parsing below relies on it.
pub const TASK_COLUMNS: &str = "id, title, description, due_date, completed";

/// Ensure the `tasks` table and its ordering index exist.
///
/// Idempotent: existing tables and rows are left untouched.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (length(title) > 0),
            description TEXT,
            due_date TEXT,
            completed INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1))
        );
        CREATE INDEX IF NOT EXISTS idx_tasks_order ON tasks(completed, due_date);",
    )?;
    tracing::debug!("task schema ensured");
    Ok(())
}

pub fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        completed: row.get::<_, i64>(4)? != 0,
    })
}
