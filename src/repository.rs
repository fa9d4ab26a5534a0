use crate::db::schema::{self, TASK_COLUMNS};
use crate::db::{self, DbPath};
use crate::error::{Result, TaskError};
use crate::export;
use crate::models::{NewTask, Task};
use rusqlite::{OptionalExtension, Transaction};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Task storage operations.
///
/// Holds only the store location. Every operation opens its own connection,
/// runs one transaction and commits before returning.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    path: DbPath,
}

impl TaskRepository {
    pub fn new(path: DbPath) -> Self {
        TaskRepository { path }
    }

    pub fn path(&self) -> &DbPath {
        &self.path
    }

    /// Ensure the schema exists. Call once before any other operation.
    pub fn initialize(&self) -> Result<()> {
        self.with_tx(|tx| schema::initialize(tx))
    }

    /// Insert a task and return its store-assigned id.
    pub fn create(&self, new: &NewTask) -> Result<i64> {
        if new.title.is_empty() {
            return Err(TaskError::Validation("title must not be empty".into()));
        }

        self.with_tx(|tx| {
            tx.execute(
                "INSERT INTO tasks (title, description, due_date, completed)
                 VALUES (?1, ?2, ?3, 0)",
                (&new.title, &new.description, &new.due_date),
            )?;
            let id = tx.last_insert_rowid();
            tracing::debug!(id, "task created");
            Ok(id)
        })
    }

    /// All tasks: incomplete first, then by due date, then by id.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        self.with_tx(|tx| list_in(tx))
    }

    pub fn get(&self, id: i64) -> Result<Task> {
        self.with_tx(|tx| {
            tx.query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                [id],
                schema::task_from_row,
            )
            .optional()?
            .ok_or(TaskError::NotFound(id))
        })
    }

    /// Mark a task completed. Completing an already completed task is a no-op.
    pub fn mark_complete(&self, id: i64) -> Result<()> {
        self.with_tx(|tx| {
            let rows = tx.execute("UPDATE tasks SET completed = 1 WHERE id = ?1", [id])?;
            if rows == 0 {
                return Err(TaskError::NotFound(id));
            }
            tracing::debug!(id, "task marked complete");
            Ok(())
        })
    }

    /// Permanently remove a task.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.with_tx(|tx| {
            let rows = tx.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
            if rows == 0 {
                return Err(TaskError::NotFound(id));
            }
            tracing::debug!(id, "task deleted");
            Ok(())
        })
    }

    /// Write a CSV snapshot of `list_all` to `destination`.
    ///
    /// Returns the number of task rows written. On failure the destination
    /// may hold partial output.
    pub fn export<P: AsRef<Path>>(&self, destination: P) -> Result<usize> {
        let destination = destination.as_ref();
        let tasks = self.list_all()?;

        let io_err = |source| TaskError::Io {
            path: destination.to_path_buf(),
            source,
        };
        let file = File::create(destination).map_err(io_err)?;
        export::write_csv(&tasks, BufWriter::new(file)).map_err(io_err)?;

        tracing::debug!(rows = tasks.len(), path = %destination.display(), "tasks exported");
        Ok(tasks.len())
    }

    /// Run `f` inside a transaction on a fresh connection.
    ///
    /// Commits on `Ok`. On `Err` the transaction rolls back when dropped, and
    /// the connection is closed on every path.
    fn with_tx<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction) -> Result<T>,
    {
        let mut conn = db::open(&self.path)?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

fn list_in(tx: &Transaction) -> Result<Vec<Task>> {
    let mut stmt = tx.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks ORDER BY completed, due_date, id"
    ))?;
    let tasks = stmt.query_map([], schema::task_from_row)?;
    tasks
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| e.into())
}
