//! CSV rendering of task snapshots.

use crate::models::Task;
use serde::Serialize;
use std::io::Write;

/// Default export destination, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "tasks_export.csv";

pub const HEADER: [&str; 5] = ["ID", "Title", "Description", "Due Date", "Completed"];

#[derive(Serialize)]
struct ExportRow<'a> {
    id: i64,
    title: &'a str,
    description: &'a str,
    due_date: &'a str,
    completed: &'static str,
}

impl<'a> From<&'a Task> for ExportRow<'a> {
    fn from(task: &'a Task) -> Self {
        ExportRow {
            id: task.id,
            title: &task.title,
            description: task.description.as_deref().unwrap_or_default(),
            due_date: task.due_date.as_deref().unwrap_or_default(),
            completed: task.completed_label(),
        }
    }
}

/// Write `tasks` as CSV to `out`, header first, in the order given.
///
/// The header is always written, even for an empty slice.
pub fn write_csv<W: Write>(tasks: &[Task], out: W) -> std::io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(HEADER)?;
    for task in tasks {
        writer.serialize(ExportRow::from(task))?;
    }
    writer.flush()?;
    Ok(())
}
