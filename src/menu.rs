//! Interactive numbered menu over any line-based input.

use crate::error::TaskError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::models::NewTask;
use crate::output;
use crate::repository::TaskRepository;
use chrono::Local;
use std::io::{BufRead, Write};

const MENU: &str = "
===== Task Manager =====
1. Add Task
2. View Tasks
3. Mark Task as Complete
4. Delete Task
5. Export to CSV
6. Exit";

/// Run the menu until the user exits or input ends.
///
/// Validation and not-found failures are reported inline and the loop
/// continues; storage failures end the session.
pub fn run<R: BufRead, W: Write>(
    repo: &TaskRepository,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "Choose an option: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add(repo, &mut input, &mut out),
            "2" => view(repo, &mut out),
            "3" => with_id(
                &mut input,
                &mut out,
                "Enter task ID to mark as complete: ",
                |id| {
                    repo.mark_complete(id)
                        .map(|()| "Task marked as complete!".to_string())
                },
            ),
            "4" => with_id(&mut input, &mut out, "Enter task ID to delete: ", |id| {
                repo.delete(id).map(|()| "Task deleted!".to_string())
            }),
            "5" => repo
                .export(DEFAULT_EXPORT_FILE)
                .map(|n| Some(format!("Exported {n} task(s) to {DEFAULT_EXPORT_FILE}")))
                .map_err(anyhow::Error::from),
            "6" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => Ok(Some("Invalid choice, please try again.".to_string())),
        };

        match result {
            Ok(Some(message)) => writeln!(out, "{message}")?,
            Ok(None) => break,
            Err(err) => match err.downcast_ref::<TaskError>() {
                Some(TaskError::NotFound(_) | TaskError::Validation(_) | TaskError::Io { .. }) => {
                    writeln!(out, "{err:#}")?
                }
                _ => return Err(err),
            },
        }
    }
    Ok(())
}

/// Read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add<R: BufRead, W: Write>(
    repo: &TaskRepository,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<String>> {
    let Some(title) = prompt(input, out, "Enter title: ")? else {
        return Ok(None);
    };
    let Some(description) = prompt(input, out, "Enter description: ")? else {
        return Ok(None);
    };
    let Some(due_date) = prompt(input, out, "Enter due date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    output::warn_on_odd_due_date(&due_date);

    let new = NewTask {
        title,
        description: Some(description).filter(|d| !d.is_empty()),
        due_date: Some(due_date).filter(|d| !d.is_empty()),
    };
    let id = repo.create(&new)?;
    Ok(Some(format!("Task #{id} added!")))
}

fn view<W: Write>(repo: &TaskRepository, out: &mut W) -> anyhow::Result<Option<String>> {
    let tasks = repo.list_all()?;
    write!(out, "{}", output::format_table(&tasks, Local::now().date_naive()))?;
    Ok(Some(String::new()))
}

fn with_id<R, W, F>(
    input: &mut R,
    out: &mut W,
    label: &str,
    action: F,
) -> anyhow::Result<Option<String>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(i64) -> Result<String, TaskError>,
{
    let Some(raw) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(action(id)?)),
        Err(_) => Ok(Some(format!("Invalid task ID: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbPath;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup() -> (TaskRepository, TempDir) {
        let temp = TempDir::new().unwrap();
        let repo = TaskRepository::new(DbPath::new(temp.path().join("tasks.db")));
        repo.initialize().unwrap();
        (repo, temp)
    }

    fn session(repo: &TaskRepository, script: &str) -> String {
        let mut out = Vec::new();
        run(repo, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_view() {
        let (repo, _temp) = setup();

        let out = session(&repo, "1\nDinner\nSalmon\n2025-06-15\n2\n6\n");

        assert!(out.contains("Task #1 added!"));
        assert!(out.contains("Dinner"));
        assert!(out.contains("Goodbye!"));

        let tasks = repo.list_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description.as_deref(), Some("Salmon"));
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let (repo, _temp) = setup();

        session(&repo, "1\nLaundry\n\n\n6\n");

        let task = &repo.list_all().unwrap()[0];
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_odd_due_date_kept_verbatim() {
        let (repo, _temp) = setup();

        let out = session(&repo, "1\nDinner\n\n15/6/2025\n6\n");

        assert!(out.contains("Task #1 added!"));
        let task = &repo.list_all().unwrap()[0];
        assert_eq!(task.due_date.as_deref(), Some("15/6/2025"));
    }

    #[test]
    fn test_empty_title_reported_and_loop_continues() {
        let (repo, _temp) = setup();

        let out = session(&repo, "1\n\n\n\n6\n");

        assert!(out.contains("title must not be empty"));
        assert!(out.contains("Goodbye!"));
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_complete_and_delete() {
        let (repo, _temp) = setup();
        let id = repo.create(&NewTask::new("Task")).unwrap();

        let out = session(&repo, &format!("3\n{id}\n"));
        assert!(out.contains("Task marked as complete!"));
        assert!(repo.get(id).unwrap().completed);

        let out = session(&repo, &format!("4\n{id}\n"));
        assert!(out.contains("Task deleted!"));
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_reported() {
        let (repo, _temp) = setup();

        let out = session(&repo, "3\n99\n4\n99\n6\n");
        assert_eq!(out.matches("Task #99 not found").count(), 2);
    }

    #[test]
    fn test_bad_id_and_bad_choice() {
        let (repo, _temp) = setup();

        let out = session(&repo, "3\nabc\n9\n6\n");
        assert!(out.contains("Invalid task ID: abc"));
        assert!(out.contains("Invalid choice, please try again."));
    }

    #[test]
    fn test_eof_ends_session() {
        let (repo, _temp) = setup();

        let out = session(&repo, "1\nHalf");
        assert!(!out.contains("Goodbye!"));
        assert!(repo.list_all().unwrap().is_empty());
    }
}
