//! Terminal rendering of task lists.

use crate::models::Task;
use chrono::NaiveDate;
use std::fmt::Write;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const RULE_WIDTH: usize = 80;

/// Parse a `YYYY-MM-DD` due date, if it is one.
pub fn parse_due_date(due: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due, DATE_FORMAT).ok()
}

/// Due dates are stored verbatim; odd ones only get a warning.
pub fn warn_on_odd_due_date(due: &str) {
    if !due.is_empty() && parse_due_date(due).is_none() {
        tracing::warn!(due, "due date is not YYYY-MM-DD; it will sort by raw text");
    }
}

/// An incomplete task whose due date has passed.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed
        && task
            .due_date
            .as_deref()
            .and_then(parse_due_date)
            .is_some_and(|due| due < today)
}

/// Format one task as a table row.
pub fn format_row(task: &Task, today: NaiveDate) -> String {
    let mut row = format!(
        "{:<3} | {:<20} | {:<30} | {:<10} | {}",
        task.id,
        task.title,
        task.description.as_deref().unwrap_or(""),
        task.due_date.as_deref().unwrap_or(""),
        task.icon(),
    );
    if is_overdue(task, today) {
        row.push_str(" (overdue)");
    }
    row
}

/// Format the full task table, header included.
pub fn format_table(tasks: &[Task], today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} | {:<20} | {:<30} | {:<10} | Done",
        "ID", "Title", "Description", "Due Date"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    if tasks.is_empty() {
        let _ = writeln!(out, "(no tasks)");
    }
    for task in tasks {
        let _ = writeln!(out, "{}", format_row(task, today));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn task(due: Option<&str>, completed: bool) -> Task {
        Task {
            id: 3,
            title: "Dinner".to_string(),
            description: Some("Salmon".to_string()),
            due_date: due.map(str::to_string),
            completed,
        }
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2025-06-15"),
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(parse_due_date("15/6/2025"), None);
        assert_eq!(parse_due_date("2025-02-30"), None);
    }

    #[test]
    fn test_is_overdue() {
        assert!(is_overdue(&task(Some("2025-05-31"), false), today()));
        assert!(!is_overdue(&task(Some("2025-06-01"), false), today()));
        assert!(!is_overdue(&task(Some("2025-05-31"), true), today()));
        assert!(!is_overdue(&task(Some("soon"), false), today()));
        assert!(!is_overdue(&task(None, false), today()));
    }

    #[test]
    fn test_format_row() {
        let row = format_row(&task(Some("2025-06-15"), false), today());
        assert!(row.starts_with("3   | Dinner "));
        assert!(row.contains("| 2025-06-15 |"));
        assert!(row.ends_with("✘"));

        let row = format_row(&task(Some("2025-01-01"), false), today());
        assert!(row.ends_with("✘ (overdue)"));
    }

    #[test]
    fn test_format_table_empty() {
        let table = format_table(&[], today());
        assert!(table.starts_with("ID  | Title"));
        assert!(table.contains("(no tasks)"));
    }

    #[test]
    fn test_format_table_rows() {
        let table = format_table(&[task(None, true)], today());
        assert_eq!(table.lines().count(), 3);
        assert!(table.lines().last().unwrap().ends_with("✔"));
    }
}
