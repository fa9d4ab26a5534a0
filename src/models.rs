use serde::{Deserialize, Serialize};

/// A task in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>, // YYYY-MM-DD by convention, never validated
    pub completed: bool,
}

impl Task {
    /// Human-readable completion token used by the CSV export
    pub fn completed_label(&self) -> &'static str {
        if self.completed { "Yes" } else { "No" }
    }

    pub fn icon(&self) -> &'static str {
        if self.completed { "✔" } else { "✘" }
    }
}

/// New task input
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        NewTask {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}
