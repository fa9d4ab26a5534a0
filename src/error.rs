use std::path::PathBuf;
use thiserror::Error;

/// All errors surfaced by the task store
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid task: {0}")]
    Validation(String),

    #[error("Task #{0} not found")]
    NotFound(i64),

    #[error("Task store unavailable")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("Cannot write export to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot render tasks as JSON")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// `NotFound` is a soft failure: the caller decides whether to surface it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
