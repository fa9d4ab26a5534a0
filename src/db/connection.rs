use crate::error::Result;
use rusqlite::Connection;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default store file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "tasks.db";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Location of the task store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbPath {
    path: PathBuf,
}

impl DbPath {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Check if the store file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for DbPath {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }
}

impl fmt::Display for DbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Open a fresh connection to the store, creating the file if needed.
pub fn open(path: &DbPath) -> Result<Connection> {
    let conn = Connection::open(path.as_path())?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    tracing::trace!(path = %path, "opened store connection");
    Ok(conn)
}
