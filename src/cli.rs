use crate::db::{DEFAULT_DB_FILE, DbPath};
use crate::export::DEFAULT_EXPORT_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "Personal task tracker")]
#[command(version)]
pub struct Cli {
    /// Path to the task store
    #[arg(long, global = true, env = "TASKMAN_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn db_path(&self) -> DbPath {
        DbPath::new(&self.db)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the task store if it does not exist
    Init,

    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Optional description
        #[arg(long)]
        desc: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// List tasks, open ones first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a task as complete
    Done {
        /// Task ID
        id: i64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },

    /// Export all tasks to CSV
    Export {
        /// Destination file
        #[arg(default_value = DEFAULT_EXPORT_FILE)]
        path: PathBuf,
    },

    /// Interactive menu
    Menu,
}
