use crate::cli::{Cli, Commands};
use crate::error::TaskError;
use crate::menu;
use crate::models::NewTask;
use crate::output;
use crate::repository::TaskRepository;
use anyhow::Context;
use chrono::Local;
use std::io;
use std::path::Path;

/// Dispatch a parsed command line.
///
/// The schema is ensured before any command runs.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let repo = TaskRepository::new(cli.db_path());
    let existed = repo.path().exists();
    repo.initialize()
        .with_context(|| format!("cannot prepare task store at {}", repo.path()))?;

    match cli.command {
        Commands::Init => handle_init(&repo, existed)?,
        Commands::Add { title, desc, due } => {
            handle_add(&repo, &title, desc.as_deref(), due.as_deref())?
        }
        Commands::List { json } => handle_list(&repo, json)?,
        Commands::Done { id } => handle_done(&repo, id)?,
        Commands::Delete { id } => handle_delete(&repo, id)?,
        Commands::Export { path } => handle_export(&repo, &path)?,
        Commands::Menu => {
            let stdin = io::stdin();
            menu::run(&repo, stdin.lock(), io::stdout())?
        }
    }
    Ok(())
}

/// Handle the init command
pub fn handle_init(repo: &TaskRepository, existed: bool) -> Result<(), TaskError> {
    if existed {
        println!("Task store already present at {}", repo.path());
    } else {
        println!("Created task store at {}", repo.path());
    }
    Ok(())
}

/// Handle the add command
pub fn handle_add(
    repo: &TaskRepository,
    title: &str,
    desc: Option<&str>,
    due: Option<&str>,
) -> Result<(), TaskError> {
    if let Some(due) = due {
        output::warn_on_odd_due_date(due);
    }

    let new = NewTask {
        title: title.to_string(),
        description: desc.map(str::to_string),
        due_date: due.map(str::to_string),
    };
    let id = repo.create(&new)?;
    tracing::info!(id, "task added");

    println!("Created task #{id}: {title}");
    Ok(())
}

/// Handle the list command
pub fn handle_list(repo: &TaskRepository, json: bool) -> Result<(), TaskError> {
    let tasks = repo.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        print!("{}", output::format_table(&tasks, Local::now().date_naive()));
    }
    Ok(())
}

/// Handle the done command
pub fn handle_done(repo: &TaskRepository, id: i64) -> Result<(), TaskError> {
    repo.mark_complete(id).inspect_err(log_soft_failure)?;
    tracing::info!(id, "task completed");

    let task = repo.get(id)?;
    println!("Task #{id} marked as complete: {}", task.title);
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(repo: &TaskRepository, id: i64) -> Result<(), TaskError> {
    repo.delete(id).inspect_err(log_soft_failure)?;
    tracing::info!(id, "task deleted");
    println!("Deleted task #{id}");
    Ok(())
}

/// Handle the export command
pub fn handle_export(repo: &TaskRepository, path: &Path) -> Result<(), TaskError> {
    let count = repo.export(path)?;
    tracing::info!(count, path = %path.display(), "tasks exported");
    println!("Exported {count} task(s) to {}", path.display());
    Ok(())
}

fn log_soft_failure(err: &TaskError) {
    if err.is_not_found() {
        tracing::warn!("{err}");
    }
}
