//! Task management commands for CLI.

use clap::Subcommand;
use studyquest_core::{Config, Store};
use uuid::Uuid;

use super::{open_store, print_json, resolve_id, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks
    List {
        /// Only incomplete tasks
        #[arg(long)]
        open: bool,
    },
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Subject name or id prefix
        #[arg(long)]
        subject: String,
        /// Expected minutes of work
        #[arg(long, default_value = "25")]
        minutes: u32,
    },
    /// Flip a task's completed flag
    Toggle {
        /// Task ID or prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID or prefix
        id: String,
    },
}

fn task_ids(store: &Store) -> Vec<Uuid> {
    store.snapshot().tasks.iter().map(|t| t.id).collect()
}

pub fn run(config: &Config, action: TaskAction) -> CliResult {
    let mut store = open_store(config)?;
    match action {
        TaskAction::List { open } => {
            let tasks: Vec<_> = store
                .snapshot()
                .tasks
                .iter()
                .filter(|t| !open || !t.completed)
                .collect();
            print_json(&tasks)?;
        }
        TaskAction::Add {
            title,
            subject,
            minutes,
        } => {
            let subjects = &store.snapshot().subjects;
            let subject_id = match subjects.iter().find(|s| s.name.eq_ignore_ascii_case(&subject)) {
                Some(s) => s.id,
                None => resolve_id("subject", &subject, subjects.iter().map(|s| s.id))?,
            };
            let id = store.add_task(&title, subject_id, minutes)?;
            let task = store.snapshot().tasks.iter().find(|t| t.id == id);
            print_json(&task)?;
        }
        TaskAction::Toggle { id } => {
            let id = resolve_id("task", &id, task_ids(&store))?;
            let completed = store.toggle_task(id)?;
            print_json(&serde_json::json!({
                "id": id,
                "completed": completed,
                "xp": store.profile().xp,
                "coins": store.profile().coins,
            }))?;
        }
        TaskAction::Delete { id } => {
            let id = resolve_id("task", &id, task_ids(&store))?;
            store.delete_task(id)?;
            print_json(&serde_json::json!({ "deleted": id }))?;
        }
    }
    Ok(())
}
