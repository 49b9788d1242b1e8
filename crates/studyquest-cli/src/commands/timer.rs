use clap::Subcommand;
use studyquest_core::runtime;
use studyquest_core::{Config, Event, TimerMode};
use tokio::sync::broadcast::error::RecvError;

use super::{open_store, print_json, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a countdown in the foreground until it completes
    Run {
        /// standard (50 min) or pomodoro (configured focus length)
        #[arg(default_value = "standard")]
        mode: TimerMode,
        /// Also print every tick
        #[arg(long)]
        verbose: bool,
    },
    /// Print the remaining time a fresh run would start with
    Preview {
        #[arg(default_value = "standard")]
        mode: TimerMode,
    },
}

pub fn run(config: &Config, action: TimerAction) -> CliResult {
    match action {
        TimerAction::Run { mode, verbose } => {
            let store = open_store(config)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_foreground(store, config, mode, verbose))
        }
        TimerAction::Preview { mode } => {
            let store = open_store(config)?;
            let ms = mode.duration_ms(&store.snapshot().pomodoro_configuration);
            print_json(&serde_json::json!({
                "mode": mode,
                "duration_secs": ms / 1000,
            }))
        }
    }
}

async fn run_foreground(
    store: studyquest_core::Store,
    config: &Config,
    mode: TimerMode,
    verbose: bool,
) -> CliResult {
    let (handle, task) = runtime::spawn(store, config.tick_interval());
    let mut notifications = handle.subscribe();
    handle.start_timer(mode).await?;

    loop {
        match notifications.recv().await {
            Ok(note) => {
                let done = matches!(note.event, Event::TimerExpired { .. } | Event::TimerStopped { .. });
                if verbose || !matches!(note.event, Event::TimerTicked { .. }) {
                    println!("{}", serde_json::to_string(&note.event)?);
                }
                if done {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "dropped timer notifications");
            }
            Err(RecvError::Closed) => break,
        }
    }

    drop(handle);
    let store = task.await?;
    print_json(store.profile())
}
