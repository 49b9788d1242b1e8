use clap::Subcommand;
use studyquest_core::{Config, PomodoroConfiguration};

use super::{open_store, print_json, CliResult};

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Print the current cadence
    Show,
    /// Change one or more fields
    Set {
        /// Focus minutes (5-90)
        #[arg(long)]
        focus: Option<u32>,
        /// Short break minutes (3-30)
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break minutes (10-60)
        #[arg(long)]
        long_break: Option<u32>,
        /// Rounds before a long break (2-8)
        #[arg(long)]
        rounds: Option<u32>,
    },
}

pub fn run(config: &Config, action: PomodoroAction) -> CliResult {
    let mut store = open_store(config)?;

    match action {
        PomodoroAction::Show => print_json(&store.snapshot().pomodoro_configuration)?,
        PomodoroAction::Set {
            focus,
            short_break,
            long_break,
            rounds,
        } => {
            let current = store.snapshot().pomodoro_configuration;
            let updated = PomodoroConfiguration {
                focus_minutes: focus.unwrap_or(current.focus_minutes),
                short_break_minutes: short_break.unwrap_or(current.short_break_minutes),
                long_break_minutes: long_break.unwrap_or(current.long_break_minutes),
                rounds_before_long_break: rounds.unwrap_or(current.rounds_before_long_break),
            };
            store.update_pomodoro(updated)?;
            print_json(&store.snapshot().pomodoro_configuration)?;
        }
    }
    Ok(())
}
