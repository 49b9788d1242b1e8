use clap::Subcommand;
use studyquest_core::{stats, Config};

use super::{open_store, print_json, resolve_id, CliResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show session history
    List {
        /// Subject name to filter by
        #[arg(long)]
        subject: Option<String>,
        /// Number of sessions (7-30)
        #[arg(long, default_value = "7")]
        range: usize,
    },
    /// Record a finished study session
    Log {
        /// Subject name or id prefix
        #[arg(long)]
        subject: String,
        /// Technique name or id prefix
        #[arg(long)]
        technique: String,
        /// Duration in minutes
        #[arg(long, default_value = "25")]
        minutes: u64,
        #[arg(long, default_value = "60")]
        xp: u32,
        #[arg(long, default_value = "12")]
        coins: u32,
    },
}

pub fn run(config: &Config, action: SessionAction) -> CliResult {
    let mut store = open_store(config)?;

    match action {
        SessionAction::List { subject, range } => {
            let snapshot = store.snapshot();
            let subject_id = match subject {
                Some(name) => Some(
                    snapshot
                        .subjects
                        .iter()
                        .find(|s| s.name.eq_ignore_ascii_case(&name))
                        .map(|s| s.id)
                        .ok_or_else(|| format!("unknown subject: {name}"))?,
                ),
                None => None,
            };
            print_json(&stats::session_history(snapshot, subject_id, range))?;
        }
        SessionAction::Log {
            subject,
            technique,
            minutes,
            xp,
            coins,
        } => {
            let snapshot = store.snapshot();
            let subject_id = match snapshot.subjects.iter().find(|s| s.name.eq_ignore_ascii_case(&subject)) {
                Some(s) => s.id,
                None => resolve_id("subject", &subject, snapshot.subjects.iter().map(|s| s.id))?,
            };
            let technique_id = match snapshot
                .techniques
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(&technique))
            {
                Some(t) => t.id,
                None => resolve_id("technique", &technique, snapshot.techniques.iter().map(|t| t.id))?,
            };
            store.log_session(subject_id, technique_id, minutes.saturating_mul(60), xp, coins)?;
            print_json(&store.snapshot().last_session())?;
        }
    }
    Ok(())
}
