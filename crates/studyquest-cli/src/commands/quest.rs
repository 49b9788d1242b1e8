use clap::Subcommand;
use serde::Serialize;
use studyquest_core::{Config, Quest};

use super::{open_store, print_json, resolve_id, CliResult};

#[derive(Subcommand)]
pub enum QuestAction {
    /// List quests with their progress
    List,
    /// Claim a completed quest
    Claim {
        /// Quest ID or prefix
        id: String,
    },
}

#[derive(Serialize)]
struct QuestView<'a> {
    #[serde(flatten)]
    quest: &'a Quest,
    completed: bool,
    progress: f64,
}

pub fn run(config: &Config, action: QuestAction) -> CliResult {
    let mut store = open_store(config)?;

    match action {
        QuestAction::List => {
            let quests: Vec<_> = store
                .snapshot()
                .quests
                .iter()
                .map(|quest| QuestView {
                    quest,
                    completed: quest.is_completed(),
                    progress: quest.progress(),
                })
                .collect();
            print_json(&quests)?;
        }
        QuestAction::Claim { id } => {
            let ids: Vec<_> = store.snapshot().quests.iter().map(|q| q.id).collect();
            let id = resolve_id("quest", &id, ids)?;
            store.claim_quest(id)?;
            print_json(store.profile())?;
        }
    }
    Ok(())
}
