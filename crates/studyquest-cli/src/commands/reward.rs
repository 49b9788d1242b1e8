use clap::Subcommand;
use studyquest_core::Config;

use super::{open_store, print_json, resolve_id, CliResult};

#[derive(Subcommand)]
pub enum RewardAction {
    /// List custom rewards
    List,
    /// Define a new reward
    Add {
        /// Reward title
        title: String,
        /// Icon shown next to the title
        #[arg(long, default_value = "⭐️")]
        icon: String,
        /// Minutes of study the reward is meant for
        #[arg(long, default_value = "60")]
        minutes: u32,
        /// XP granted when claimed; coins are a fifth of this
        #[arg(long, default_value = "80")]
        xp: u32,
    },
    /// Claim a reward
    Claim {
        /// Reward ID or prefix
        id: String,
    },
}

pub fn run(config: &Config, action: RewardAction) -> CliResult {
    let mut store = open_store(config)?;

    match action {
        RewardAction::List => print_json(&store.snapshot().custom_rewards)?,
        RewardAction::Add {
            title,
            icon,
            minutes,
            xp,
        } => {
            let id = store.add_custom_reward(&title, &icon, minutes, xp)?;
            let reward = store.snapshot().custom_rewards.iter().find(|r| r.id == id);
            print_json(&reward)?;
        }
        RewardAction::Claim { id } => {
            let ids: Vec<_> = store.snapshot().custom_rewards.iter().map(|r| r.id).collect();
            let id = resolve_id("reward", &id, ids)?;
            store.claim_reward(id)?;
            print_json(store.profile())?;
        }
    }
    Ok(())
}
