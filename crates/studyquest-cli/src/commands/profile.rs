use clap::ValueEnum;
use serde::Serialize;
use studyquest_core::stats::{self, LevelProgress, SubjectMinutes};
use studyquest_core::{Config, UserProfile};

use super::{open_store, print_json, CliResult};

#[derive(Serialize)]
struct Status<'a> {
    profile: &'a UserProfile,
    level: LevelProgress,
    streak_headline: &'a str,
    total_minutes: u64,
    minutes_by_subject: Vec<SubjectMinutes>,
    preferred_theme: Option<&'a str>,
}

pub fn status(config: &Config) -> CliResult {
    let store = open_store(config)?;
    let snapshot = store.snapshot();
    print_json(&Status {
        profile: &snapshot.profile,
        level: LevelProgress::for_profile(&snapshot.profile),
        streak_headline: store.streak_headline(),
        total_minutes: stats::total_minutes(snapshot),
        minutes_by_subject: stats::minutes_by_subject(snapshot),
        preferred_theme: snapshot.preferred_theme().map(|t| t.name.as_str()),
    })
}

pub fn streak(config: &Config) -> CliResult {
    let mut store = open_store(config)?;
    store.update_streak();
    print_json(&serde_json::json!({
        "current_streak": store.profile().current_streak,
        "longest_streak": store.profile().longest_streak,
        "headline": store.streak_headline(),
    }))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

pub fn focus_mode(config: &Config, state: Toggle) -> CliResult {
    let mut store = open_store(config)?;
    store.set_focus_mode(matches!(state, Toggle::On));
    print_json(store.profile())
}
