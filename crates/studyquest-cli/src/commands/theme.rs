use clap::Subcommand;
use serde::Serialize;
use studyquest_core::{Config, Snapshot};
use uuid::Uuid;

use super::{open_store, print_json, resolve_id, CliResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// List store listings
    List,
    /// Buy a theme with coins
    Unlock {
        /// Theme name, store item ID or prefix
        theme: String,
    },
    /// Use an unlocked theme
    Apply {
        /// Theme name, theme ID or prefix
        theme: String,
    },
}

#[derive(Serialize)]
struct Listing<'a> {
    item_id: Uuid,
    theme_id: Uuid,
    name: &'a str,
    price: u32,
    unlocked: bool,
    applied: bool,
}

fn theme_by_name(snapshot: &Snapshot, name: &str) -> Option<Uuid> {
    snapshot
        .themes
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .map(|t| t.id)
}

pub fn run(config: &Config, action: ThemeAction) -> CliResult {
    let mut store = open_store(config)?;

    match action {
        ThemeAction::List => {
            let snapshot = store.snapshot();
            let listings: Vec<_> = snapshot
                .theme_store
                .iter()
                .map(|item| Listing {
                    item_id: item.id,
                    theme_id: item.theme.id,
                    name: &item.theme.name,
                    price: item.price,
                    unlocked: item.unlocked,
                    applied: snapshot.profile.preferred_theme_id == Some(item.theme.id),
                })
                .collect();
            print_json(&listings)?;
        }
        ThemeAction::Unlock { theme } => {
            let snapshot = store.snapshot();
            let by_name = theme_by_name(snapshot, &theme)
                .and_then(|id| snapshot.theme_store.iter().find(|i| i.theme.id == id))
                .map(|i| i.id);
            let item_id = match by_name {
                Some(id) => id,
                None => resolve_id("store item", &theme, snapshot.theme_store.iter().map(|i| i.id))?,
            };
            store.unlock_theme(item_id)?;
            print_json(store.profile())?;
        }
        ThemeAction::Apply { theme } => {
            let snapshot = store.snapshot();
            let theme_id = match theme_by_name(snapshot, &theme) {
                Some(id) => id,
                None => resolve_id("theme", &theme, snapshot.themes.iter().map(|t| t.id))?,
            };
            store.apply_theme(theme_id)?;
            print_json(store.profile())?;
        }
    }
    Ok(())
}
