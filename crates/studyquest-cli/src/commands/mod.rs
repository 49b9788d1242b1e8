use std::sync::Arc;

use studyquest_core::{Config, JsonFileStore, Store, SystemClock};
use uuid::Uuid;

pub mod config;
pub mod pomodoro;
pub mod profile;
pub mod quest;
pub mod reward;
pub mod session;
pub mod task;
pub mod theme;
pub mod timer;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Construct the one engine instance for this invocation.
pub fn open_store(config: &Config) -> Result<Store, Box<dyn std::error::Error>> {
    let gateway = JsonFileStore::from_config(config)?;
    tracing::debug!(path = %gateway.path().display(), "opening state document");
    Ok(Store::open(gateway, Arc::new(SystemClock)))
}

/// Resolve a full id or a unique id prefix against `ids`.
pub fn resolve_id(
    kind: &str,
    needle: &str,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    if let Ok(id) = Uuid::parse_str(needle) {
        return Ok(id);
    }
    let needle = needle.to_ascii_lowercase();
    let matches: Vec<Uuid> = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no {kind} matches '{needle}'").into()),
        _ => Err(format!("'{needle}' matches {} {kind}s, use a longer prefix", matches.len()).into()),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
