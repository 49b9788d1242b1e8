use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cosmetic color theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    pub id: Uuid,
    pub name: String,
    pub background: String,
    pub surface: String,
    pub primary: String,
    pub accent: String,
    pub glow: Option<String>,
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
    pub price: u32,
    pub unlocked: bool,
}

/// Purchasable listing for a theme.
///
/// `unlocked` and the embedded theme copy mirror the matching entry in the
/// theme list, which is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStoreItem {
    pub id: Uuid,
    pub theme: Theme,
    pub price: u32,
    pub unlocked: bool,
}

impl ThemeStoreItem {
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            id: Uuid::new_v4(),
            theme: theme.clone(),
            price: theme.price,
            unlocked: theme.unlocked,
        }
    }
}
