use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub xp: u32,
    pub coins: u32,
    pub current_streak: u32,
    /// Never below `current_streak` once a streak update ran.
    pub longest_streak: u32,
    #[serde(rename = "preferredThemeID")]
    pub preferred_theme_id: Option<Uuid>,
    pub focus_mode_enabled: bool,
}

impl UserProfile {
    pub fn streak_headline(&self) -> String {
        format!("{}-day streak", self.current_streak)
    }
}
