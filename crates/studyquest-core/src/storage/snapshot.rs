use serde::{Deserialize, Serialize};

use crate::model::{
    Badge, CustomReward, PomodoroConfiguration, Quest, StudySession, Subject, Task, Technique,
    Theme, ThemeStoreItem, UserProfile,
};

/// The complete aggregate of engine state, mirrored to disk as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub profile: UserProfile,
    pub tasks: Vec<Task>,
    pub quests: Vec<Quest>,
    pub custom_rewards: Vec<CustomReward>,
    pub sessions: Vec<StudySession>,
    pub badges: Vec<Badge>,
    pub subjects: Vec<Subject>,
    pub techniques: Vec<Technique>,
    pub themes: Vec<Theme>,
    pub theme_store: Vec<ThemeStoreItem>,
    pub pomodoro_configuration: PomodoroConfiguration,
}

impl Snapshot {
    /// No records, zeroed profile, default pomodoro cadence.
    pub fn empty() -> Self {
        Self {
            profile: UserProfile::default(),
            tasks: Vec::new(),
            quests: Vec::new(),
            custom_rewards: Vec::new(),
            sessions: Vec::new(),
            badges: Vec::new(),
            subjects: Vec::new(),
            techniques: Vec::new(),
            themes: Vec::new(),
            theme_store: Vec::new(),
            pomodoro_configuration: PomodoroConfiguration::default(),
        }
    }

    pub fn last_session(&self) -> Option<&StudySession> {
        self.sessions.last()
    }

    pub fn preferred_theme(&self) -> Option<&Theme> {
        let id = self.profile.preferred_theme_id?;
        self.themes.iter().find(|t| t.id == id)
    }

    /// Bring store listings in line with the theme list.
    ///
    /// A theme counts as unlocked if either record says so. Afterwards every
    /// listing mirrors its theme's flag and embedded copy. Listings whose
    /// theme is gone keep their own flag.
    pub fn reconcile_theme_unlocks(&mut self) {
        for item in self.theme_store.iter().filter(|i| i.unlocked) {
            if let Some(theme) = self.themes.iter_mut().find(|t| t.id == item.theme.id) {
                theme.unlocked = true;
            }
        }
        for item in &mut self.theme_store {
            if let Some(theme) = self.themes.iter().find(|t| t.id == item.theme.id) {
                item.unlocked = theme.unlocked;
                item.theme = theme.clone();
            }
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
