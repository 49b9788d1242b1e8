use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Subject, Technique};

/// One logged block of study. The session log is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub subject: Subject,
    pub technique: Technique,
    /// Length in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u64,
    pub date: DateTime<Utc>,
    #[serde(rename = "earnedXP")]
    pub earned_xp: u32,
    pub earned_coins: u32,
}

impl StudySession {
    pub fn duration_min(&self) -> u64 {
        self.duration_secs / 60
    }
}
