//! Read-only aggregates over the snapshot for presentation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{StudySession, UserProfile};
use crate::storage::Snapshot;

/// XP needed per level.
pub const XP_PER_LEVEL: u32 = 1000;

/// Session history window bounds, in entries.
pub const HISTORY_RANGE: (usize, usize) = (7, 30);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    /// 0.0 .. 1.0 within the current level.
    pub progress: f64,
    pub xp_to_next_level: u32,
}

impl LevelProgress {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let within = profile.xp % XP_PER_LEVEL;
        Self {
            level: profile.xp / XP_PER_LEVEL + 1,
            progress: f64::from(within) / f64::from(XP_PER_LEVEL),
            xp_to_next_level: XP_PER_LEVEL - within,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectMinutes {
    pub subject_id: Uuid,
    pub name: String,
    pub minutes: u64,
}

/// The most recent `range` sessions for `subject` (all when `None`), in
/// log order. `range` is clamped to [`HISTORY_RANGE`].
pub fn session_history(
    snapshot: &Snapshot,
    subject: Option<Uuid>,
    range: usize,
) -> Vec<&StudySession> {
    let range = range.clamp(HISTORY_RANGE.0, HISTORY_RANGE.1);
    let mut recent: Vec<&StudySession> = snapshot
        .sessions
        .iter()
        .rev()
        .filter(|s| subject.map_or(true, |id| s.subject.id == id))
        .take(range)
        .collect();
    recent.reverse();
    recent
}

pub fn total_minutes(snapshot: &Snapshot) -> u64 {
    snapshot.sessions.iter().map(StudySession::duration_min).sum()
}

/// Minutes studied per subject, in subject-list order. Subjects with no
/// sessions report zero.
pub fn minutes_by_subject(snapshot: &Snapshot) -> Vec<SubjectMinutes> {
    let mut totals: BTreeMap<Uuid, u64> = BTreeMap::new();
    for session in &snapshot.sessions {
        *totals.entry(session.subject.id).or_default() += session.duration_min();
    }
    snapshot
        .subjects
        .iter()
        .map(|s| SubjectMinutes {
            subject_id: s.id,
            name: s.name.clone(),
            minutes: totals.get(&s.id).copied().unwrap_or(0),
        })
        .collect()
}
