use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Subject;

/// A to-do item tied to a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub subject: Subject,
    pub expected_minutes: u32,
    pub completed: bool,
    /// Fixed at creation, see [`Task::reward_for`].
    #[serde(rename = "rewardXP")]
    pub reward_xp: u32,
}

impl Task {
    /// New incomplete task with its reward derived from the estimate.
    pub fn new(title: impl Into<String>, subject: Subject, expected_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subject,
            expected_minutes,
            completed: false,
            reward_xp: Self::reward_for(expected_minutes),
        }
    }

    /// 10 XP per whole 5 minutes of expected work.
    pub fn reward_for(expected_minutes: u32) -> u32 {
        (expected_minutes / 5).saturating_mul(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_uses_floor_division() {
        assert_eq!(Task::reward_for(30), 60);
        assert_eq!(Task::reward_for(45), 90);
        assert_eq!(Task::reward_for(7), 10);
        assert_eq!(Task::reward_for(4), 0);
    }

    #[test]
    fn new_task_starts_incomplete() {
        let subject = Subject::new("Math", "#76E0C2", "#3A9ED9");
        let task = Task::new("Review derivatives", subject.clone(), 30);
        assert!(!task.completed);
        assert_eq!(task.reward_xp, 60);
        assert_eq!(task.subject, subject);
    }
}
