use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::model::PomodoroConfiguration;
use crate::storage::Snapshot;
use crate::timer::TimerMode;

/// Every state change in the engine produces an Event.
/// Presentation collaborators subscribe to them through [`EventBus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded {
        task_id: Uuid,
        reward_xp: u32,
        at: DateTime<Utc>,
    },
    TaskToggled {
        task_id: Uuid,
        completed: bool,
        /// XP granted by this toggle; zero when toggled off.
        xp_granted: u32,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        task_id: Uuid,
        at: DateTime<Utc>,
    },
    XpGained {
        amount: u32,
        coins: u32,
        total_xp: u32,
        total_coins: u32,
        at: DateTime<Utc>,
    },
    StreakUpdated {
        current_streak: u32,
        longest_streak: u32,
        at: DateTime<Utc>,
    },
    SessionLogged {
        session_id: Uuid,
        duration_secs: u64,
        earned_xp: u32,
        at: DateTime<Utc>,
    },
    QuestClaimed {
        quest_id: Uuid,
        reward_xp: u32,
        reward_coins: u32,
        at: DateTime<Utc>,
    },
    RewardAdded {
        reward_id: Uuid,
        at: DateTime<Utc>,
    },
    RewardClaimed {
        reward_id: Uuid,
        reward_xp: u32,
        reward_coins: u32,
        at: DateTime<Utc>,
    },
    ThemeUnlocked {
        theme_id: Uuid,
        price: u32,
        at: DateTime<Utc>,
    },
    ThemeApplied {
        theme_id: Uuid,
        at: DateTime<Utc>,
    },
    FocusModeChanged {
        enabled: bool,
        at: DateTime<Utc>,
    },
    PomodoroUpdated {
        config: PomodoroConfiguration,
        at: DateTime<Utc>,
    },
    /// Snapshot written on explicit request.
    Saved {
        at: DateTime<Utc>,
    },
    TimerStarted {
        mode: TimerMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; completion XP has been granted.
    TimerExpired {
        mode: TimerMode,
        reward_xp: u32,
        at: DateTime<Utc>,
    },
    /// The state document could not be written. Not retried.
    PersistenceFailed {
        message: String,
        at: DateTime<Utc>,
    },
}

/// What subscribers receive: the change plus the full snapshot after it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub event: Event,
    pub snapshot: Arc<Snapshot>,
}

/// Publish/subscribe channel for [`Notification`]s.
///
/// Publishing with no subscribers is not an error; lagging subscribers
/// lose the oldest notifications.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Notification>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event, snapshot: Arc<Snapshot>) {
        // Err only means nobody is listening.
        let _ = self.sender.send(Notification { event, snapshot });
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
