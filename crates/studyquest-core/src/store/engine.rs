use std::sync::Arc;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::clock::{days_between, Clock};
use crate::error::{ActionError, ValidationError};
use crate::events::{Event, EventBus, Notification};
use crate::model::{CustomReward, PomodoroConfiguration, StudySession, Task, UserProfile};
use crate::storage::{Snapshot, SnapshotStore};
use crate::timer::{StudyTimer, TimerMode};

/// XP converts to coins at this rate in [`Store::gain_xp`].
const XP_PER_COIN: u32 = 10;

/// The progression engine.
///
/// Not shared between threads: construct one at the composition root and
/// hand it to a single execution context (see [`crate::runtime`]).
pub struct Store {
    snapshot: Snapshot,
    persistence: Box<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    timer: StudyTimer,
    bus: EventBus,
    streak_headline: String,
}

impl Store {
    /// Load the snapshot from `persistence`, falling back to the seed.
    pub fn open(persistence: impl SnapshotStore + 'static, clock: Arc<dyn Clock>) -> Self {
        let snapshot = persistence.load(clock.now());
        Self::with_snapshot(snapshot, persistence, clock)
    }

    /// Start from an explicit snapshot. Nothing is written until the first
    /// mutation.
    pub fn with_snapshot(
        mut snapshot: Snapshot,
        persistence: impl SnapshotStore + 'static,
        clock: Arc<dyn Clock>,
    ) -> Self {
        snapshot.reconcile_theme_unlocks();
        let timer = StudyTimer::new(&snapshot.pomodoro_configuration);
        let streak_headline = snapshot.profile.streak_headline();
        Self {
            snapshot,
            persistence: Box::new(persistence),
            clock,
            timer,
            bus: EventBus::default(),
            streak_headline,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn profile(&self) -> &UserProfile {
        &self.snapshot.profile
    }

    pub fn timer(&self) -> &StudyTimer {
        &self.timer
    }

    pub fn streak_headline(&self) -> &str {
        &self.streak_headline
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.bus.subscribe()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// Append a new incomplete task for the given subject.
    pub fn add_task(
        &mut self,
        title: &str,
        subject_id: Uuid,
        expected_minutes: u32,
    ) -> Result<Uuid, ActionError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty("title").into());
        }
        let subject = self
            .snapshot
            .subjects
            .iter()
            .find(|s| s.id == subject_id)
            .cloned()
            .ok_or(ActionError::NotFound {
                kind: "subject",
                id: subject_id,
            })?;

        let task = Task::new(title, subject, expected_minutes);
        let (task_id, reward_xp) = (task.id, task.reward_xp);
        tracing::debug!(%task_id, reward_xp, "task added");
        self.snapshot.tasks.push(task);
        self.commit(Event::TaskAdded {
            task_id,
            reward_xp,
            at: self.clock.now(),
        });
        Ok(task_id)
    }

    /// Flip completion. Completing grants the task's XP; un-completing
    /// never takes it back. Returns the new completion state.
    pub fn toggle_task(&mut self, task_id: Uuid) -> Result<bool, ActionError> {
        let idx = self.task_index(task_id)?;
        let task = &mut self.snapshot.tasks[idx];
        task.completed = !task.completed;
        let (completed, reward_xp) = (task.completed, task.reward_xp);

        let xp_granted = if completed {
            self.apply_xp(reward_xp);
            reward_xp
        } else {
            0
        };
        tracing::debug!(%task_id, completed, xp_granted, "task toggled");
        self.commit(Event::TaskToggled {
            task_id,
            completed,
            xp_granted,
            at: self.clock.now(),
        });
        Ok(completed)
    }

    pub fn delete_task(&mut self, task_id: Uuid) -> Result<(), ActionError> {
        let idx = self.task_index(task_id)?;
        self.snapshot.tasks.remove(idx);
        tracing::debug!(%task_id, "task deleted");
        self.commit(Event::TaskDeleted {
            task_id,
            at: self.clock.now(),
        });
        Ok(())
    }

    // ── Progression ──────────────────────────────────────────────────

    /// Add XP, convert a tenth of it to coins, then re-evaluate the streak.
    pub fn gain_xp(&mut self, amount: u32) {
        self.apply_xp(amount);
        let profile = &self.snapshot.profile;
        let event = Event::XpGained {
            amount,
            coins: amount / XP_PER_COIN,
            total_xp: profile.xp,
            total_coins: profile.coins,
            at: self.clock.now(),
        };
        self.commit(event);
    }

    /// Re-evaluate the day streak against the most recent session.
    pub fn update_streak(&mut self) {
        self.apply_streak();
        let profile = &self.snapshot.profile;
        let event = Event::StreakUpdated {
            current_streak: profile.current_streak,
            longest_streak: profile.longest_streak,
            at: self.clock.now(),
        };
        self.commit(event);
    }

    /// Append a session dated now and grant its XP.
    ///
    /// `earned_coins` is recorded on the session; the profile only receives
    /// the coins that the XP grant converts.
    pub fn log_session(
        &mut self,
        subject_id: Uuid,
        technique_id: Uuid,
        duration_secs: u64,
        earned_xp: u32,
        earned_coins: u32,
    ) -> Result<Uuid, ActionError> {
        let subject = self
            .snapshot
            .subjects
            .iter()
            .find(|s| s.id == subject_id)
            .cloned()
            .ok_or(ActionError::NotFound {
                kind: "subject",
                id: subject_id,
            })?;
        let technique = self
            .snapshot
            .techniques
            .iter()
            .find(|t| t.id == technique_id)
            .cloned()
            .ok_or(ActionError::NotFound {
                kind: "technique",
                id: technique_id,
            })?;

        let now = self.clock.now();
        let session = StudySession {
            id: Uuid::new_v4(),
            subject,
            technique,
            duration_secs,
            date: now,
            earned_xp,
            earned_coins,
        };
        let session_id = session.id;
        self.snapshot.sessions.push(session);
        self.apply_xp(earned_xp);
        tracing::debug!(%session_id, duration_secs, earned_xp, "session logged");
        self.commit(Event::SessionLogged {
            session_id,
            duration_secs,
            earned_xp,
            at: now,
        });
        Ok(session_id)
    }

    // ── Quests and rewards ───────────────────────────────────────────

    /// Claim a completed quest once. Grants its XP (with coin conversion)
    /// plus its flat coin reward.
    pub fn claim_quest(&mut self, quest_id: Uuid) -> Result<(), ActionError> {
        let idx = self
            .snapshot
            .quests
            .iter()
            .position(|q| q.id == quest_id)
            .ok_or(ActionError::NotFound {
                kind: "quest",
                id: quest_id,
            })?;
        let quest = &mut self.snapshot.quests[idx];
        if quest.claimed {
            return Err(ActionError::NotEligible {
                reason: format!("quest '{}' already claimed", quest.title),
            });
        }
        if !quest.is_completed() {
            return Err(ActionError::NotEligible {
                reason: format!(
                    "quest '{}' needs {} more minutes",
                    quest.title,
                    quest.required_minutes - quest.progress_minutes
                ),
            });
        }
        quest.claimed = true;
        let (reward_xp, reward_coins) = (quest.reward_xp, quest.reward_coins);

        self.apply_xp(reward_xp);
        let profile = &mut self.snapshot.profile;
        profile.coins = profile.coins.saturating_add(reward_coins);
        tracing::info!(%quest_id, reward_xp, reward_coins, "quest claimed");
        self.commit(Event::QuestClaimed {
            quest_id,
            reward_xp,
            reward_coins,
            at: self.clock.now(),
        });
        Ok(())
    }

    /// Append a user-defined reward. Its coin value is a fifth of `reward_xp`.
    pub fn add_custom_reward(
        &mut self,
        title: &str,
        icon: &str,
        required_minutes: u32,
        reward_xp: u32,
    ) -> Result<Uuid, ActionError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty("title").into());
        }
        let reward = CustomReward::new(title, icon, required_minutes, reward_xp);
        let reward_id = reward.id;
        self.snapshot.custom_rewards.push(reward);
        tracing::debug!(%reward_id, reward_xp, "custom reward added");
        self.commit(Event::RewardAdded {
            reward_id,
            at: self.clock.now(),
        });
        Ok(reward_id)
    }

    /// Claim a custom reward once.
    pub fn claim_reward(&mut self, reward_id: Uuid) -> Result<(), ActionError> {
        let idx = self
            .snapshot
            .custom_rewards
            .iter()
            .position(|r| r.id == reward_id)
            .ok_or(ActionError::NotFound {
                kind: "reward",
                id: reward_id,
            })?;
        let reward = &mut self.snapshot.custom_rewards[idx];
        if reward.claimed {
            return Err(ActionError::NotEligible {
                reason: format!("reward '{}' already claimed", reward.title),
            });
        }
        reward.claimed = true;
        let (reward_xp, reward_coins) = (reward.reward_xp, reward.reward_coins);

        self.apply_xp(reward_xp);
        let profile = &mut self.snapshot.profile;
        profile.coins = profile.coins.saturating_add(reward_coins);
        tracing::info!(%reward_id, reward_xp, reward_coins, "reward claimed");
        self.commit(Event::RewardClaimed {
            reward_id,
            reward_xp,
            reward_coins,
            at: self.clock.now(),
        });
        Ok(())
    }

    // ── Themes ───────────────────────────────────────────────────────

    /// Buy a store listing with coins, unlocking its theme.
    pub fn unlock_theme(&mut self, item_id: Uuid) -> Result<(), ActionError> {
        let item = self
            .snapshot
            .theme_store
            .iter()
            .find(|i| i.id == item_id)
            .ok_or(ActionError::NotFound {
                kind: "store item",
                id: item_id,
            })?;
        if item.unlocked {
            return Err(ActionError::NotEligible {
                reason: format!("theme '{}' already owned", item.theme.name),
            });
        }
        let (price, theme_id) = (item.price, item.theme.id);
        let available = self.snapshot.profile.coins;
        if available < price {
            return Err(ActionError::InsufficientFunds {
                needed: price,
                available,
            });
        }

        self.snapshot.profile.coins -= price;
        for item in self.snapshot.theme_store.iter_mut().filter(|i| i.id == item_id) {
            item.unlocked = true;
        }
        if let Some(theme) = self.snapshot.themes.iter_mut().find(|t| t.id == theme_id) {
            theme.unlocked = true;
        }
        self.snapshot.reconcile_theme_unlocks();
        tracing::info!(%theme_id, price, "theme unlocked");
        self.commit(Event::ThemeUnlocked {
            theme_id,
            price,
            at: self.clock.now(),
        });
        Ok(())
    }

    pub fn apply_theme(&mut self, theme_id: Uuid) -> Result<(), ActionError> {
        let theme = self
            .snapshot
            .themes
            .iter()
            .find(|t| t.id == theme_id)
            .ok_or(ActionError::NotFound {
                kind: "theme",
                id: theme_id,
            })?;
        if !theme.unlocked {
            return Err(ActionError::Locked(theme_id));
        }
        self.snapshot.profile.preferred_theme_id = Some(theme_id);
        tracing::debug!(%theme_id, "theme applied");
        self.commit(Event::ThemeApplied {
            theme_id,
            at: self.clock.now(),
        });
        Ok(())
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn set_focus_mode(&mut self, enabled: bool) {
        self.snapshot.profile.focus_mode_enabled = enabled;
        self.commit(Event::FocusModeChanged {
            enabled,
            at: self.clock.now(),
        });
    }

    /// Replace the pomodoro configuration. A pomodoro-mode timer picks up
    /// the new focus length immediately.
    pub fn update_pomodoro(&mut self, config: PomodoroConfiguration) -> Result<(), ActionError> {
        config.validate()?;
        self.snapshot.pomodoro_configuration = config;
        self.timer.reconfigure(&config);
        tracing::debug!(?config, "pomodoro configuration updated");
        self.commit(Event::PomodoroUpdated {
            config,
            at: self.clock.now(),
        });
        Ok(())
    }

    /// Write the current snapshot without changing it.
    pub fn save(&mut self) {
        self.commit(Event::Saved {
            at: self.clock.now(),
        });
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn start_timer(&mut self, mode: TimerMode) {
        let now = self.clock.now();
        let event = self
            .timer
            .start(mode, &self.snapshot.pomodoro_configuration, now);
        tracing::debug!(?mode, remaining_ms = self.timer.remaining_ms(), "timer started");
        self.publish(event);
    }

    pub fn pause_timer(&mut self) -> Result<(), ActionError> {
        let event = self.timer.pause(self.clock.now()).ok_or(ActionError::NotEligible {
            reason: "timer is not running".into(),
        })?;
        self.publish(event);
        Ok(())
    }

    pub fn resume_timer(&mut self) -> Result<(), ActionError> {
        let event = self.timer.resume(self.clock.now()).ok_or(ActionError::NotEligible {
            reason: "timer is not paused".into(),
        })?;
        self.publish(event);
        Ok(())
    }

    /// End the run without reward.
    pub fn stop_timer(&mut self) {
        let event = self.timer.stop(self.clock.now());
        tracing::debug!("timer stopped");
        self.publish(event);
    }

    /// Advance the countdown by the wall-clock time since the last tick.
    /// On expiry the completion XP is granted and the snapshot persisted.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.timer.tick(self.clock.now())?;
        match event {
            Event::TimerExpired { reward_xp, mode, .. } => {
                tracing::info!(?mode, reward_xp, "study timer completed");
                self.apply_xp(reward_xp);
                self.commit(event.clone());
            }
            _ => self.publish(event.clone()),
        }
        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn task_index(&self, task_id: Uuid) -> Result<usize, ActionError> {
        self.snapshot
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(ActionError::NotFound {
                kind: "task",
                id: task_id,
            })
    }

    fn apply_xp(&mut self, amount: u32) {
        let profile = &mut self.snapshot.profile;
        profile.xp = profile.xp.saturating_add(amount);
        profile.coins = profile.coins.saturating_add(amount / XP_PER_COIN);
        self.apply_streak();
    }

    fn apply_streak(&mut self) {
        let today = self.clock.today();
        let profile = &mut self.snapshot.profile;
        match self.snapshot.sessions.last() {
            Some(last) => match days_between(last.date, today) {
                1 => profile.current_streak = profile.current_streak.saturating_add(1),
                days if days > 1 => profile.current_streak = 1,
                _ => {}
            },
            None => profile.current_streak = 1,
        }
        profile.longest_streak = profile.longest_streak.max(profile.current_streak);
        self.streak_headline = profile.streak_headline();
    }

    fn publish(&self, event: Event) {
        self.bus.publish(event, Arc::new(self.snapshot.clone()));
    }

    /// Persist, then notify. A failed write is reported on the bus and
    /// otherwise dropped.
    fn commit(&mut self, event: Event) {
        let saved = self.persistence.save(&self.snapshot);
        self.publish(event);
        if let Err(e) = saved {
            tracing::warn!(error = %e, "failed to persist snapshot");
            self.publish(Event::PersistenceFailed {
                message: e.to_string(),
                at: self.clock.now(),
            });
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("profile", &self.snapshot.profile)
            .field("timer", &self.timer)
            .field("streak_headline", &self.streak_headline)
            .finish_non_exhaustive()
    }
}
