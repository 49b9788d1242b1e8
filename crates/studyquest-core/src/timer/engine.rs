//! Study timer state machine.
//!
//! The timer is driven by wall-clock deltas and has no internal thread.
//! The owner passes the current instant into every command and calls
//! `tick()` periodically; irregular or delayed ticks are absorbed because
//! each tick subtracts the real time elapsed since the previous one.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//! Running -> Idle   (expired, reward granted by the owner)
//! any     -> Idle   (stop, no reward)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mode::TimerMode;
use crate::events::Event;
use crate::model::PomodoroConfiguration;

/// XP granted when a run counts down to zero.
pub const COMPLETION_REWARD_XP: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyTimer {
    mode: TimerMode,
    state: TimerState,
    /// Remaining time in milliseconds for the current run.
    remaining_ms: u64,
    /// Instant of the last start/resume/tick while running.
    #[serde(default)]
    last_tick: Option<DateTime<Utc>>,
}

impl StudyTimer {
    /// Idle timer in standard mode, primed with the pomodoro focus length.
    pub fn new(config: &PomodoroConfiguration) -> Self {
        Self {
            mode: TimerMode::Standard,
            state: TimerState::Idle,
            remaining_ms: TimerMode::Pomodoro.duration_ms(config),
            last_tick: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1000
    }

    /// 0.0 .. 1.0 progress through the current mode's full length.
    pub fn progress(&self, config: &PomodoroConfiguration) -> f64 {
        let total = self.mode.duration_ms(config);
        if total == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_ms as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        let secs = self.remaining_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh run in `mode`, discarding any run in progress.
    pub fn start(
        &mut self,
        mode: TimerMode,
        config: &PomodoroConfiguration,
        now: DateTime<Utc>,
    ) -> Event {
        self.mode = mode;
        self.remaining_ms = mode.duration_ms(config);
        self.state = TimerState::Running;
        self.last_tick = Some(now);
        Event::TimerStarted {
            mode,
            duration_secs: self.remaining_secs(),
            at: now,
        }
    }

    /// Freeze the countdown at its last observed value.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                self.last_tick = None;
                Some(Event::TimerPaused {
                    remaining_ms: self.remaining_ms,
                    at: now,
                })
            }
            _ => None,
        }
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Option<Event> {
        match self.state {
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.last_tick = Some(now);
                Some(Event::TimerResumed {
                    remaining_ms: self.remaining_ms,
                    at: now,
                })
            }
            _ => None,
        }
    }

    /// Abandon the run from any state. No reward.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Event {
        self.state = TimerState::Idle;
        self.remaining_ms = 0;
        self.last_tick = None;
        Event::TimerStopped { at: now }
    }

    /// Call periodically. Returns `Event::TimerExpired` when the run
    /// reaches zero; the owner is responsible for granting the reward.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(now);
        if self.remaining_ms == 0 {
            self.state = TimerState::Idle;
            self.last_tick = None;
            return Some(Event::TimerExpired {
                mode: self.mode,
                reward_xp: COMPLETION_REWARD_XP,
                at: now,
            });
        }
        Some(Event::TimerTicked {
            remaining_ms: self.remaining_ms,
            at: now,
        })
    }

    /// Re-derive the remaining time after the pomodoro configuration changed.
    /// Only applies while the active mode is pomodoro.
    pub fn reconfigure(&mut self, config: &PomodoroConfiguration) {
        if self.mode == TimerMode::Pomodoro {
            self.remaining_ms = TimerMode::Pomodoro.duration_ms(config);
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self, now: DateTime<Utc>) {
        if let Some(last) = self.last_tick {
            let elapsed = (now - last).num_milliseconds().max(0) as u64;
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cfg() -> PomodoroConfiguration {
        PomodoroConfiguration::default()
    }

    #[test]
    fn start_pause_resume() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start(TimerMode::Standard, &cfg(), now);
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_secs(), 50 * 60);

        assert!(timer.pause(now).is_some());
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.pause(now).is_none());

        assert!(timer.resume(now).is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.resume(now).is_none());
    }

    #[test]
    fn tick_uses_wall_clock_delta() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        timer.start(TimerMode::Pomodoro, &cfg(), now);

        // A single late tick accounts for the whole gap.
        let event = timer.tick(now + Duration::seconds(600));
        assert!(matches!(event, Some(Event::TimerTicked { .. })));
        assert_eq!(timer.remaining_secs(), 900);
    }

    #[test]
    fn paused_time_is_not_counted() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        timer.start(TimerMode::Pomodoro, &cfg(), now);
        timer.tick(now + Duration::seconds(100));
        timer.pause(now + Duration::seconds(150));
        assert!(timer.tick(now + Duration::seconds(400)).is_none());
        assert_eq!(timer.remaining_secs(), 1400);

        timer.resume(now + Duration::seconds(1000));
        timer.tick(now + Duration::seconds(1010));
        assert_eq!(timer.remaining_secs(), 1390);
    }

    #[test]
    fn expiry_returns_to_idle() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        timer.start(TimerMode::Pomodoro, &cfg(), now);
        let event = timer.tick(now + Duration::seconds(1500));
        match event {
            Some(Event::TimerExpired { reward_xp, mode, .. }) => {
                assert_eq!(reward_xp, COMPLETION_REWARD_XP);
                assert_eq!(mode, TimerMode::Pomodoro);
            }
            other => panic!("Expected TimerExpired, got {other:?}"),
        }
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.tick(now + Duration::seconds(1600)).is_none());
    }

    #[test]
    fn stop_zeroes_remaining() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        timer.start(TimerMode::Standard, &cfg(), now);
        timer.stop(now);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_ms(), 0);
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn reconfigure_only_touches_pomodoro_mode() {
        let now = Utc::now();
        let longer = PomodoroConfiguration {
            focus_minutes: 30,
            ..cfg()
        };

        let mut timer = StudyTimer::new(&cfg());
        timer.start(TimerMode::Standard, &cfg(), now);
        timer.reconfigure(&longer);
        assert_eq!(timer.remaining_secs(), 3000);

        timer.start(TimerMode::Pomodoro, &cfg(), now);
        timer.reconfigure(&longer);
        assert_eq!(timer.remaining_secs(), 1800);
    }

    #[test]
    fn display_and_progress() {
        let now = Utc::now();
        let mut timer = StudyTimer::new(&cfg());
        assert_eq!(timer.display(), "25:00");
        timer.start(TimerMode::Pomodoro, &cfg(), now);
        timer.tick(now + Duration::milliseconds(750_500));
        assert_eq!(timer.display(), "12:29");
        assert!((timer.progress(&cfg()) - 0.5).abs() < 0.001);
    }
}
