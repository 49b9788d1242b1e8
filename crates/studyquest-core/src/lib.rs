//! # StudyQuest Core Library
//!
//! This library provides the progression engine behind StudyQuest, a
//! gamified study-habit tracker. Users log study sessions, complete tasks,
//! earn XP and coins, keep day streaks, claim quests and custom rewards,
//! and spend coins on cosmetic themes. Rendering lives elsewhere; this
//! crate exposes the state, the operations that change it, and a
//! notification stream to re-render from.
//!
//! ## Architecture
//!
//! - **Store**: the progression engine. Owns the one live [`Snapshot`],
//!   persists it after every mutation and publishes a [`Notification`]
//! - **Timer**: a wall-clock-based countdown that requires the owner to
//!   periodically invoke `tick()`
//! - **Storage**: a single JSON state document with a seed fallback, plus
//!   TOML-based configuration
//! - **Runtime**: a single tokio task that serializes user commands and
//!   timer ticks
//!
//! ## Key Components
//!
//! - [`Store`]: Progression engine
//! - [`StudyTimer`]: Countdown state machine
//! - [`SnapshotStore`]: Persistence gateway
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod model;
pub mod runtime;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ActionError, ConfigError, CoreError, PersistenceError, StoreClosed, ValidationError};
pub use events::{Event, EventBus, Notification};
pub use model::{
    Badge, ColorPair, CustomReward, PomodoroConfiguration, Quest, QuestFrequency, StudySession,
    Subject, Task, Technique, Theme, ThemeStoreItem, UserProfile,
};
pub use runtime::StoreHandle;
pub use stats::LevelProgress;
pub use storage::{Config, JsonFileStore, MemoryStore, Snapshot, SnapshotStore};
pub use store::Store;
pub use timer::{StudyTimer, TimerMode, TimerState};
