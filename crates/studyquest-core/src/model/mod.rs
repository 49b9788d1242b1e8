//! Domain records held in the snapshot.
//!
//! Every record carries a v4 [`Uuid`](uuid::Uuid) assigned at creation.
//! Field names serialize in camelCase to match the durable document.

mod catalog;
mod pomodoro;
mod profile;
mod quest;
mod session;
mod task;
mod theme;

pub use catalog::{Badge, ColorPair, Subject, Technique};
pub use pomodoro::PomodoroConfiguration;
pub use profile::UserProfile;
pub use quest::{CustomReward, Quest, QuestFrequency};
pub use session::StudySession;
pub use task::Task;
pub use theme::{Theme, ThemeStoreItem};
