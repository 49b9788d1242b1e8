mod engine;
mod mode;

pub use engine::{StudyTimer, TimerState, COMPLETION_REWARD_XP};
pub use mode::TimerMode;
