use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Work/break cadence for the pomodoro timer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroConfiguration {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub rounds_before_long_break: u32,
}

impl PomodoroConfiguration {
    pub const FOCUS_RANGE: (u32, u32) = (5, 90);
    pub const SHORT_BREAK_RANGE: (u32, u32) = (3, 30);
    pub const LONG_BREAK_RANGE: (u32, u32) = (10, 60);
    pub const ROUNDS_RANGE: (u32, u32) = (2, 8);

    pub fn focus_secs(&self) -> u64 {
        u64::from(self.focus_minutes) * 60
    }

    /// Check every field against its adjustable range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check("focusMinutes", self.focus_minutes, Self::FOCUS_RANGE)?;
        check("shortBreakMinutes", self.short_break_minutes, Self::SHORT_BREAK_RANGE)?;
        check("longBreakMinutes", self.long_break_minutes, Self::LONG_BREAK_RANGE)?;
        check("roundsBeforeLongBreak", self.rounds_before_long_break, Self::ROUNDS_RANGE)
    }
}

fn check(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

impl Default for PomodoroConfiguration {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            rounds_before_long_break: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = PomodoroConfiguration::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.focus_secs(), 1500);
    }

    #[test]
    fn rejects_out_of_range_field() {
        let cfg = PomodoroConfiguration {
            rounds_before_long_break: 12,
            ..PomodoroConfiguration::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ValidationError::OutOfRange {
                field: "roundsBeforeLongBreak",
                min: 2,
                max: 8,
                value: 12,
            })
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let cfg = PomodoroConfiguration {
            focus_minutes: 90,
            short_break_minutes: 3,
            long_break_minutes: 60,
            rounds_before_long_break: 2,
        };
        assert!(cfg.validate().is_ok());
    }
}
