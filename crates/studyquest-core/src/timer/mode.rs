use serde::{Deserialize, Serialize};

use crate::model::PomodoroConfiguration;

/// Timer preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Fixed 50-minute block.
    #[default]
    Standard,
    /// Focus block from the pomodoro configuration.
    Pomodoro,
}

impl TimerMode {
    pub const STANDARD_MINUTES: u64 = 50;

    /// Full run length in milliseconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_ms(self, config: &PomodoroConfiguration) -> u64 {
        let minutes = match self {
            TimerMode::Standard => Self::STANDARD_MINUTES,
            TimerMode::Pomodoro => u64::from(config.focus_minutes),
        };
        minutes.saturating_mul(60).saturating_mul(1000)
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Standard => "Standard",
            TimerMode::Pomodoro => "Pomodoro",
        }
    }
}

impl std::str::FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(TimerMode::Standard),
            "pomodoro" => Ok(TimerMode::Pomodoro),
            other => Err(format!("unknown timer mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_mode() {
        let cfg = PomodoroConfiguration::default();
        assert_eq!(TimerMode::Standard.duration_ms(&cfg), 50 * 60 * 1000);
        assert_eq!(TimerMode::Pomodoro.duration_ms(&cfg), 25 * 60 * 1000);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Pomodoro".parse::<TimerMode>(), Ok(TimerMode::Pomodoro));
        assert_eq!("standard".parse::<TimerMode>(), Ok(TimerMode::Standard));
        assert!("sprint".parse::<TimerMode>().is_err());
    }
}
