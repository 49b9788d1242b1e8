use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestFrequency {
    Daily,
    Weekly,
}

/// A recurring, progress-gated reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: Uuid,
    pub title: String,
    pub required_minutes: u32,
    #[serde(rename = "rewardXP")]
    pub reward_xp: u32,
    pub reward_coins: u32,
    pub progress_minutes: u32,
    pub frequency: QuestFrequency,
    pub claimed: bool,
}

impl Quest {
    pub fn is_completed(&self) -> bool {
        self.progress_minutes >= self.required_minutes
    }

    pub fn is_claimable(&self) -> bool {
        self.is_completed() && !self.claimed
    }

    /// 0.0 ..= 1.0 completion ratio.
    pub fn progress(&self) -> f64 {
        if self.required_minutes == 0 {
            return 1.0;
        }
        (self.progress_minutes as f64 / self.required_minutes as f64).min(1.0)
    }
}

/// A one-shot incentive defined by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReward {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub required_minutes: u32,
    #[serde(rename = "rewardXP")]
    pub reward_xp: u32,
    pub reward_coins: u32,
    pub claimed: bool,
}

impl CustomReward {
    /// Coins are a fifth of the XP value.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        required_minutes: u32,
        reward_xp: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            icon: icon.into(),
            required_minutes,
            reward_xp,
            reward_coins: reward_xp / 5,
            claimed: false,
        }
    }
}
