use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary/accent color pair, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub primary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub color: ColorPair,
}

impl Subject {
    pub fn new(name: impl Into<String>, primary: &str, accent: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: ColorPair {
                primary: primary.to_string(),
                accent: accent.to_string(),
            },
        }
    }
}

/// A named study method (Pomodoro, Deep Work, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Technique {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Technique {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub achieved: bool,
}
