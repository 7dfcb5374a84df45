//! Contexts in which a player can gain XP or gold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an XP or gold gain originates. Each context has its own
/// anti-exploitation ceiling (see [`crate::GainCeilings`]).
///
/// Unknown keys map to `Other`, which uses the fallback ceiling and is
/// written as `"default"` everywhere, matching the ceiling table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainContext {
    QuestCompletion,
    HealthActivity,
    Encounter,
    DailyBonus,
    #[serde(rename = "default", other)]
    Other,
}

impl GainContext {
    /// Maps a context key (`"quest_completion"`, `"encounter"`, ...) to a context.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "quest_completion" => Self::QuestCompletion,
            "health_activity" => Self::HealthActivity,
            "encounter" => Self::Encounter,
            "daily_bonus" => Self::DailyBonus,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuestCompletion => "quest_completion",
            Self::HealthActivity => "health_activity",
            Self::Encounter => "encounter",
            Self::DailyBonus => "daily_bonus",
            Self::Other => "default",
        }
    }
}

impl From<&str> for GainContext {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl fmt::Display for GainContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
