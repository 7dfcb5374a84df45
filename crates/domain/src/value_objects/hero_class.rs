//! Hero classes and the activity types they can favor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The player's active class. Each class carries fixed distance/XP/gold
/// modifiers, looked up in [`crate::ClassModifierTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroClass {
    Warrior,
    Mage,
    Rogue,
    Ranger,
    Cleric,
}

impl HeroClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Rogue => "rogue",
            Self::Ranger => "ranger",
            Self::Cleric => "cleric",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Ranger => "Ranger",
            Self::Cleric => "Cleric",
        }
    }

    pub fn all() -> [HeroClass; 5] {
        [
            Self::Warrior,
            Self::Mage,
            Self::Rogue,
            Self::Ranger,
            Self::Cleric,
        ]
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeroClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "rogue" => Ok(Self::Rogue),
            "ranger" => Ok(Self::Ranger),
            "cleric" => Ok(Self::Cleric),
            _ => Err(DomainError::parse(format!("Unknown hero class: {}", s))),
        }
    }
}

/// Kind of real-world activity a telemetry sample is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Walking,
    Running,
    Outdoor,
    Mindfulness,
    Workout,
    Standing,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Running => "running",
            Self::Outdoor => "outdoor",
            Self::Mindfulness => "mindfulness",
            Self::Workout => "workout",
            Self::Standing => "standing",
        }
    }

    pub fn all() -> [ActivityType; 6] {
        [
            Self::Walking,
            Self::Running,
            Self::Outdoor,
            Self::Mindfulness,
            Self::Workout,
            Self::Standing,
        ]
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "running" => Ok(Self::Running),
            "outdoor" => Ok(Self::Outdoor),
            "mindfulness" => Ok(Self::Mindfulness),
            "workout" => Ok(Self::Workout),
            "standing" => Ok(Self::Standing),
            _ => Err(DomainError::parse(format!("Unknown activity type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_class_from_str() {
        assert_eq!(HeroClass::from_str("warrior"), Ok(HeroClass::Warrior));
        assert_eq!(HeroClass::from_str(" Ranger "), Ok(HeroClass::Ranger));
        assert!(HeroClass::from_str("bard").is_err());
    }

    #[test]
    fn test_hero_class_display_roundtrip() {
        for class in HeroClass::all() {
            assert_eq!(class.to_string().parse::<HeroClass>(), Ok(class));
        }
    }

    #[test]
    fn test_hero_class_serde_lowercase() {
        let json = serde_json::to_string(&HeroClass::Cleric).unwrap();
        assert_eq!(json, "\"cleric\"");
    }

    #[test]
    fn test_activity_type_from_str() {
        assert_eq!(ActivityType::from_str("Mindfulness"), Ok(ActivityType::Mindfulness));
        assert!(ActivityType::from_str("swimming").is_err());
    }
}
