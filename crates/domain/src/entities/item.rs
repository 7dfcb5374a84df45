//! Item entity - loot held in a player's inventory

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::ItemId;

/// An item carried by a player.
///
/// Simple data struct: any combination of field values can be represented;
/// capacity and duplication rules are checked by the engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rarity: ItemRarity,
    #[serde(default)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, rarity: ItemRarity) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: None,
            rarity,
            kind: ItemKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Item rarity tiers, from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl ItemRarity {
    /// Epic and legendary items; duplicates of these are suspicious.
    pub fn is_high_tier(&self) -> bool {
        matches!(self, Self::Epic | Self::Legendary)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemRarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Err(DomainError::parse(format!("Unknown item rarity: {}", s))),
        }
    }
}

/// Broad item category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
    #[default]
    Trinket,
    QuestReward,
    /// Unknown kind for forward compatibility
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "Weapon"),
            Self::Armor => write!(f, "Armor"),
            Self::Consumable => write!(f, "Consumable"),
            Self::Trinket => write!(f, "Trinket"),
            Self::QuestReward => write!(f, "Quest Reward"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
