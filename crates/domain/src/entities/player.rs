//! Player entity and quest journal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Item;
use crate::value_objects::HeroClass;
use crate::{PlayerId, QuestId};

/// A player's progression snapshot.
///
/// The engine receives players by value from the persistence layer and
/// validates them; numeric fields are signed so corrupted snapshots
/// (negative gold, level 0) can be represented and reported rather than
/// silently wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub level: i32,
    pub xp: i64,
    pub gold: i64,
    pub steps_today: i64,
    pub active_class: HeroClass,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub journal: Vec<QuestLog>,
}

impl Player {
    /// A fresh level-1 player with nothing in their pockets.
    pub fn new(name: impl Into<String>, active_class: HeroClass) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            level: 1,
            xp: 0,
            gold: 0,
            steps_today: 0,
            active_class,
            inventory: Vec::new(),
            journal: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn with_xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    pub fn with_gold(mut self, gold: i64) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_inventory(mut self, inventory: Vec<Item>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_journal(mut self, journal: Vec<QuestLog>) -> Self {
        self.journal = journal;
        self
    }

    /// Whether the journal already records `quest_id` as completed.
    pub fn has_completed(&self, quest_id: QuestId) -> bool {
        self.journal.iter().any(|log| log.quest_id == quest_id)
    }
}

/// Journal entry written when a quest is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quest_id: QuestId,
    pub title: String,
    pub completed_at: DateTime<Utc>,
    pub distance: f64,
    pub xp_earned: i64,
    pub gold_earned: i64,
}
