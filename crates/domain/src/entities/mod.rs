//! Entities - values with identity, owned by the caller's game state

mod health;
mod item;
mod player;
mod quest;

pub use health::HealthData;
pub use item::{Item, ItemKind, ItemRarity};
pub use player::{Player, QuestLog};
pub use quest::Quest;
