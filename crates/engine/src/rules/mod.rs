//! Field validation rules
//!
//! One pure function per primitive field. Every rule takes the value plus
//! the constants it needs and returns a [`ValidationResult`]; rules never
//! panic and never log. The first failing check inside a rule wins, with
//! blocking checks ordered before advisory ones.
//!
//! [`ValidationResult`]: questwalk_domain::ValidationResult

mod format;
mod health;
mod player;
mod quest;

pub use format::{validate_date, validate_date_string, validate_enum, validate_json, validate_uuid};
pub use health::{
    validate_exercise_minutes, validate_heart_rate, validate_mindful_minutes,
    validate_standing_hours, validate_steps,
};
pub use player::{
    contains_profanity, validate_item_name, validate_player_gold, validate_player_level,
    validate_player_name, validate_player_xp,
};
pub use quest::{
    validate_quest_description, validate_quest_distance, validate_quest_progress,
    validate_quest_reward_gold, validate_quest_reward_xp, validate_quest_title,
};
