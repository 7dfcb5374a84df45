//! Player-authored and player-progression fields.

use questwalk_domain::{GameConstants, ValidationResult};

/// Punctuation allowed in names besides letters and spaces.
const NAME_PUNCTUATION: [char; 3] = ['\'', '-', '.'];

fn is_allowed_name_char(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || NAME_PUNCTUATION.contains(&c)
}

/// Case-insensitive literal substring match against a flat block-list.
pub fn contains_profanity(text: &str, block_list: &[String]) -> bool {
    let lowered = text.to_lowercase();
    block_list
        .iter()
        .map(|word| word.trim().to_lowercase())
        .any(|word| !word.is_empty() && lowered.contains(&word))
}

pub fn validate_player_name(name: &str, constants: &GameConstants) -> ValidationResult {
    let limits = &constants.player;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ValidationResult::error("Name cannot be empty");
    }

    let length = trimmed.chars().count();
    if length < limits.min_name_length {
        return ValidationResult::error(format!(
            "Name must be at least {} characters",
            limits.min_name_length
        ));
    }
    if length > limits.max_name_length {
        return ValidationResult::error(format!(
            "Name cannot exceed {} characters",
            limits.max_name_length
        ));
    }

    if let Some(bad) = trimmed.chars().find(|c| !is_allowed_name_char(*c)) {
        return ValidationResult::error(format!("Name contains invalid character '{}'", bad));
    }

    if contains_profanity(trimmed, &constants.profanity_list) {
        return ValidationResult::error("Name contains inappropriate language");
    }

    if trimmed.contains("  ") {
        return ValidationResult::warning("Name contains consecutive spaces");
    }

    ValidationResult::Valid
}

pub fn validate_player_level(level: i32, constants: &GameConstants) -> ValidationResult {
    let max_level = constants.player.max_level;
    if level < 1 {
        return ValidationResult::error("Level must be at least 1");
    }
    if level > max_level {
        return ValidationResult::error(format!("Level cannot exceed {}", max_level));
    }
    ValidationResult::Valid
}

/// Negative XP is an input error; XP above the absolute ceiling is `Critical`.
pub fn validate_player_xp(xp: i64, constants: &GameConstants) -> ValidationResult {
    if xp < 0 {
        return ValidationResult::error("XP cannot be negative");
    }
    if xp > constants.player.max_xp {
        return ValidationResult::critical(format!(
            "XP {} exceeds the absolute maximum of {}",
            xp, constants.player.max_xp
        ));
    }
    ValidationResult::Valid
}

/// Negative gold is an input error; gold above the absolute ceiling is `Critical`.
pub fn validate_player_gold(gold: i64, constants: &GameConstants) -> ValidationResult {
    if gold < 0 {
        return ValidationResult::error("Gold cannot be negative");
    }
    if gold > constants.player.max_gold {
        return ValidationResult::critical(format!(
            "Gold {} exceeds the absolute maximum of {}",
            gold, constants.player.max_gold
        ));
    }
    ValidationResult::Valid
}

pub fn validate_item_name(name: &str, constants: &GameConstants) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ValidationResult::error("Item name cannot be empty");
    }
    let max = constants.player.max_item_name_length;
    if trimmed.chars().count() > max {
        return ValidationResult::error(format!("Item name cannot exceed {} characters", max));
    }
    if contains_profanity(trimmed, &constants.profanity_list) {
        return ValidationResult::error("Item name contains inappropriate language");
    }
    ValidationResult::Valid
}
