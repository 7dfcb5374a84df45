//! Quest fields.

use questwalk_domain::{GameConstants, ValidationResult};

use super::contains_profanity;

pub fn validate_quest_title(title: &str, constants: &GameConstants) -> ValidationResult {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return ValidationResult::error("Quest title cannot be empty");
    }
    let max = constants.quest.max_title_length;
    if trimmed.chars().count() > max {
        return ValidationResult::error(format!("Quest title cannot exceed {} characters", max));
    }
    if contains_profanity(trimmed, &constants.profanity_list) {
        return ValidationResult::error("Quest title contains inappropriate language");
    }
    ValidationResult::Valid
}

pub fn validate_quest_description(description: &str, constants: &GameConstants) -> ValidationResult {
    let max = constants.quest.max_description_length;
    if description.chars().count() > max {
        return ValidationResult::error(format!(
            "Quest description cannot exceed {} characters",
            max
        ));
    }
    ValidationResult::Valid
}

pub fn validate_quest_distance(distance: f64, constants: &GameConstants) -> ValidationResult {
    if !distance.is_finite() {
        return ValidationResult::error("Quest distance must be a finite number");
    }
    if distance <= 0.0 {
        return ValidationResult::error("Quest distance must be positive");
    }
    let max = constants.quest.max_distance;
    if distance > max {
        return ValidationResult::error(format!("Quest distance cannot exceed {}", max));
    }
    ValidationResult::Valid
}

/// Progress on its own: finite and non-negative. The comparison against the
/// quest's distance is a cross-field check made by the quest validator.
pub fn validate_quest_progress(progress: f64) -> ValidationResult {
    if !progress.is_finite() {
        return ValidationResult::error("Quest progress must be a finite number");
    }
    if progress < 0.0 {
        return ValidationResult::error("Quest progress cannot be negative");
    }
    ValidationResult::Valid
}

pub fn validate_quest_reward_xp(reward_xp: i64, constants: &GameConstants) -> ValidationResult {
    if reward_xp < 0 {
        return ValidationResult::error("Quest XP reward cannot be negative");
    }
    let max = constants.quest.max_reward_xp;
    if reward_xp > max {
        return ValidationResult::error(format!("Quest XP reward cannot exceed {}", max));
    }
    ValidationResult::Valid
}

pub fn validate_quest_reward_gold(reward_gold: i64, constants: &GameConstants) -> ValidationResult {
    if reward_gold < 0 {
        return ValidationResult::error("Quest gold reward cannot be negative");
    }
    let max = constants.quest.max_reward_gold;
    if reward_gold > max {
        return ValidationResult::error(format!("Quest gold reward cannot exceed {}", max));
    }
    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use questwalk_domain::Severity;

    fn constants() -> GameConstants {
        GameConstants::default()
    }

    #[test]
    fn test_title() {
        let c = constants();
        assert!(validate_quest_title("The Long Walk", &c).is_valid());
        assert!(validate_quest_title("", &c).is_blocking());
        assert!(validate_quest_title(&"t".repeat(50), &c).is_valid());
        assert!(validate_quest_title(&"t".repeat(51), &c).is_blocking());
    }

    #[test]
    fn test_description_may_be_empty() {
        let c = constants();
        assert!(validate_quest_description("", &c).is_valid());
        assert!(validate_quest_description(&"d".repeat(501), &c).is_blocking());
    }

    #[test]
    fn test_distance_rejects_non_finite() {
        let c = constants();
        assert_eq!(validate_quest_distance(f64::NAN, &c).severity(), Some(Severity::Error));
        assert_eq!(
            validate_quest_distance(f64::NEG_INFINITY, &c).severity(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_distance_bounds() {
        let c = constants();
        assert!(validate_quest_distance(0.0, &c).is_blocking());
        assert!(validate_quest_distance(0.5, &c).is_valid());
        assert!(validate_quest_distance(10_000.0, &c).is_valid());
        assert!(validate_quest_distance(10_000.5, &c).is_blocking());
    }

    #[test]
    fn test_progress() {
        assert!(validate_quest_progress(0.0).is_valid());
        assert!(validate_quest_progress(42.5).is_valid());
        assert!(validate_quest_progress(-0.1).is_blocking());
        assert!(validate_quest_progress(f64::INFINITY).is_blocking());
        assert!(validate_quest_progress(f64::NAN).is_blocking());
    }

    #[test]
    fn test_rewards() {
        let c = constants();
        assert!(validate_quest_reward_xp(50, &c).is_valid());
        assert!(validate_quest_reward_xp(-1, &c).is_blocking());
        assert!(validate_quest_reward_xp(10_001, &c).is_blocking());
        assert!(validate_quest_reward_gold(0, &c).is_valid());
        assert!(validate_quest_reward_gold(10_001, &c).is_blocking());
    }
}
