//! Input validation - field rules composed into entity-level checks.
//!
//! Single-field methods return a [`ValidationResult`]. Entity methods
//! (`validate_player`, `validate_quest`, `validate_health_data`) run every
//! relevant rule, add the entity's cross-field checks, and return the full
//! set of failures as a [`ValidationErrorCollection`].

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use questwalk_domain::{
    ErrorContext, GameConstants, HealthData, Player, Quest, Severity, ValidationErrorCollection,
    ValidationResult,
};

use crate::infrastructure::narration::{narrate_collection, narrate_result};
use crate::infrastructure::ports::ClockPort;
use crate::rules;
use crate::use_cases::validation::ErrorSink;

/// Stateless validator over a shared constants table.
///
/// Cheap to clone; holds no per-call state, so one instance can serve any
/// number of concurrent callers.
#[derive(Clone)]
pub struct InputValidator {
    constants: Arc<GameConstants>,
    clock: Arc<dyn ClockPort>,
}

impl InputValidator {
    pub fn new(constants: Arc<GameConstants>, clock: Arc<dyn ClockPort>) -> Self {
        Self { constants, clock }
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // =========================================================================
    // Player fields
    // =========================================================================

    pub fn validate_player_name(&self, name: &str) -> ValidationResult {
        rules::validate_player_name(name, &self.constants)
    }

    pub fn validate_player_level(&self, level: i32) -> ValidationResult {
        rules::validate_player_level(level, &self.constants)
    }

    pub fn validate_player_xp(&self, xp: i64) -> ValidationResult {
        rules::validate_player_xp(xp, &self.constants)
    }

    pub fn validate_player_gold(&self, gold: i64) -> ValidationResult {
        rules::validate_player_gold(gold, &self.constants)
    }

    pub fn validate_item_name(&self, name: &str) -> ValidationResult {
        rules::validate_item_name(name, &self.constants)
    }

    // =========================================================================
    // Health fields
    // =========================================================================

    pub fn validate_steps(&self, steps: i64) -> ValidationResult {
        rules::validate_steps(steps, &self.constants)
    }

    pub fn validate_heart_rate(&self, heart_rate: f64) -> ValidationResult {
        rules::validate_heart_rate(heart_rate, &self.constants)
    }

    pub fn validate_standing_hours(&self, hours: i32) -> ValidationResult {
        rules::validate_standing_hours(hours, &self.constants)
    }

    pub fn validate_exercise_minutes(&self, minutes: i32) -> ValidationResult {
        rules::validate_exercise_minutes(minutes, &self.constants)
    }

    pub fn validate_mindful_minutes(&self, minutes: i32) -> ValidationResult {
        rules::validate_mindful_minutes(minutes, &self.constants)
    }

    // =========================================================================
    // Quest fields
    // =========================================================================

    pub fn validate_quest_title(&self, title: &str) -> ValidationResult {
        rules::validate_quest_title(title, &self.constants)
    }

    pub fn validate_quest_description(&self, description: &str) -> ValidationResult {
        rules::validate_quest_description(description, &self.constants)
    }

    pub fn validate_quest_distance(&self, distance: f64) -> ValidationResult {
        rules::validate_quest_distance(distance, &self.constants)
    }

    pub fn validate_quest_progress(&self, progress: f64) -> ValidationResult {
        rules::validate_quest_progress(progress)
    }

    pub fn validate_quest_reward_xp(&self, reward_xp: i64) -> ValidationResult {
        rules::validate_quest_reward_xp(reward_xp, &self.constants)
    }

    pub fn validate_quest_reward_gold(&self, reward_gold: i64) -> ValidationResult {
        rules::validate_quest_reward_gold(reward_gold, &self.constants)
    }

    // =========================================================================
    // Format fields
    // =========================================================================

    pub fn validate_date(&self, date: DateTime<Utc>) -> ValidationResult {
        rules::validate_date(date, self.now())
    }

    pub fn validate_date_string(&self, value: &str) -> ValidationResult {
        rules::validate_date_string(value, self.now())
    }

    pub fn validate_uuid(&self, value: &str) -> ValidationResult {
        rules::validate_uuid(value)
    }

    pub fn validate_json(&self, value: &str) -> ValidationResult {
        rules::validate_json(value)
    }

    pub fn validate_enum<T: FromStr>(&self, value: &str, type_name: &str) -> ValidationResult {
        rules::validate_enum::<T>(value, type_name)
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Field-level checks for a player snapshot, including inventory item
    /// names and journal entries.
    ///
    /// Capacity, duplicates and level/XP consistency are relationship rules
    /// and live in the business validator.
    pub fn validate_player(&self, player: &Player) -> ValidationErrorCollection {
        let now = self.now();
        let mut sink = ErrorSink::new(now);
        let c = &*self.constants;

        sink.check("name", rules::validate_player_name(&player.name, c));
        sink.check("level", rules::validate_player_level(player.level, c));
        sink.check_with(
            "xp",
            rules::validate_player_xp(player.xp, c),
            ErrorContext::Numeric {
                value: player.xp as f64,
                limit: c.player.max_xp as f64,
            },
        );
        sink.check_with(
            "gold",
            rules::validate_player_gold(player.gold, c),
            ErrorContext::Numeric {
                value: player.gold as f64,
                limit: c.player.max_gold as f64,
            },
        );
        sink.check("steps_today", rules::validate_steps(player.steps_today, c));

        for (index, item) in player.inventory.iter().enumerate() {
            sink.check_with(
                format!("inventory[{}].name", index),
                rules::validate_item_name(&item.name, c),
                ErrorContext::Item {
                    item_id: item.id,
                    rarity: item.rarity,
                },
            );
        }

        for (index, log) in player.journal.iter().enumerate() {
            let context = ErrorContext::Quest {
                quest_id: log.quest_id,
            };
            sink.check_with(
                format!("journal[{}].completed_at", index),
                rules::validate_date(log.completed_at, now),
                context.clone(),
            );
            sink.check_with(
                format!("journal[{}].xp_earned", index),
                rules::validate_quest_reward_xp(log.xp_earned, c),
                context.clone(),
            );
            sink.check_with(
                format!("journal[{}].gold_earned", index),
                rules::validate_quest_reward_gold(log.gold_earned, c),
                context,
            );
        }

        let errors = sink.finish();
        narrate_collection("validate_player", &errors);
        errors
    }

    /// Field checks for a quest plus its cross-field consistency:
    /// progress beyond the tolerance band is a warning, completion without
    /// enough progress is an error.
    pub fn validate_quest(&self, quest: &Quest) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.now());
        let c = &*self.constants;
        let context = ErrorContext::Quest { quest_id: quest.id };

        sink.check_with("title", rules::validate_quest_title(&quest.title, c), context.clone());
        sink.check_with(
            "description",
            rules::validate_quest_description(&quest.description, c),
            context.clone(),
        );
        sink.check_with(
            "total_distance",
            rules::validate_quest_distance(quest.total_distance, c),
            context.clone(),
        );
        let progress_ok = sink.check_with(
            "current_progress",
            rules::validate_quest_progress(quest.current_progress),
            context.clone(),
        );
        sink.check_with(
            "reward_xp",
            rules::validate_quest_reward_xp(quest.reward_xp, c),
            context.clone(),
        );
        sink.check_with(
            "reward_gold",
            rules::validate_quest_reward_gold(quest.reward_gold, c),
            context.clone(),
        );

        // An out-of-range distance still anchors the cross-field checks as long
        // as it is a usable number.
        let distance_usable = quest.total_distance.is_finite() && quest.total_distance > 0.0;
        if distance_usable && progress_ok {
            let tolerance = c.quest.progress_tolerance;
            let limit = quest.total_distance * (1.0 + tolerance);
            if quest.current_progress > limit {
                sink.report(
                    "current_progress",
                    format!(
                        "Progress {:.2} exceeds quest distance {:.2} by more than {:.0}%",
                        quest.current_progress,
                        quest.total_distance,
                        tolerance * 100.0
                    ),
                    Severity::Warning,
                    ErrorContext::Numeric {
                        value: quest.current_progress,
                        limit,
                    },
                );
            }
            if quest.is_completed && quest.current_progress < quest.total_distance {
                sink.report(
                    "is_completed",
                    "Quest is marked completed before reaching its distance",
                    Severity::Error,
                    context,
                );
            }
        }

        let errors = sink.finish();
        narrate_collection("validate_quest", &errors);
        errors
    }

    /// Field checks for a telemetry sample plus a sanity check that the
    /// exercise and mindful minutes fit in one day.
    pub fn validate_health_data(&self, health: &HealthData) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.now());
        let c = &*self.constants;

        sink.check("steps", rules::validate_steps(health.steps, c));
        sink.check(
            "standing_hours",
            rules::validate_standing_hours(health.standing_hours, c),
        );
        sink.check("heart_rate", rules::validate_heart_rate(health.heart_rate, c));
        let exercise_ok = sink.check(
            "exercise_minutes",
            rules::validate_exercise_minutes(health.exercise_minutes, c),
        );
        let mindful_ok = sink.check(
            "mindful_minutes",
            rules::validate_mindful_minutes(health.mindful_minutes, c),
        );

        if exercise_ok && mindful_ok {
            let total = i64::from(health.exercise_minutes) + i64::from(health.mindful_minutes);
            let day = i64::from(c.health.max_daily_exercise_minutes);
            if total > day {
                sink.report(
                    "exercise_minutes",
                    format!(
                        "Exercise and mindful minutes add up to {}, more than a day",
                        total
                    ),
                    Severity::Warning,
                    ErrorContext::Numeric {
                        value: total as f64,
                        limit: day as f64,
                    },
                );
            }
        }

        let errors = sink.finish();
        narrate_collection("validate_health_data", &errors);
        errors
    }

    /// Checks that `to` is a legal successor of `from`.
    ///
    /// Identity change, decreasing progress and un-completion are errors;
    /// a changed `total_distance` is a warning. The first failure wins.
    pub fn validate_quest_state_transition(&self, from: &Quest, to: &Quest) -> ValidationResult {
        let result = if from.id != to.id {
            ValidationResult::error("Cannot transition between different quests")
        } else if !to.current_progress.is_finite() {
            ValidationResult::error("Quest progress must be a finite number")
        } else if to.current_progress < from.current_progress {
            ValidationResult::error("Quest progress cannot decrease")
        } else if from.is_completed && !to.is_completed {
            ValidationResult::error("Completed quest cannot be reopened")
        } else if from.total_distance != to.total_distance {
            ValidationResult::warning("Quest distance cannot change after creation")
        } else {
            ValidationResult::Valid
        };
        narrate_result("validate_quest_state_transition", &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{fixed_now, input_validator, quest};
    use questwalk_domain::{HeroClass, Item, ItemRarity, QuestId, QuestLog};

    #[test]
    fn test_valid_player_has_no_errors() {
        let v = input_validator();
        let player = Player::new("Sir Knight", HeroClass::Warrior)
            .with_level(2)
            .with_xp(150)
            .with_gold(20)
            .with_inventory(vec![Item::new("Iron Sword", ItemRarity::Common)]);
        assert!(v.validate_player(&player).is_empty());
    }

    #[test]
    fn test_player_collects_every_failure() {
        let v = input_validator();
        let mut player = Player::new("", HeroClass::Mage)
            .with_level(0)
            .with_xp(-10)
            .with_gold(5_000_000);
        player.steps_today = -1;
        let errors = v.validate_player(&player);

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "level", "xp", "gold", "steps_today"]);
        assert!(errors.has_blocking_errors());
        assert_eq!(errors.highest_severity(), Some(Severity::Critical));
        assert!(errors.iter().all(|e| e.timestamp == fixed_now()));
    }

    #[test]
    fn test_player_inventory_and_journal_fields() {
        let v = input_validator();
        let log = QuestLog {
            quest_id: QuestId::new(),
            title: "From the future".into(),
            completed_at: fixed_now() + chrono::Duration::days(2),
            distance: 5.0,
            xp_earned: -3,
            gold_earned: 1,
        };
        let player = Player::new("Aria", HeroClass::Cleric)
            .with_inventory(vec![Item::new("", ItemRarity::Rare)])
            .with_journal(vec![log]);
        let errors = v.validate_player(&player);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "inventory[0].name",
                "journal[0].completed_at",
                "journal[0].xp_earned"
            ]
        );
    }

    #[test]
    fn test_valid_quest() {
        let v = input_validator();
        assert!(v.validate_quest(&quest(100.0, 40.0)).is_empty());
    }

    #[test]
    fn test_quest_progress_within_tolerance_is_fine() {
        let v = input_validator();
        assert!(v.validate_quest(&quest(100.0, 110.0)).is_empty());
    }

    #[test]
    fn test_quest_progress_beyond_tolerance_warns() {
        let v = input_validator();
        let errors = v.validate_quest(&quest(100.0, 110.5));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "current_progress");
        assert_eq!(errors.errors()[0].severity, Severity::Warning);
        assert!(errors.has_only_warnings());
    }

    #[test]
    fn test_quest_completed_without_progress_is_error() {
        let v = input_validator();
        let mut q = quest(100.0, 60.0);
        q.is_completed = true;
        let errors = v.validate_quest(&q);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "is_completed");
        assert_eq!(errors.errors()[0].severity, Severity::Error);
    }

    #[test]
    fn test_quest_non_finite_values_skip_cross_checks() {
        let v = input_validator();
        let mut q = quest(100.0, 0.0);
        q.total_distance = f64::NAN;
        q.current_progress = f64::INFINITY;
        q.is_completed = true;
        let errors = v.validate_quest(&q);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["total_distance", "current_progress"]);
    }

    #[test]
    fn test_quest_over_max_distance_keeps_cross_checks() {
        let v = input_validator();
        let mut q = quest(20_000.0, 5.0);
        q.is_completed = true;
        let errors = v.validate_quest(&q);
        let found: Vec<(&str, Severity)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.severity))
            .collect();
        assert_eq!(
            found,
            vec![
                ("total_distance", Severity::Error),
                ("is_completed", Severity::Error)
            ]
        );

        let overshoot = v.validate_quest(&quest(20_000.0, 30_000.0));
        assert_eq!(
            overshoot.for_field("current_progress").next().map(|e| e.severity),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_health_data_valid() {
        let v = input_validator();
        let sample = HealthData {
            steps: 8000,
            standing_hours: 9,
            heart_rate: 88.0,
            exercise_minutes: 45,
            mindful_minutes: 10,
        };
        assert!(v.validate_health_data(&sample).is_empty());
    }

    #[test]
    fn test_health_data_collects_failures() {
        let v = input_validator();
        let sample = HealthData {
            steps: -5,
            standing_hours: 30,
            heart_rate: 400.0,
            exercise_minutes: 2000,
            mindful_minutes: -1,
        };
        let errors = v.validate_health_data(&sample);
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.breakdown().error, 5);
    }

    #[test]
    fn test_health_minutes_exceeding_a_day_warns() {
        let v = input_validator();
        let sample = HealthData {
            exercise_minutes: 1000,
            mindful_minutes: 600,
            ..HealthData::default()
        };
        let errors = v.validate_health_data(&sample);
        assert!(errors.has_only_warnings());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_transition_progress_cannot_decrease() {
        let v = input_validator();
        let from = quest(100.0, 50.0);
        let to = from.with_progress(30.0);
        let result = v.validate_quest_state_transition(&from, &to);
        assert_eq!(result, ValidationResult::error("Quest progress cannot decrease"));
    }

    #[test]
    fn test_transition_cannot_uncomplete() {
        let v = input_validator();
        let from = quest(100.0, 100.0).complete().unwrap();
        let mut to = from.clone();
        to.is_completed = false;
        let result = v.validate_quest_state_transition(&from, &to);
        assert_eq!(result.severity(), Some(Severity::Error));
        assert_eq!(result.message(), Some("Completed quest cannot be reopened"));
    }

    #[test]
    fn test_transition_requires_same_quest() {
        let v = input_validator();
        let result = v.validate_quest_state_transition(&quest(10.0, 1.0), &quest(10.0, 2.0));
        assert_eq!(result.severity(), Some(Severity::Error));
    }

    #[test]
    fn test_transition_distance_drift_warns() {
        let v = input_validator();
        let from = quest(100.0, 10.0);
        let mut to = from.with_progress(20.0);
        to.total_distance = 80.0;
        let result = v.validate_quest_state_transition(&from, &to);
        assert_eq!(result.severity(), Some(Severity::Warning));
    }

    #[test]
    fn test_transition_forward_is_valid() {
        let v = input_validator();
        let from = quest(100.0, 10.0);
        assert!(v
            .validate_quest_state_transition(&from, &from.with_progress(10.0))
            .is_valid());
        assert!(v
            .validate_quest_state_transition(&from, &from.with_progress(55.5))
            .is_valid());
    }

    #[test]
    fn test_primitive_delegates() {
        let v = input_validator();
        assert!(v.validate_player_name("Sir Knight").is_valid());
        assert_eq!(
            v.validate_player_name("AB  CD").severity(),
            Some(Severity::Warning)
        );
        let max = v.constants().player.max_level;
        assert!(v.validate_player_level(max).is_valid());
        assert!(!v.validate_player_level(max + 1).is_valid());
        assert!(v.validate_enum::<HeroClass>("rogue", "hero class").is_valid());
        assert!(v.validate_date_string("2024-05-01T00:00:00Z").is_valid());
    }
}
