//! Business logic validation - rules that need more than one field or
//! more than one entity.
//!
//! Everything here is a read-only check over value snapshots. Single-verdict
//! rules return a [`ValidationResult`]; audits that can find several
//! problems at once return a [`ValidationErrorCollection`].

use std::collections::HashSet;

use questwalk_domain::{
    ErrorContext, GainContext, GameConstants, HealthData, Item, Player, Quest, QuestId, Severity,
    ValidationErrorCollection, ValidationResult,
};

use crate::infrastructure::narration::{narrate_collection, narrate_result};
use crate::rules;
use crate::use_cases::input_validation::InputValidator;
use crate::use_cases::validation::ErrorSink;

/// Stateless facade over [`InputValidator`] plus the relationship rules:
/// levelling, gain ceilings, quest completion and rewards, gold spending,
/// inventory, telemetry plausibility and the full game-state audit.
#[derive(Clone)]
pub struct BusinessLogicValidator {
    input: InputValidator,
}

impl BusinessLogicValidator {
    pub fn new(input: InputValidator) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &InputValidator {
        &self.input
    }

    fn constants(&self) -> &GameConstants {
        self.input.constants()
    }

    // =========================================================================
    // Levels
    // =========================================================================

    /// Total XP needed to reach `level`, summed step by step along the curve.
    pub fn required_xp_for_level(&self, level: i32) -> i64 {
        self.constants().experience_curve.min_xp_for_level(level)
    }

    /// Inverse of [`required_xp_for_level`](Self::required_xp_for_level),
    /// capped at the maximum level.
    pub fn calculate_level_from_xp(&self, xp: i64) -> i32 {
        let constants = self.constants();
        constants
            .experience_curve
            .level_for_xp(xp.max(0), constants.player.max_level)
    }

    /// A player may only advance one level at a time, never past the cap,
    /// and only with enough accumulated XP. Both levels go through the level
    /// field rule first.
    pub fn validate_level_up(&self, player: &Player, target_level: i32) -> ValidationResult {
        let constants = self.constants();
        let current_rule = rules::validate_player_level(player.level, constants);
        let target_rule = rules::validate_player_level(target_level, constants);
        let result = if !current_rule.is_valid() {
            current_rule
        } else if !target_rule.is_valid() {
            target_rule
        } else if target_level != player.level.saturating_add(1) {
            ValidationResult::error(format!(
                "Cannot level up from {} to {}: levels advance one at a time",
                player.level, target_level
            ))
        } else {
            let required = self.required_xp_for_level(target_level);
            if player.xp < required {
                ValidationResult::error(format!(
                    "Level {} requires {} XP, player has {}",
                    target_level, required, player.xp
                ))
            } else {
                ValidationResult::Valid
            }
        };
        narrate_result("validate_level_up", &result);
        result
    }

    /// Soft band check: XP below the player's level band is an error, XP
    /// that already covers the next level is a warning (a level-up was
    /// missed). Levels outside `1..=max` are left to the level field rule.
    pub fn validate_level_consistency(&self, player: &Player) -> ValidationResult {
        let max_level = self.constants().player.max_level;
        let result = if player.level < 1 || player.level > max_level {
            ValidationResult::Valid
        } else {
            let (band_min, band_max) = self.constants().experience_curve.band(player.level);
            if player.xp < band_min {
                ValidationResult::error(format!(
                    "Level {} requires at least {} XP, player has {}",
                    player.level, band_min, player.xp
                ))
            } else if player.level < max_level && player.xp >= band_max {
                ValidationResult::warning(format!(
                    "Player has {} XP, enough for level {}",
                    player.xp,
                    self.calculate_level_from_xp(player.xp)
                ))
            } else {
                ValidationResult::Valid
            }
        };
        narrate_result("validate_level_consistency", &result);
        result
    }

    /// Band context for the XP consistency entry; out-of-range levels get
    /// none since the level field rule already reports them.
    fn level_band_context(&self, player: &Player) -> ErrorContext {
        let constants = self.constants();
        if player.level < 1 || player.level > constants.player.max_level {
            return ErrorContext::None;
        }
        let (band_min, band_max) = constants.experience_curve.band(player.level);
        ErrorContext::LevelBand {
            level: player.level,
            xp: player.xp,
            band_min,
            band_max,
        }
    }

    // =========================================================================
    // Anti-exploitation ceilings
    // =========================================================================

    /// Negative gains are errors; a resulting total over the absolute
    /// ceiling goes through the XP field rule (critical); a gain above the
    /// context ceiling is a warning.
    pub fn validate_xp_gain(
        &self,
        current_xp: i64,
        gain: i64,
        context: impl Into<GainContext>,
    ) -> ValidationResult {
        let context = context.into();
        let constants = self.constants();
        let result = check_gain(
            "XP",
            gain,
            constants.xp_ceilings.for_context(context),
            context,
            rules::validate_player_xp(current_xp.saturating_add(gain), constants),
        );
        narrate_result("validate_xp_gain", &result);
        result
    }

    pub fn validate_gold_gain(
        &self,
        current_gold: i64,
        gain: i64,
        context: impl Into<GainContext>,
    ) -> ValidationResult {
        let context = context.into();
        let constants = self.constants();
        let result = check_gain(
            "Gold",
            gain,
            constants.gold_ceilings.for_context(context),
            context,
            rules::validate_player_gold(current_gold.saturating_add(gain), constants),
        );
        narrate_result("validate_gold_gain", &result);
        result
    }

    /// Positive amounts are gains; negative amounts are spending, which needs
    /// a sufficient balance and is flagged when it exceeds
    /// `max(balance / 2, suspicious_spend_floor)`.
    pub fn validate_gold_transaction(
        &self,
        current_gold: i64,
        amount: i64,
        context: impl Into<GainContext>,
    ) -> ValidationResult {
        if amount >= 0 {
            return self.validate_gold_gain(current_gold, amount, context);
        }

        let spend = amount.saturating_neg();
        let threshold = (current_gold / 2).max(self.constants().economy.suspicious_spend_floor);
        let result = if spend > current_gold {
            ValidationResult::error(format!(
                "Insufficient gold: spending {} with a balance of {}",
                spend, current_gold
            ))
        } else if spend > threshold {
            ValidationResult::warning(format!(
                "Suspicious transaction: spending {} exceeds {}",
                spend, threshold
            ))
        } else {
            ValidationResult::Valid
        };
        narrate_result("validate_gold_transaction", &result);
        result
    }

    // =========================================================================
    // Quests
    // =========================================================================

    /// Eligibility to mark a quest completed.
    pub fn validate_quest_completion(&self, quest: &Quest) -> ValidationResult {
        let result = if quest.is_completed {
            ValidationResult::error("Quest is already completed")
        } else if !quest.current_progress.is_finite() {
            ValidationResult::error("Quest progress must be a finite number")
        } else if quest.current_progress < quest.total_distance {
            ValidationResult::error(format!(
                "Quest progress {:.2} has not reached {:.2}",
                quest.current_progress, quest.total_distance
            ))
        } else {
            ValidationResult::Valid
        };
        narrate_result("validate_quest_completion", &result);
        result
    }

    /// Both halves of a quest reward, checked as quest-completion gains.
    /// The more severe verdict is returned.
    pub fn validate_quest_reward(
        &self,
        quest: &Quest,
        current_xp: i64,
        current_gold: i64,
    ) -> ValidationResult {
        ValidationResult::most_severe([
            self.validate_xp_gain(current_xp, quest.reward_xp, GainContext::QuestCompletion),
            self.validate_gold_gain(current_gold, quest.reward_gold, GainContext::QuestCompletion),
        ])
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Capacity, item names and suspicious high-tier duplicates.
    pub fn validate_inventory(&self, inventory: &[Item]) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.input.now());
        let constants = self.constants();
        for (index, item) in inventory.iter().enumerate() {
            sink.check_with(
                format!("inventory[{}].name", index),
                rules::validate_item_name(&item.name, constants),
                ErrorContext::Item {
                    item_id: item.id,
                    rarity: item.rarity,
                },
            );
        }
        self.check_inventory_shape(&mut sink, inventory);

        let errors = sink.finish();
        narrate_collection("validate_inventory", &errors);
        errors
    }

    fn check_inventory_shape(&self, sink: &mut ErrorSink, inventory: &[Item]) {
        let capacity = self.constants().player.max_inventory_size;
        if inventory.len() > capacity {
            sink.report(
                "inventory",
                format!(
                    "Inventory holds {} items, capacity is {}",
                    inventory.len(),
                    capacity
                ),
                Severity::Error,
                ErrorContext::Inventory {
                    count: inventory.len(),
                    capacity,
                },
            );
        }

        for (index, item) in inventory.iter().enumerate() {
            if is_suspicious_duplicate(&inventory[..index], item) {
                sink.report(
                    format!("inventory[{}]", index),
                    duplicate_message(item),
                    Severity::Warning,
                    ErrorContext::Item {
                        item_id: item.id,
                        rarity: item.rarity,
                    },
                );
            }
        }
    }

    /// Whether `item` may be added to `inventory`. The most severe of the
    /// capacity, name and duplicate checks is returned.
    pub fn validate_item_acquisition(&self, inventory: &[Item], item: &Item) -> ValidationResult {
        let capacity = self.constants().player.max_inventory_size;
        let capacity_check = if inventory.len() >= capacity {
            ValidationResult::error(format!("Inventory is full ({} items)", capacity))
        } else {
            ValidationResult::Valid
        };
        let duplicate_check = if is_suspicious_duplicate(inventory, item) {
            ValidationResult::warning(duplicate_message(item))
        } else {
            ValidationResult::Valid
        };
        let result = ValidationResult::most_severe([
            capacity_check,
            rules::validate_item_name(&item.name, self.constants()),
            duplicate_check,
        ]);
        narrate_result("validate_item_acquisition", &result);
        result
    }

    // =========================================================================
    // Telemetry
    // =========================================================================

    /// Field checks on the current sample plus anomaly warnings against the
    /// previous one: a step increase above the delta threshold, or a heart
    /// rate jump above its threshold when both readings are present.
    pub fn validate_health_for_gameplay(
        &self,
        current: &HealthData,
        previous: Option<&HealthData>,
    ) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.input.now());
        sink.absorb(self.input.validate_health_data(current));

        if let Some(previous) = previous {
            let limits = &self.constants().health;

            let step_increase = current.steps.saturating_sub(previous.steps);
            if step_increase > limits.max_step_delta {
                sink.report(
                    "steps",
                    format!(
                        "Step count jumped by {} since the previous sample",
                        step_increase
                    ),
                    Severity::Warning,
                    ErrorContext::Telemetry {
                        previous: previous.steps as f64,
                        current: current.steps as f64,
                        threshold: limits.max_step_delta as f64,
                    },
                );
            }

            if current.has_heart_rate() && previous.has_heart_rate() {
                let delta = (current.heart_rate - previous.heart_rate).abs();
                if delta > limits.max_heart_rate_delta {
                    sink.report(
                        "heart_rate",
                        format!("Heart rate changed by {:.0} BPM between samples", delta),
                        Severity::Warning,
                        ErrorContext::Telemetry {
                            previous: previous.heart_rate,
                            current: current.heart_rate,
                            threshold: limits.max_heart_rate_delta,
                        },
                    );
                }
            }
        }

        let errors = sink.finish();
        narrate_collection("validate_health_for_gameplay", &errors);
        errors
    }

    // =========================================================================
    // Game state
    // =========================================================================

    /// Consistency between a player's journal and their active quests.
    pub fn validate_quest_relationships(
        &self,
        player: &Player,
        quests: &[Quest],
    ) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.input.now());
        self.check_relationships(&mut sink, player, quests);
        let errors = sink.finish();
        narrate_collection("validate_quest_relationships", &errors);
        errors
    }

    fn check_relationships(&self, sink: &mut ErrorSink, player: &Player, quests: &[Quest]) {
        let max_active = self.constants().quest.max_active_quests;
        if quests.len() > max_active {
            sink.report(
                "quests",
                format!(
                    "{} active quests, at most {} expected",
                    quests.len(),
                    max_active
                ),
                Severity::Warning,
                ErrorContext::Numeric {
                    value: quests.len() as f64,
                    limit: max_active as f64,
                },
            );
        }

        let mut seen: HashSet<QuestId> = HashSet::new();
        for (index, quest) in quests.iter().enumerate() {
            let field = format!("quests[{}]", index);
            let context = ErrorContext::Quest { quest_id: quest.id };
            if !seen.insert(quest.id) {
                sink.report(
                    format!("{}.id", field),
                    "Quest appears more than once among active quests",
                    Severity::Error,
                    context,
                );
                continue;
            }
            let journaled = player.has_completed(quest.id);
            if !quest.is_completed && journaled {
                sink.report(
                    field,
                    "Quest is active but already recorded in the journal",
                    Severity::Warning,
                    context,
                );
            } else if quest.is_completed && !journaled {
                sink.report(
                    field,
                    "Completed quest has not been recorded in the journal yet",
                    Severity::Info,
                    context,
                );
            }
        }

        let mut journaled: HashSet<QuestId> = HashSet::new();
        for (index, log) in player.journal.iter().enumerate() {
            if !journaled.insert(log.quest_id) {
                sink.report(
                    format!("journal[{}].quest_id", index),
                    "Quest is recorded in the journal more than once",
                    Severity::Warning,
                    ErrorContext::Quest {
                        quest_id: log.quest_id,
                    },
                );
            }
        }
    }

    /// Periodic consistency sweep: player fields, inventory, every active
    /// quest, quest relationships and level/XP consistency, in one collection.
    pub fn validate_game_state(
        &self,
        player: &Player,
        quests: &[Quest],
    ) -> ValidationErrorCollection {
        let mut sink = ErrorSink::new(self.input.now());

        sink.absorb(self.input.validate_player(player));
        self.check_inventory_shape(&mut sink, &player.inventory);
        for (index, quest) in quests.iter().enumerate() {
            sink.absorb_prefixed(
                &format!("quests[{}]", index),
                self.input.validate_quest(quest),
                ErrorContext::Quest { quest_id: quest.id },
            );
        }
        self.check_relationships(&mut sink, player, quests);
        sink.check_with(
            "xp",
            self.validate_level_consistency(player),
            self.level_band_context(player),
        );

        let errors = sink.finish();
        tracing::info!(
            player_id = %player.id,
            quests = quests.len(),
            problems = errors.len(),
            blocking = errors.has_blocking_errors(),
            "Game state audited"
        );
        narrate_collection("validate_game_state", &errors);
        errors
    }
}

fn check_gain(
    label: &str,
    gain: i64,
    ceiling: i64,
    context: GainContext,
    new_total: ValidationResult,
) -> ValidationResult {
    if gain < 0 {
        return ValidationResult::error(format!("{} gain cannot be negative", label));
    }
    if !new_total.is_valid() {
        return new_total;
    }
    if gain > ceiling {
        return ValidationResult::warning(format!(
            "{} gain of {} exceeds the {} ceiling of {}",
            label, gain, context, ceiling
        ));
    }
    ValidationResult::Valid
}

/// A high-tier item sharing its (case-insensitive) name and rarity with
/// something already held.
fn is_suspicious_duplicate(held: &[Item], item: &Item) -> bool {
    if !item.rarity.is_high_tier() {
        return false;
    }
    let name = item.name.trim().to_lowercase();
    held.iter()
        .any(|other| other.rarity == item.rarity && other.name.trim().to_lowercase() == name)
}

fn duplicate_message(item: &Item) -> String {
    format!(
        "Duplicate {} item '{}' looks suspicious",
        item.rarity,
        item.name.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{business_validator, quest};
    use chrono::Duration;
    use questwalk_domain::{HeroClass, ItemRarity, QuestLog};

    fn player() -> Player {
        Player::new("Sir Knight", HeroClass::Warrior)
    }

    #[test]
    fn test_required_xp_accumulates() {
        let v = business_validator();
        assert_eq!(v.required_xp_for_level(1), 0);
        assert_eq!(v.required_xp_for_level(2), 100);
        assert_eq!(v.required_xp_for_level(3), 383);
        assert_eq!(v.calculate_level_from_xp(0), 1);
        assert_eq!(v.calculate_level_from_xp(99), 1);
        assert_eq!(v.calculate_level_from_xp(100), 2);
        assert_eq!(v.calculate_level_from_xp(382), 2);
        assert_eq!(v.calculate_level_from_xp(383), 3);
        assert_eq!(v.calculate_level_from_xp(-50), 1);
    }

    #[test]
    fn test_level_and_xp_inverse_agree() {
        let v = business_validator();
        for level in 1..=30 {
            let required = v.required_xp_for_level(level);
            assert_eq!(v.calculate_level_from_xp(required), level);
            if level > 1 {
                assert_eq!(v.calculate_level_from_xp(required - 1), level - 1);
            }
        }
    }

    #[test]
    fn test_level_up() {
        let v = business_validator();
        assert!(v.validate_level_up(&player().with_xp(100), 2).is_valid());
        assert_eq!(
            v.validate_level_up(&player().with_xp(99), 2).severity(),
            Some(Severity::Error)
        );
        assert_eq!(
            v.validate_level_up(&player().with_xp(10_000), 3).severity(),
            Some(Severity::Error)
        );
        assert!(!v.validate_level_up(&player().with_level(100), 101).is_valid());
    }

    #[test]
    fn test_level_up_rejects_out_of_range_levels() {
        let v = business_validator();
        let below_floor = v.validate_level_up(&player().with_level(-5), -4);
        assert_eq!(below_floor.severity(), Some(Severity::Error));
        assert_eq!(below_floor.message(), Some("Level must be at least 1"));

        let from_zero = v.validate_level_up(&player().with_level(0), 1);
        assert_eq!(from_zero.severity(), Some(Severity::Error));

        let corrupt = player().with_level(i32::MAX).with_xp(i64::MAX);
        let past_cap = v.validate_level_up(&corrupt, i32::MAX);
        assert_eq!(past_cap.severity(), Some(Severity::Error));
    }

    #[test]
    fn test_level_consistency() {
        let v = business_validator();
        let p = player().with_level(2);
        assert!(v.validate_level_consistency(&p.clone().with_xp(150)).is_valid());
        assert_eq!(
            v.validate_level_consistency(&p.clone().with_xp(50)).severity(),
            Some(Severity::Error)
        );
        assert_eq!(
            v.validate_level_consistency(&p.with_xp(383)).severity(),
            Some(Severity::Warning)
        );
        assert!(v.validate_level_consistency(&player().with_level(0)).is_valid());
    }

    #[test]
    fn test_xp_gain_ceilings() {
        let v = business_validator();
        let over = v.validate_xp_gain(0, 100_000, "encounter");
        assert_eq!(over.severity(), Some(Severity::Warning));
        assert!(over.can_proceed());

        assert!(v.validate_xp_gain(0, 150, "quest_completion").is_valid());
        assert!(v.validate_xp_gain(0, 200, GainContext::Encounter).is_valid());
        assert_eq!(
            v.validate_xp_gain(0, 51, "mystery").severity(),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_negative_gain_is_error() {
        let v = business_validator();
        assert_eq!(
            v.validate_xp_gain(10, -1, "encounter").severity(),
            Some(Severity::Error)
        );
        assert_eq!(
            v.validate_gold_gain(10, -1, "encounter").severity(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_gain_past_absolute_ceiling_is_critical() {
        let v = business_validator();
        let result = v.validate_xp_gain(999_990, 20, "quest_completion");
        assert_eq!(result.severity(), Some(Severity::Critical));
        assert!(result.is_blocking());
        assert_eq!(
            v.validate_gold_gain(1_000_000, 1, "daily_bonus").severity(),
            Some(Severity::Critical)
        );
    }

    #[test]
    fn test_quest_completion() {
        let v = business_validator();
        assert!(v.validate_quest_completion(&quest(100.0, 100.0)).is_valid());
        assert!(v.validate_quest_completion(&quest(100.0, 104.0)).is_valid());
        assert_eq!(
            v.validate_quest_completion(&quest(100.0, 99.9)).severity(),
            Some(Severity::Error)
        );
        let done = quest(100.0, 100.0).complete().unwrap();
        assert_eq!(
            v.validate_quest_completion(&done).message(),
            Some("Quest is already completed")
        );
        assert!(!v
            .validate_quest_completion(&quest(100.0, f64::NAN))
            .is_valid());
    }

    #[test]
    fn test_quest_reward_takes_most_severe() {
        let v = business_validator();
        let mut q = quest(100.0, 100.0);
        q.reward_xp = 50;
        q.reward_gold = 10;
        assert!(v.validate_quest_reward(&q, 0, 0).is_valid());

        q.reward_gold = 600;
        assert_eq!(
            v.validate_quest_reward(&q, 0, 0).severity(),
            Some(Severity::Warning)
        );
        assert_eq!(
            v.validate_quest_reward(&q, 999_999, 0).severity(),
            Some(Severity::Critical)
        );
    }

    #[test]
    fn test_gold_transactions() {
        let v = business_validator();
        assert!(v.validate_gold_transaction(500, -200, "encounter").is_valid());
        assert_eq!(
            v.validate_gold_transaction(100, -200, "encounter").severity(),
            Some(Severity::Error)
        );
        // threshold is max(5000 / 2, 1000) = 2500
        assert!(v.validate_gold_transaction(5000, -2500, "encounter").is_valid());
        assert_eq!(
            v.validate_gold_transaction(5000, -2501, "encounter").severity(),
            Some(Severity::Warning)
        );
        assert_eq!(
            v.validate_gold_transaction(0, 80, "daily_bonus").severity(),
            Some(Severity::Warning)
        );
        assert!(v.validate_gold_transaction(0, 0, "daily_bonus").is_valid());
    }

    #[test]
    fn test_inventory_capacity_and_duplicates() {
        let v = business_validator();
        let sword = Item::new("Excalibur", ItemRarity::Legendary);
        let copy = Item::new("excalibur ", ItemRarity::Legendary);
        let common = Item::new("Bread", ItemRarity::Common);
        let errors = v.validate_inventory(&[sword, copy, common.clone(), common]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "inventory[1]");
        assert!(errors.has_only_warnings());

        let full: Vec<Item> = (0..51)
            .map(|i| Item::new(format!("Pebble {}", i), ItemRarity::Common))
            .collect();
        let errors = v.validate_inventory(&full);
        assert!(errors.has_blocking_errors());
        assert!(matches!(
            errors.errors()[0].context,
            ErrorContext::Inventory {
                count: 51,
                capacity: 50
            }
        ));
    }

    #[test]
    fn test_item_acquisition() {
        let v = business_validator();
        let held = vec![Item::new("Dragon Scale", ItemRarity::Epic)];
        assert!(v
            .validate_item_acquisition(&held, &Item::new("Dragon Scale", ItemRarity::Rare))
            .is_valid());
        assert_eq!(
            v.validate_item_acquisition(&held, &Item::new("Dragon Scale", ItemRarity::Epic))
                .severity(),
            Some(Severity::Warning)
        );

        let full: Vec<Item> = (0..50)
            .map(|i| Item::new(format!("Pebble {}", i), ItemRarity::Common))
            .collect();
        assert_eq!(
            v.validate_item_acquisition(&full, &Item::new("Pebble", ItemRarity::Common))
                .severity(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_health_anomalies() {
        let v = business_validator();
        let previous = HealthData {
            steps: 2_000,
            heart_rate: 70.0,
            ..HealthData::default()
        };
        let calm = HealthData {
            steps: 9_000,
            heart_rate: 110.0,
            ..HealthData::default()
        };
        assert!(v.validate_health_for_gameplay(&calm, Some(&previous)).is_empty());

        let spiky = HealthData {
            steps: 12_001,
            heart_rate: 121.0,
            ..HealthData::default()
        };
        let errors = v.validate_health_for_gameplay(&spiky, Some(&previous));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["steps", "heart_rate"]);
        assert!(errors.has_only_warnings());
    }

    #[test]
    fn test_health_anomalies_ignore_missing_heart_rate_and_rollover() {
        let v = business_validator();
        let previous = HealthData {
            steps: 40_000,
            heart_rate: 0.0,
            ..HealthData::default()
        };
        let current = HealthData {
            steps: 100,
            heart_rate: 150.0,
            ..HealthData::default()
        };
        assert!(v
            .validate_health_for_gameplay(&current, Some(&previous))
            .is_empty());
        assert!(v.validate_health_for_gameplay(&current, None).is_empty());
    }

    #[test]
    fn test_quest_relationships() {
        let v = business_validator();
        let journaled = quest(10.0, 2.0);
        let log = QuestLog {
            quest_id: journaled.id,
            title: journaled.title.clone(),
            completed_at: crate::test_fixtures::fixed_now() - Duration::days(1),
            distance: 10.0,
            xp_earned: 10,
            gold_earned: 1,
        };
        let p = player().with_journal(vec![log.clone(), log]);
        let fresh = quest(5.0, 1.0);
        let errors = v.validate_quest_relationships(&p, &[journaled, fresh.clone(), fresh]);

        let summary: Vec<(&str, Severity)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.severity))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("quests[0]", Severity::Warning),
                ("quests[2].id", Severity::Error),
                ("journal[1].quest_id", Severity::Warning),
            ]
        );
    }

    #[test]
    fn test_too_many_active_quests_warns() {
        let v = business_validator();
        let quests: Vec<Quest> = (0..11).map(|_| quest(10.0, 0.0)).collect();
        let errors = v.validate_quest_relationships(&player(), &quests);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "quests");
        assert!(errors.has_only_warnings());
    }

    #[test]
    fn test_completed_quest_awaiting_journal_is_info() {
        let v = business_validator();
        let done = quest(10.0, 10.0).complete().unwrap();
        let errors = v.validate_quest_relationships(&player(), &[done]);
        assert_eq!(errors.highest_severity(), Some(Severity::Info));
        assert!(!errors.has_blocking_errors());
    }

    #[test]
    fn test_clean_game_state() {
        let v = business_validator();
        let p = player().with_level(2).with_xp(150).with_gold(30);
        let errors = v.validate_game_state(&p, &[quest(100.0, 20.0)]);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_game_state_aggregates_everything() {
        let v = business_validator();
        let mut bad_quest = quest(100.0, 20.0);
        bad_quest.title = String::new();
        let p = player().with_level(3).with_xp(10);
        let errors = v.validate_game_state(&p, &[bad_quest]);

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["quests[0].title", "xp"]);
        assert!(matches!(
            errors.for_field("xp").next().map(|e| &e.context),
            Some(ErrorContext::LevelBand { level: 3, .. })
        ));
        assert!(matches!(
            errors.errors()[0].context,
            ErrorContext::Quest { .. }
        ));
    }

    #[test]
    fn test_game_state_with_corrupt_level_reports_level_only() {
        let v = business_validator();
        for level in [101, i32::MAX, i32::MIN] {
            let errors = v.validate_game_state(&player().with_level(level), &[]);
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["level"], "level {}", level);
            assert_eq!(errors.errors()[0].severity, Severity::Error);
        }
    }
}
