//! Game constants table
//!
//! Every bound, ceiling and tuning value the validation and progression
//! rules consume. The table is supplied once at process start (defaults,
//! optionally overridden from a JSON file and environment variables by the
//! engine) and shared read-only afterwards.
//!
//! Every section falls back field by field, so a partial JSON document
//! only needs to name the values it changes. Gain ceilings and class
//! modifiers fall back to the defaults of their own table or class.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ActivityType, ExperienceCurve, GainContext, HeroClass};
use crate::error::DomainError;

/// The full constants table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub player: PlayerLimits,
    pub health: HealthLimits,
    pub quest: QuestLimits,
    pub economy: EconomyLimits,
    pub experience_curve: ExperienceCurve,
    pub progress: ProgressTuning,
    #[serde(deserialize_with = "deserialize_xp_ceilings")]
    pub xp_ceilings: GainCeilings,
    #[serde(deserialize_with = "deserialize_gold_ceilings")]
    pub gold_ceilings: GainCeilings,
    pub class_modifiers: ClassModifierTable,
    /// Case-insensitive substrings rejected in player-authored names
    pub profanity_list: Vec<String>,
}

impl Default for GameConstants {
    fn default() -> Self {
        Self {
            player: PlayerLimits::default(),
            health: HealthLimits::default(),
            quest: QuestLimits::default(),
            economy: EconomyLimits::default(),
            experience_curve: ExperienceCurve::default(),
            progress: ProgressTuning::default(),
            xp_ceilings: GainCeilings::default_xp(),
            gold_ceilings: GainCeilings::default_gold(),
            class_modifiers: ClassModifierTable::default(),
            profanity_list: default_profanity_list(),
        }
    }
}

fn default_profanity_list() -> Vec<String> {
    ["damn", "crap", "shit", "fuck", "bitch", "bastard", "asshole"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

impl GameConstants {
    /// Rejects tables the rules cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first offending value.
    pub fn validate(&self) -> Result<(), DomainError> {
        let curve = &self.experience_curve;
        if !(curve.base_multiplier.is_finite() && curve.base_multiplier > 0.0) {
            return Err(DomainError::validation(
                "experience_curve.base_multiplier must be a positive number",
            ));
        }
        if !(curve.exponent.is_finite() && curve.exponent > 0.0) {
            return Err(DomainError::validation(
                "experience_curve.exponent must be a positive number",
            ));
        }
        let tolerance = self.quest.progress_tolerance;
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(DomainError::validation(
                "quest.progress_tolerance must be within [0, 1]",
            ));
        }
        let steps_per_unit = self.progress.steps_per_distance_unit;
        if !(steps_per_unit.is_finite() && steps_per_unit > 0.0) {
            return Err(DomainError::validation(
                "progress.steps_per_distance_unit must be a positive number",
            ));
        }
        if self.player.max_level < 1 {
            return Err(DomainError::validation("player.max_level must be at least 1"));
        }
        if self.player.min_name_length > self.player.max_name_length {
            return Err(DomainError::validation(
                "player.min_name_length cannot exceed player.max_name_length",
            ));
        }
        Ok(())
    }
}

/// Player field bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLimits {
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub max_level: i32,
    /// Absolute per-player XP ceiling; exceeding it is `Critical`
    pub max_xp: i64,
    /// Absolute per-player gold ceiling; exceeding it is `Critical`
    pub max_gold: i64,
    pub max_inventory_size: usize,
    pub max_item_name_length: usize,
}

impl Default for PlayerLimits {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 20,
            max_level: 100,
            max_xp: 1_000_000,
            max_gold: 1_000_000,
            max_inventory_size: 50,
            max_item_name_length: 40,
        }
    }
}

/// Telemetry bounds and anomaly thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthLimits {
    pub max_heart_rate: f64,
    /// Non-zero readings below this are flagged as implausible
    pub min_plausible_heart_rate: f64,
    pub max_daily_steps: i64,
    pub max_standing_hours: i32,
    pub max_daily_exercise_minutes: i32,
    pub max_daily_mindful_minutes: i32,
    /// Step increase between consecutive samples that counts as an anomaly
    pub max_step_delta: i64,
    /// Heart-rate change between consecutive samples that counts as an anomaly
    pub max_heart_rate_delta: f64,
}

impl Default for HealthLimits {
    fn default() -> Self {
        Self {
            max_heart_rate: 250.0,
            min_plausible_heart_rate: 30.0,
            max_daily_steps: 100_000,
            max_standing_hours: 24,
            max_daily_exercise_minutes: 1440,
            max_daily_mindful_minutes: 1440,
            max_step_delta: 10_000,
            max_heart_rate_delta: 50.0,
        }
    }
}

/// Quest field bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestLimits {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_distance: f64,
    pub max_reward_xp: i64,
    pub max_reward_gold: i64,
    /// Fraction over `total_distance` that progress may reach before a warning
    pub progress_tolerance: f64,
    pub max_active_quests: usize,
}

impl Default for QuestLimits {
    fn default() -> Self {
        Self {
            max_title_length: 50,
            max_description_length: 500,
            max_distance: 10_000.0,
            max_reward_xp: 10_000,
            max_reward_gold: 10_000,
            progress_tolerance: 0.10,
            max_active_quests: 10,
        }
    }
}

/// Gold transaction heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyLimits {
    /// Spending above `max(gold / 2, suspicious_spend_floor)` is flagged
    pub suspicious_spend_floor: i64,
}

impl Default for EconomyLimits {
    fn default() -> Self {
        Self {
            suspicious_spend_floor: 1000,
        }
    }
}

/// Telemetry-to-progress conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressTuning {
    pub steps_per_distance_unit: f64,
    /// Heart rate at or above which a sample counts as combat
    pub combat_heart_rate_threshold: f64,
    pub activity_score: ActivityScoreWeights,
}

impl Default for ProgressTuning {
    fn default() -> Self {
        Self {
            steps_per_distance_unit: 1000.0,
            combat_heart_rate_threshold: 140.0,
            activity_score: ActivityScoreWeights::default(),
        }
    }
}

/// Weights (summing to 100) and daily goals for the activity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityScoreWeights {
    pub steps_weight: f64,
    pub standing_weight: f64,
    pub exercise_weight: f64,
    pub step_goal: f64,
    pub standing_goal_hours: f64,
    pub exercise_goal_minutes: f64,
}

impl Default for ActivityScoreWeights {
    fn default() -> Self {
        Self {
            steps_weight: 50.0,
            standing_weight: 25.0,
            exercise_weight: 25.0,
            step_goal: 10_000.0,
            standing_goal_hours: 12.0,
            exercise_goal_minutes: 30.0,
        }
    }
}

/// Maximum legitimate single gain per context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainCeilings {
    pub quest_completion: i64,
    pub health_activity: i64,
    pub encounter: i64,
    pub daily_bonus: i64,
    #[serde(rename = "default")]
    pub fallback: i64,
}

impl GainCeilings {
    pub fn default_xp() -> Self {
        Self {
            quest_completion: 1000,
            health_activity: 500,
            encounter: 200,
            daily_bonus: 100,
            fallback: 50,
        }
    }

    pub fn default_gold() -> Self {
        Self {
            quest_completion: 500,
            health_activity: 100,
            encounter: 100,
            daily_bonus: 50,
            fallback: 25,
        }
    }

    pub fn for_context(&self, context: GainContext) -> i64 {
        match context {
            GainContext::QuestCompletion => self.quest_completion,
            GainContext::HealthActivity => self.health_activity,
            GainContext::Encounter => self.encounter,
            GainContext::DailyBonus => self.daily_bonus,
            GainContext::Other => self.fallback,
        }
    }
}

/// Ceilings named in a constants document; the rest come from a base table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GainCeilingOverrides {
    quest_completion: Option<i64>,
    health_activity: Option<i64>,
    encounter: Option<i64>,
    daily_bonus: Option<i64>,
    #[serde(rename = "default")]
    fallback: Option<i64>,
}

impl GainCeilingOverrides {
    fn over(self, base: GainCeilings) -> GainCeilings {
        GainCeilings {
            quest_completion: self.quest_completion.unwrap_or(base.quest_completion),
            health_activity: self.health_activity.unwrap_or(base.health_activity),
            encounter: self.encounter.unwrap_or(base.encounter),
            daily_bonus: self.daily_bonus.unwrap_or(base.daily_bonus),
            fallback: self.fallback.unwrap_or(base.fallback),
        }
    }
}

fn deserialize_xp_ceilings<'de, D>(deserializer: D) -> Result<GainCeilings, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(GainCeilingOverrides::deserialize(deserializer)?.over(GainCeilings::default_xp()))
}

fn deserialize_gold_ceilings<'de, D>(deserializer: D) -> Result<GainCeilings, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(GainCeilingOverrides::deserialize(deserializer)?.over(GainCeilings::default_gold()))
}

/// Fixed multipliers carried by one hero class. Missing fields read as the
/// neutral 1.0 multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassModifier {
    pub distance: f64,
    pub xp: f64,
    pub gold: f64,
    /// Activity that earns `favored_activity_xp` instead of `xp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favored_activity: Option<ActivityType>,
    pub favored_activity_xp: f64,
}

impl Default for ClassModifier {
    fn default() -> Self {
        Self {
            distance: 1.0,
            xp: 1.0,
            gold: 1.0,
            favored_activity: None,
            favored_activity_xp: 1.0,
        }
    }
}

impl ClassModifier {
    pub fn xp_for(&self, activity: ActivityType) -> f64 {
        if self.favored_activity == Some(activity) {
            self.favored_activity_xp
        } else {
            self.xp
        }
    }
}

/// Modifiers for every hero class. A class named in a constants document
/// keeps its own defaults for the fields it leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ClassModifierTableOverrides")]
pub struct ClassModifierTable {
    pub warrior: ClassModifier,
    pub mage: ClassModifier,
    pub rogue: ClassModifier,
    pub ranger: ClassModifier,
    pub cleric: ClassModifier,
}

impl Default for ClassModifierTable {
    fn default() -> Self {
        Self {
            warrior: ClassModifier {
                distance: 1.1,
                favored_activity: Some(ActivityType::Walking),
                favored_activity_xp: 1.25,
                ..ClassModifier::default()
            },
            mage: ClassModifier::default(),
            rogue: ClassModifier {
                distance: 0.9,
                gold: 1.15,
                ..ClassModifier::default()
            },
            ranger: ClassModifier {
                distance: 1.15,
                favored_activity: Some(ActivityType::Outdoor),
                favored_activity_xp: 1.25,
                ..ClassModifier::default()
            },
            cleric: ClassModifier {
                favored_activity: Some(ActivityType::Mindfulness),
                favored_activity_xp: 1.3,
                ..ClassModifier::default()
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClassModifierOverrides {
    distance: Option<f64>,
    xp: Option<f64>,
    gold: Option<f64>,
    favored_activity: Option<ActivityType>,
    favored_activity_xp: Option<f64>,
}

impl ClassModifierOverrides {
    fn over(self, base: ClassModifier) -> ClassModifier {
        ClassModifier {
            distance: self.distance.unwrap_or(base.distance),
            xp: self.xp.unwrap_or(base.xp),
            gold: self.gold.unwrap_or(base.gold),
            favored_activity: self.favored_activity.or(base.favored_activity),
            favored_activity_xp: self.favored_activity_xp.unwrap_or(base.favored_activity_xp),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClassModifierTableOverrides {
    warrior: ClassModifierOverrides,
    mage: ClassModifierOverrides,
    rogue: ClassModifierOverrides,
    ranger: ClassModifierOverrides,
    cleric: ClassModifierOverrides,
}

impl From<ClassModifierTableOverrides> for ClassModifierTable {
    fn from(overrides: ClassModifierTableOverrides) -> Self {
        let base = ClassModifierTable::default();
        Self {
            warrior: overrides.warrior.over(base.warrior),
            mage: overrides.mage.over(base.mage),
            rogue: overrides.rogue.over(base.rogue),
            ranger: overrides.ranger.over(base.ranger),
            cleric: overrides.cleric.over(base.cleric),
        }
    }
}

impl ClassModifierTable {
    pub fn for_class(&self, class: HeroClass) -> &ClassModifier {
        match class {
            HeroClass::Warrior => &self.warrior,
            HeroClass::Mage => &self.mage,
            HeroClass::Rogue => &self.rogue,
            HeroClass::Ranger => &self.ranger,
            HeroClass::Cleric => &self.cleric,
        }
    }
}
