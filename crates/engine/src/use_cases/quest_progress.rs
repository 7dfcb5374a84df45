//! Quest progress calculation.
//!
//! Pure numeric functions over telemetry samples and hero classes. The
//! calling layer re-derives progress on every telemetry tick, so identical
//! inputs must always produce bit-identical outputs: nothing here keeps
//! state or accumulates.

use std::sync::Arc;

use serde::Serialize;

use questwalk_domain::{
    ActivityType, GameConstants, HealthData, HeroClass, Quest, Severity, ValidationResult,
};

/// Why a progress update was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressRejection {
    #[error("Progress must be a finite number, got {value}")]
    NonFinite { value: f64 },
    #[error("Quest bounds must be finite and non-negative, got current {current} and distance {max}")]
    InvalidBounds { current: f64, max: f64 },
    #[error("Progress cannot be negative, got {value}")]
    Negative { value: f64 },
    #[error("Progress {value} exceeds the quest distance {max}")]
    ExceedsMaximum { value: f64, max: f64 },
    #[error("Quest progress cannot decrease from {current} to {value}")]
    Decreased { value: f64, current: f64 },
    #[error("Quest is already completed")]
    AlreadyCompleted,
}

impl ProgressRejection {
    /// Every rejection blocks the update.
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl From<ProgressRejection> for ValidationResult {
    fn from(rejection: ProgressRejection) -> Self {
        ValidationResult::invalid(rejection.to_string(), rejection.severity())
    }
}

/// Checks a candidate progress value against the quest's current progress
/// and its total distance.
///
/// The caller must pass the most recently accepted progress as `current`;
/// with that, accepted values form a non-decreasing sequence.
pub fn validate_progress_update(
    new_progress: f64,
    current_progress: f64,
    max_progress: f64,
) -> Result<(), ProgressRejection> {
    let verdict = if !new_progress.is_finite() {
        Err(ProgressRejection::NonFinite {
            value: new_progress,
        })
    } else if !is_usable_bound(current_progress) || !is_usable_bound(max_progress) {
        Err(ProgressRejection::InvalidBounds {
            current: current_progress,
            max: max_progress,
        })
    } else if new_progress < 0.0 {
        Err(ProgressRejection::Negative {
            value: new_progress,
        })
    } else if new_progress > max_progress {
        Err(ProgressRejection::ExceedsMaximum {
            value: new_progress,
            max: max_progress,
        })
    } else if new_progress < current_progress {
        Err(ProgressRejection::Decreased {
            value: new_progress,
            current: current_progress,
        })
    } else {
        Ok(())
    };

    if let Err(rejection) = &verdict {
        tracing::debug!(
            new_progress,
            current_progress,
            max_progress,
            reason = %rejection,
            "Progress update rejected"
        );
    }
    verdict
}

fn is_usable_bound(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Preview of what a telemetry sample would do to a quest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressProjection {
    /// Candidate progress, clamped to the quest distance (or to the current
    /// progress when that already sits inside the tolerance band)
    pub progress: f64,
    /// Increase over the quest's current progress
    pub delta: f64,
    pub completes_quest: bool,
}

pub struct QuestProgressCalculator {
    constants: Arc<GameConstants>,
}

impl QuestProgressCalculator {
    pub fn new(constants: Arc<GameConstants>) -> Self {
        Self { constants }
    }

    /// Distance covered by a sample: `steps / steps_per_distance_unit`
    /// scaled by the class distance modifier. Negative steps count as zero.
    pub fn calculate_progress(&self, health: &HealthData, class: HeroClass) -> f64 {
        let steps_per_unit = self.constants.progress.steps_per_distance_unit;
        if steps_per_unit <= 0.0 {
            return 0.0;
        }
        (health.steps.max(0) as f64 / steps_per_unit) * self.class_distance_modifier(class)
    }

    pub fn class_distance_modifier(&self, class: HeroClass) -> f64 {
        self.constants.class_modifiers.for_class(class).distance
    }

    /// XP multiplier for `class` doing `activity`; a class's favoured
    /// activity earns more than anything else it does.
    pub fn class_xp_modifier(&self, class: HeroClass, activity: ActivityType) -> f64 {
        self.constants.class_modifiers.for_class(class).xp_for(activity)
    }

    pub fn class_gold_modifier(&self, class: HeroClass) -> f64 {
        self.constants.class_modifiers.for_class(class).gold
    }

    /// Weighted 0-100 engagement score over steps, standing hours and
    /// exercise minutes. Each component saturates at its goal.
    pub fn calculate_activity_score(&self, health: &HealthData) -> f64 {
        let weights = &self.constants.progress.activity_score;
        let score = goal_ratio(health.steps as f64, weights.step_goal) * weights.steps_weight
            + goal_ratio(f64::from(health.standing_hours), weights.standing_goal_hours)
                * weights.standing_weight
            + goal_ratio(f64::from(health.exercise_minutes), weights.exercise_goal_minutes)
                * weights.exercise_weight;
        score.clamp(0.0, 100.0)
    }

    /// Combat mode is on at or above the configured heart-rate threshold.
    pub fn detect_combat_mode(&self, heart_rate: f64) -> bool {
        heart_rate.is_finite() && heart_rate >= self.constants.progress.combat_heart_rate_threshold
    }

    pub fn validate_progress_update(
        &self,
        new_progress: f64,
        current_progress: f64,
        max_progress: f64,
    ) -> Result<(), ProgressRejection> {
        validate_progress_update(new_progress, current_progress, max_progress)
    }

    /// Projects a sample onto `quest` without changing it.
    ///
    /// `health` carries the telemetry accumulated since the quest started,
    /// so the projected progress replaces (not adds to) the current value.
    pub fn project_progress(
        &self,
        quest: &Quest,
        health: &HealthData,
        class: HeroClass,
    ) -> Result<ProgressProjection, ProgressRejection> {
        if quest.is_completed {
            return Err(ProgressRejection::AlreadyCompleted);
        }
        let ceiling = quest.total_distance.max(quest.current_progress);
        let progress = self.calculate_progress(health, class).min(ceiling);
        validate_progress_update(progress, quest.current_progress, ceiling)?;

        let projection = ProgressProjection {
            progress,
            delta: progress - quest.current_progress,
            completes_quest: progress >= quest.total_distance,
        };
        tracing::debug!(
            quest_id = %quest.id,
            progress = projection.progress,
            delta = projection.delta,
            completes_quest = projection.completes_quest,
            "Projected quest progress"
        );
        Ok(projection)
    }

    /// Base XP scaled by the class modifier for `activity`, rounded.
    pub fn calculate_xp_reward(&self, base_xp: i64, class: HeroClass, activity: ActivityType) -> i64 {
        scale(base_xp, self.class_xp_modifier(class, activity))
    }

    /// Base gold scaled by the class gold modifier, rounded.
    pub fn calculate_gold_reward(&self, base_gold: i64, class: HeroClass) -> i64 {
        scale(base_gold, self.class_gold_modifier(class))
    }
}

fn goal_ratio(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / goal).clamp(0.0, 1.0)
}

fn scale(base: i64, modifier: f64) -> i64 {
    if base <= 0 {
        return 0;
    }
    (base as f64 * modifier).round() as i64
}
