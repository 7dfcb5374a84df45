//! Quest entity - a distance goal fed by real-world steps
//!
//! Quests are values: progress and completion changes return a new `Quest`
//! rather than mutating one in place. The caller keeps the most recently
//! accepted value and passes it back as the `current` side of every
//! transition check.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::QuestId;

/// A distance-based quest.
///
/// # Invariants
///
/// - `total_distance` is finite and positive (enforced by [`Quest::new`])
/// - `is_completed` implies `current_progress >= total_distance`
///   (enforced by [`Quest::complete`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub total_distance: f64,
    pub current_progress: f64,
    pub is_completed: bool,
    pub reward_xp: i64,
    pub reward_gold: i64,
}

impl Quest {
    /// Create a new quest with zero progress.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `total_distance` is not a finite
    /// positive number or a reward is negative.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        total_distance: f64,
        reward_xp: i64,
        reward_gold: i64,
    ) -> Result<Self, DomainError> {
        if !total_distance.is_finite() {
            return Err(DomainError::validation(
                "Quest distance must be a finite number",
            ));
        }
        if total_distance <= 0.0 {
            return Err(DomainError::validation("Quest distance must be positive"));
        }
        if reward_xp < 0 || reward_gold < 0 {
            return Err(DomainError::validation("Quest rewards cannot be negative"));
        }
        Ok(Self {
            id: QuestId::new(),
            title: title.into(),
            description: description.into(),
            total_distance,
            current_progress: 0.0,
            is_completed: false,
            reward_xp,
            reward_gold,
        })
    }

    /// Returns a copy with `current_progress` replaced.
    pub fn with_progress(&self, progress: f64) -> Self {
        Self {
            current_progress: progress,
            ..self.clone()
        }
    }

    /// Returns a completed copy of this quest.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the quest is already
    /// completed or progress has not reached `total_distance`.
    pub fn complete(&self) -> Result<Self, DomainError> {
        if self.is_completed {
            return Err(DomainError::invalid_state_transition(
                "Quest is already completed",
            ));
        }
        if self.current_progress.is_nan() || self.current_progress < self.total_distance {
            return Err(DomainError::invalid_state_transition(format!(
                "Quest progress {:.2} has not reached {:.2}",
                self.current_progress, self.total_distance
            )));
        }
        Ok(Self {
            is_completed: true,
            ..self.clone()
        })
    }

    pub fn remaining_distance(&self) -> f64 {
        (self.total_distance - self.current_progress).max(0.0)
    }

    /// Progress as a fraction of `total_distance`, clamped to `[0, 1]`.
    pub fn completion_ratio(&self) -> f64 {
        if self.total_distance <= 0.0 {
            return 0.0;
        }
        (self.current_progress / self.total_distance).clamp(0.0, 1.0)
    }
}
