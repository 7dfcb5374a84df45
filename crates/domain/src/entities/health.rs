//! Telemetry sample produced by the health-data collaborator.

use serde::{Deserialize, Serialize};

/// One snapshot of the player's daily activity.
///
/// Samples have no identity; each is compared only against the sample that
/// immediately preceded it. A `heart_rate` of zero means "no reading".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthData {
    pub steps: i64,
    pub standing_hours: i32,
    pub heart_rate: f64,
    pub exercise_minutes: i32,
    pub mindful_minutes: i32,
}

impl HealthData {
    pub fn with_steps(steps: i64) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn has_heart_rate(&self) -> bool {
        self.heart_rate != 0.0
    }
}
