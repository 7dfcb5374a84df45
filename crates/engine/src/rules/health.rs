//! Telemetry fields.

use questwalk_domain::{GameConstants, ValidationResult};

pub fn validate_steps(steps: i64, constants: &GameConstants) -> ValidationResult {
    if steps < 0 {
        return ValidationResult::error("Step count cannot be negative");
    }
    let max = constants.health.max_daily_steps;
    if steps > max {
        return ValidationResult::error(format!(
            "Step count {} exceeds the daily maximum of {}",
            steps, max
        ));
    }
    ValidationResult::Valid
}

/// Zero means "no reading" and is valid; a non-zero reading below the
/// plausible floor is a warning.
pub fn validate_heart_rate(heart_rate: f64, constants: &GameConstants) -> ValidationResult {
    let limits = &constants.health;
    if !heart_rate.is_finite() {
        return ValidationResult::error("Heart rate must be a finite number");
    }
    if heart_rate < 0.0 {
        return ValidationResult::error("Heart rate cannot be negative");
    }
    if heart_rate > limits.max_heart_rate {
        return ValidationResult::error(format!(
            "Heart rate {} exceeds the maximum of {}",
            heart_rate, limits.max_heart_rate
        ));
    }
    if heart_rate > 0.0 && heart_rate < limits.min_plausible_heart_rate {
        return ValidationResult::warning(format!(
            "Heart rate {} is implausibly low",
            heart_rate
        ));
    }
    ValidationResult::Valid
}

pub fn validate_standing_hours(hours: i32, constants: &GameConstants) -> ValidationResult {
    let max = constants.health.max_standing_hours;
    if !(0..=max).contains(&hours) {
        return ValidationResult::error(format!("Standing hours must be between 0 and {}", max));
    }
    ValidationResult::Valid
}

pub fn validate_exercise_minutes(minutes: i32, constants: &GameConstants) -> ValidationResult {
    let max = constants.health.max_daily_exercise_minutes;
    if !(0..=max).contains(&minutes) {
        return ValidationResult::error(format!(
            "Exercise minutes must be between 0 and {}",
            max
        ));
    }
    ValidationResult::Valid
}

pub fn validate_mindful_minutes(minutes: i32, constants: &GameConstants) -> ValidationResult {
    let max = constants.health.max_daily_mindful_minutes;
    if !(0..=max).contains(&minutes) {
        return ValidationResult::error(format!(
            "Mindful minutes must be between 0 and {}",
            max
        ));
    }
    ValidationResult::Valid
}
