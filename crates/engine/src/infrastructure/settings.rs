//! Constants table loading.
//!
//! The table starts from [`GameConstants::default`], optionally replaced by
//! a JSON file, then adjusted by environment variables. The result is
//! validated once and shared read-only for the lifetime of the process.
//!
//! Supported environment variables:
//! - `QUESTWALK_BASE_XP_MULTIPLIER` (range: 1-10000)
//! - `QUESTWALK_XP_CURVE_EXPONENT` (range: 0.5-4)
//! - `QUESTWALK_PROGRESS_TOLERANCE` (range: 0-1)
//! - `QUESTWALK_STEPS_PER_DISTANCE_UNIT` (range: 1-100000)
//! - `QUESTWALK_COMBAT_HEART_RATE` (range: 60-250)

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Arc;

use questwalk_domain::{DomainError, GameConstants};

/// Errors that can occur while loading the constants table.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read constants file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid constants JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid constants: {0}")]
    Invalid(#[from] DomainError),
}

/// Parse a (possibly partial) constants document.
pub fn load_constants_from_json(json: &str) -> Result<GameConstants, SettingsError> {
    let constants: GameConstants = serde_json::from_str(json)?;
    Ok(constants)
}

pub fn load_constants_from_file(path: &Path) -> Result<GameConstants, SettingsError> {
    let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let constants = load_constants_from_json(&json)?;
    tracing::info!(path = %path.display(), "Loaded game constants from file");
    Ok(constants)
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(constants: GameConstants) -> GameConstants {
    apply_overrides(constants, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source.
///
/// Unparseable or out-of-range values are ignored with a warning.
pub fn apply_overrides(
    constants: GameConstants,
    lookup: impl Fn(&str) -> Option<String>,
) -> GameConstants {
    let mut updated = constants;

    if let Some(value) = read_f64(&lookup, "QUESTWALK_BASE_XP_MULTIPLIER", 1.0..=10_000.0) {
        updated.experience_curve.base_multiplier = value;
    }
    if let Some(value) = read_f64(&lookup, "QUESTWALK_XP_CURVE_EXPONENT", 0.5..=4.0) {
        updated.experience_curve.exponent = value;
    }
    if let Some(value) = read_f64(&lookup, "QUESTWALK_PROGRESS_TOLERANCE", 0.0..=1.0) {
        updated.quest.progress_tolerance = value;
    }
    if let Some(value) = read_f64(&lookup, "QUESTWALK_STEPS_PER_DISTANCE_UNIT", 1.0..=100_000.0) {
        updated.progress.steps_per_distance_unit = value;
    }
    if let Some(value) = read_f64(&lookup, "QUESTWALK_COMBAT_HEART_RATE", 60.0..=250.0) {
        updated.progress.combat_heart_rate_threshold = value;
    }

    updated
}

fn read_f64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    range: RangeInclusive<f64>,
) -> Option<f64> {
    let raw = lookup(name)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if range.contains(&value) => {
            tracing::info!(value, "Applied {} environment variable", name);
            Some(value)
        }
        Ok(value) => {
            tracing::warn!(
                value,
                "{} out of range [{}, {}], ignoring",
                name,
                range.start(),
                range.end()
            );
            None
        }
        Err(_) => {
            tracing::warn!(val = %raw, "{} is not a valid number, ignoring", name);
            None
        }
    }
}

/// Build the process-wide constants table: file (or defaults), then
/// environment overrides, then validation.
pub fn load_constants(path: Option<&Path>) -> Result<Arc<GameConstants>, SettingsError> {
    let base = match path {
        Some(path) => load_constants_from_file(path)?,
        None => GameConstants::default(),
    };
    let constants = apply_env_overrides(base);
    constants.validate()?;
    Ok(Arc::new(constants))
}
