use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Severity, ValidationResult};
use crate::entities::ItemRarity;
use crate::value_objects::GainContext;
use crate::{ItemId, QuestId, ValidationErrorId};

/// Typed diagnostic payload attached to a [`ValidationError`].
///
/// One variant per family of checks, so consumers can render details
/// without downcasting an untyped map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorContext {
    #[default]
    None,
    /// A numeric field compared against a bound
    Numeric { value: f64, limit: f64 },
    /// An XP or gold delta compared against its context ceiling
    Gain {
        context: GainContext,
        amount: i64,
        ceiling: i64,
    },
    /// Level-up or level/XP consistency details
    LevelBand {
        level: i32,
        xp: i64,
        band_min: i64,
        band_max: i64,
    },
    /// A check tied to one quest
    Quest { quest_id: QuestId },
    /// Inventory capacity details
    Inventory { count: usize, capacity: usize },
    /// A suspicious item
    Item { item_id: ItemId, rarity: ItemRarity },
    /// Delta between two consecutive telemetry samples
    Telemetry {
        previous: f64,
        current: f64,
        threshold: f64,
    },
}

/// A single field-level validation failure.
///
/// Equality (and hashing) only considers `field`, `message` and `severity`;
/// `id`, `timestamp` and `context` are diagnostic decoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub id: ValidationErrorId,
    pub field: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub context: ErrorContext,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ValidationErrorId::new(),
            field: field.into(),
            message: message.into(),
            severity,
            timestamp,
            context: ErrorContext::None,
        }
    }

    /// Converts a failed rule outcome into an error for `field`.
    ///
    /// Returns `None` when the result is `Valid`.
    pub fn from_result(
        field: impl Into<String>,
        result: &ValidationResult,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        match result {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message, severity } => {
                Some(Self::new(field, message.clone(), *severity, timestamp))
            }
        }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn can_proceed(&self) -> bool {
        self.severity.can_proceed()
    }

    /// The rule outcome this error was reported for.
    pub fn to_result(&self) -> ValidationResult {
        ValidationResult::invalid(self.message.clone(), self.severity)
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.message == other.message && self.severity == other.severity
    }
}

impl Eq for ValidationError {}

impl Hash for ValidationError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.message.hash(state);
        self.severity.hash(state);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_equality_ignores_identity_time_and_context() {
        let a = ValidationError::new("name", "Name cannot be empty", Severity::Error, at(8));
        let b = ValidationError::new("name", "Name cannot be empty", Severity::Error, at(9))
            .with_context(ErrorContext::Numeric {
                value: 0.0,
                limit: 2.0,
            });
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_respects_severity() {
        let a = ValidationError::new("name", "odd", Severity::Warning, at(8));
        let b = ValidationError::new("name", "odd", Severity::Error, at(8));
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_result() {
        assert!(ValidationError::from_result("xp", &ValidationResult::Valid, at(8)).is_none());

        let err = ValidationError::from_result("xp", &ValidationResult::critical("too much"), at(8))
            .unwrap();
        assert_eq!(err.field, "xp");
        assert_eq!(err.severity, Severity::Critical);
        assert!(!err.can_proceed());
        assert_eq!(err.to_result(), ValidationResult::critical("too much"));
    }

    #[test]
    fn test_display() {
        let err = ValidationError::new("gold", "Gold cannot be negative", Severity::Error, at(8));
        assert_eq!(err.to_string(), "[error] gold: Gold cannot be negative");
    }

    #[test]
    fn test_context_serializes_with_kind_tag() {
        let ctx = ErrorContext::Inventory {
            count: 51,
            capacity: 50,
        };
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["kind"], "inventory");
        assert_eq!(json["capacity"], 50);
    }
}
