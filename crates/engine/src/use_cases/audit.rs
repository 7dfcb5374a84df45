//! Game-state audit over a persisted snapshot.
//!
//! Combines the full game-state sweep with telemetry plausibility and the
//! derived gameplay numbers (activity score, combat mode) into one report.

use serde::{Deserialize, Serialize};

use questwalk_domain::{
    ErrorContext, HealthData, Player, PlayerId, Quest, SeverityBreakdown,
    ValidationErrorCollection,
};

use crate::use_cases::business_validation::BusinessLogicValidator;
use crate::use_cases::quest_progress::QuestProgressCalculator;
use crate::use_cases::validation::ErrorSink;

/// Everything the persistence layer knows about one player at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub player: Player,
    #[serde(default)]
    pub active_quests: Vec<Quest>,
    #[serde(default)]
    pub health: Option<HealthData>,
    #[serde(default)]
    pub previous_health: Option<HealthData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub player_id: PlayerId,
    pub summary: SeverityBreakdown,
    pub blocking: bool,
    pub errors: ValidationErrorCollection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combat_mode: Option<bool>,
}

impl AuditReport {
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

/// Audits a snapshot. Health problems are reported under `health.*`.
pub fn run_audit(
    validator: &BusinessLogicValidator,
    calculator: &QuestProgressCalculator,
    snapshot: &GameStateSnapshot,
) -> AuditReport {
    let mut sink = ErrorSink::new(validator.input().now());
    sink.absorb(validator.validate_game_state(&snapshot.player, &snapshot.active_quests));

    if let Some(health) = &snapshot.health {
        sink.absorb_prefixed(
            "health",
            validator.validate_health_for_gameplay(health, snapshot.previous_health.as_ref()),
            ErrorContext::None,
        );
    }

    let errors = sink.finish();
    let summary = errors.breakdown();
    let report = AuditReport {
        player_id: snapshot.player.id,
        summary,
        blocking: errors.has_blocking_errors(),
        errors,
        activity_score: snapshot
            .health
            .as_ref()
            .map(|h| calculator.calculate_activity_score(h)),
        combat_mode: snapshot
            .health
            .as_ref()
            .map(|h| calculator.detect_combat_mode(h.heart_rate)),
    };

    tracing::info!(
        player_id = %report.player_id,
        total = summary.total(),
        blocking = summary.blocking(),
        "Audit complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{business_validator, constants, quest};
    use questwalk_domain::{HeroClass, Severity};

    #[test]
    fn test_audit_without_health() {
        let snapshot = GameStateSnapshot {
            player: Player::new("Robin", HeroClass::Ranger),
            active_quests: vec![quest(20.0, 3.0)],
            health: None,
            previous_health: None,
        };
        let report = run_audit(
            &business_validator(),
            &QuestProgressCalculator::new(constants()),
            &snapshot,
        );
        assert!(report.errors.is_empty());
        assert!(!report.is_blocking());
        assert_eq!(report.activity_score, None);
        assert_eq!(report.combat_mode, None);
    }

    #[test]
    fn test_audit_prefixes_health_problems() {
        let snapshot = GameStateSnapshot {
            player: Player::new("Robin", HeroClass::Ranger),
            active_quests: Vec::new(),
            health: Some(HealthData {
                steps: -1,
                heart_rate: 150.0,
                ..HealthData::default()
            }),
            previous_health: None,
        };
        let report = run_audit(
            &business_validator(),
            &QuestProgressCalculator::new(constants()),
            &snapshot,
        );
        assert_eq!(report.errors.errors()[0].field, "health.steps");
        assert_eq!(report.summary.error, 1);
        assert!(report.is_blocking());
        assert_eq!(report.combat_mode, Some(true));
        assert_eq!(report.activity_score, Some(0.0));
    }

    #[test]
    fn test_snapshot_defaults_optional_sections() {
        let player = Player::new("Robin", HeroClass::Ranger);
        let json = serde_json::json!({ "player": player }).to_string();
        let snapshot: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert!(snapshot.active_quests.is_empty());
        assert!(snapshot.health.is_none());

        let report = run_audit(
            &business_validator(),
            &QuestProgressCalculator::new(constants()),
            &snapshot,
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["blocking"], false);
        assert!(value.get("activity_score").is_none());
        assert_eq!(report.errors.highest_severity(), None::<Severity>);
    }
}
