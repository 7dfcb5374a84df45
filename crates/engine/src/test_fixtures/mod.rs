//! Test fixtures: JSON snapshot loading and shared builders.
//!
//! Snapshots live in the crate's `test_data/` directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{business_validator, load_fixture};
//!
//! #[test]
//! fn test_clean_snapshot() {
//!     let snapshot: GameStateSnapshot = load_fixture("snapshots/clean.json");
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use questwalk_domain::{GameConstants, Quest};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::{ClockPort, MockClockPort};
use crate::use_cases::{BusinessLogicValidator, InputValidator, QuestProgressCalculator};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from the test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Clock
// =============================================================================

/// The instant every fixture validator believes it is.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(fixed_now()))
}

/// A mock clock that expects to be read at least once.
pub fn mock_clock(now: DateTime<Utc>) -> Arc<dyn ClockPort> {
    let mut clock = MockClockPort::new();
    clock.expect_now().times(1..).return_const(now);
    Arc::new(clock)
}

// =============================================================================
// Validators
// =============================================================================

pub fn constants() -> Arc<GameConstants> {
    Arc::new(GameConstants::default())
}

pub fn input_validator() -> InputValidator {
    InputValidator::new(constants(), fixed_clock())
}

pub fn business_validator() -> BusinessLogicValidator {
    BusinessLogicValidator::new(input_validator())
}

pub fn calculator() -> QuestProgressCalculator {
    QuestProgressCalculator::new(constants())
}

// =============================================================================
// Entities
// =============================================================================

/// A valid, not-yet-completed quest with the given distance and progress.
pub fn quest(total_distance: f64, progress: f64) -> Quest {
    Quest::new(
        "Road to Rivendell",
        "Walk east until the mountains",
        total_distance,
        50,
        10,
    )
    .unwrap()
    .with_progress(progress)
}
