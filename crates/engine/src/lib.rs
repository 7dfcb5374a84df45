//! Questwalk Engine library.
//!
//! Validation and progression rules for the Questwalk health-telemetry RPG.
//! Every operation is a pure function of its inputs plus the shared
//! constants table; nothing here performs I/O except settings loading.
//!
//! ## Structure
//!
//! - `rules/` - One pure function per primitive field
//! - `use_cases/` - Input validator, business logic validator, quest progress
//!   calculator and the game-state audit
//! - `infrastructure/` - Clock port, settings loading, validation narration

pub mod infrastructure;
pub mod rules;
pub mod use_cases;

/// Shared builders for unit and scenario tests.
#[cfg(test)]
pub(crate) mod test_fixtures;

/// Scenario tests spanning several validators.
#[cfg(test)]
mod e2e_tests;

pub use infrastructure::clock::SystemClock;
pub use infrastructure::ports::ClockPort;
pub use infrastructure::settings::{load_constants, SettingsError};
pub use use_cases::{
    run_audit, validate_progress_update, AuditReport, BusinessLogicValidator, GameStateSnapshot,
    InputValidator, ProgressProjection, ProgressRejection, QuestProgressCalculator,
};
