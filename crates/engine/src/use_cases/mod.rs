//! Use cases - validation and progression orchestration.
//!
//! Each module composes the field rules in `crate::rules` into one
//! caller-facing service. All services are stateless and cheap to share.

pub mod audit;
pub mod business_validation;
pub mod input_validation;
pub mod quest_progress;
pub(crate) mod validation;

pub use audit::{run_audit, AuditReport, GameStateSnapshot};
pub use business_validation::BusinessLogicValidator;
pub use input_validation::InputValidator;
pub use quest_progress::{
    validate_progress_update, ProgressProjection, ProgressRejection, QuestProgressCalculator,
};
