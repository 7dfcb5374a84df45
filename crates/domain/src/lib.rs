//! Questwalk Domain - entities, value objects and the validation vocabulary
//!
//! Pure types only: no logging, no I/O, no clocks. The engine crate applies
//! the rules; this crate defines what they talk about.

extern crate self as questwalk_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use entities::{HealthData, Item, ItemKind, ItemRarity, Player, Quest, QuestLog};

pub use error::DomainError;

pub use ids::{ItemId, PlayerId, QuestId, ValidationErrorId};

pub use validation::{
    ErrorContext, Severity, SeverityBreakdown, ValidationError, ValidationErrorCollection,
    ValidationResult,
};

pub use value_objects::{
    ActivityScoreWeights, ActivityType, ClassModifier, ClassModifierTable, EconomyLimits,
    ExperienceCurve, GainCeilings, GainContext, GameConstants, HealthLimits, HeroClass,
    PlayerLimits, ProgressTuning, QuestLimits,
};
