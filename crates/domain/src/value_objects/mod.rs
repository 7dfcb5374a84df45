//! Value objects - Immutable objects defined by their attributes

mod constants;
mod experience_curve;
mod gain_context;
mod hero_class;

pub use constants::{
    ActivityScoreWeights, ClassModifier, ClassModifierTable, EconomyLimits, GainCeilings,
    GameConstants, HealthLimits, PlayerLimits, ProgressTuning, QuestLimits,
};
pub use experience_curve::ExperienceCurve;
pub use gain_context::GainContext;
pub use hero_class::{ActivityType, HeroClass};
