//! Infrastructure implementations.
//!
//! Port traits for the engine's few external collaborators (time) plus the
//! settings loader and the logging narration used by every validator.

pub mod clock;
pub mod narration;
pub mod ports;
pub mod settings;
