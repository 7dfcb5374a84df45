//! Unified error types for the domain layer
//!
//! Domain rule violations are reported as [`crate::ValidationResult`] values.
//! `DomainError` is reserved for failures at the construction boundary, where
//! an entity or value object cannot exist at all (e.g. a quest with a
//! non-finite distance, or an unknown hero class string).

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and enums)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for values that cannot be constructed.
    ///
    /// # Example
    /// ```ignore
    /// if !total_distance.is_finite() {
    ///     return Err(DomainError::validation("Quest distance must be a finite number"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
