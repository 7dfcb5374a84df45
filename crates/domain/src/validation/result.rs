use std::fmt;

use serde::{Deserialize, Serialize};

use super::Severity;

/// Outcome of a single validation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid { message: String, severity: Severity },
}

impl ValidationResult {
    pub fn invalid(message: impl Into<String>, severity: Severity) -> Self {
        Self::Invalid {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::invalid(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::invalid(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::invalid(message, Severity::Error)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::invalid(message, Severity::Critical)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Valid => None,
            Self::Invalid { severity, .. } => Some(*severity),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(message),
        }
    }

    /// Whether the guarded operation may continue.
    pub fn can_proceed(&self) -> bool {
        !matches!(self.severity(), Some(s) if s.is_blocking())
    }

    pub fn is_blocking(&self) -> bool {
        !self.can_proceed()
    }

    /// Runs `next` only when this result is `Valid`.
    ///
    /// Lets a rule read as a chain of checks where the first failure wins.
    pub fn and_then(self, next: impl FnOnce() -> ValidationResult) -> ValidationResult {
        match self {
            Self::Valid => next(),
            invalid => invalid,
        }
    }

    /// Picks the most severe result; the earliest one wins a tie.
    pub fn most_severe(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
        results
            .into_iter()
            .fold(Self::Valid, |worst, candidate| match (&worst, &candidate) {
                (_, Self::Valid) => worst,
                (Self::Valid, _) => candidate,
                (Self::Invalid { severity: a, .. }, Self::Invalid { severity: b, .. }) => {
                    if b > a {
                        candidate
                    } else {
                        worst
                    }
                }
            })
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid { message, severity } => write!(f, "[{}] {}", severity, message),
        }
    }
}
