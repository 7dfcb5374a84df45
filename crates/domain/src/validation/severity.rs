use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How serious a validation failure is.
///
/// Variants are ordered from least to most severe, so `max()` over a set of
/// severities yields the one that decides the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No action needed
    Info,
    /// Proceed, but surface to the player or analytics
    Warning,
    /// Block the operation; recoverable by correcting input
    Error,
    /// Block and flag a potential integrity or security problem
    Critical,
}

impl Severity {
    /// True iff the operation may continue (`Info` or `Warning`).
    pub fn can_proceed(&self) -> bool {
        matches!(self, Self::Info | Self::Warning)
    }

    pub fn is_blocking(&self) -> bool {
        !self.can_proceed()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    pub fn all() -> [Severity; 4] {
        [Self::Info, Self::Warning, Self::Error, Self::Critical]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::parse(format!("Unknown severity: {}", s))),
        }
    }
}
