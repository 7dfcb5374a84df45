//! Side-channel narration of validation events.
//!
//! Fire-and-forget `tracing` output: every composite validation and business
//! rule reports its outcome here. Nothing returned to callers depends on it.

use questwalk_domain::{Severity, ValidationErrorCollection, ValidationResult};

/// Logs the outcome of a composite validation with its severity breakdown.
pub fn narrate_collection(operation: &'static str, errors: &ValidationErrorCollection) {
    let breakdown = errors.breakdown();
    match errors.highest_severity() {
        None => tracing::debug!(operation, "Validation passed"),
        Some(Severity::Info) | Some(Severity::Warning) => tracing::info!(
            operation,
            info = breakdown.info,
            warnings = breakdown.warning,
            "Validation passed with warnings"
        ),
        Some(Severity::Error) => tracing::warn!(
            operation,
            info = breakdown.info,
            warnings = breakdown.warning,
            errors = breakdown.error,
            "Validation failed"
        ),
        Some(Severity::Critical) => tracing::error!(
            operation,
            info = breakdown.info,
            warnings = breakdown.warning,
            errors = breakdown.error,
            critical = breakdown.critical,
            "Validation failed with critical problems"
        ),
    }
}

/// Logs the outcome of a single-result rule.
pub fn narrate_result(operation: &'static str, result: &ValidationResult) {
    match result {
        ValidationResult::Valid => tracing::debug!(operation, "Validation passed"),
        ValidationResult::Invalid { message, severity } => match severity {
            Severity::Info | Severity::Warning => {
                tracing::info!(operation, severity = %severity, message = %message, "Validation flagged")
            }
            Severity::Error => {
                tracing::warn!(operation, severity = %severity, message = %message, "Validation failed")
            }
            Severity::Critical => {
                tracing::error!(operation, severity = %severity, message = %message, "Validation failed")
            }
        },
    }
}
