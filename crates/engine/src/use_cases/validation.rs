//! Common helpers for the composite validators.

use chrono::{DateTime, Utc};

use questwalk_domain::{
    ErrorContext, Severity, ValidationError, ValidationErrorCollection, ValidationResult,
};

/// Accumulates rule outcomes for one validation call.
///
/// Every failure is kept (no short-circuiting). All errors produced by the
/// same call share one timestamp. `finish` hands back an immutable
/// collection; the sink itself never escapes the call.
pub(crate) struct ErrorSink {
    timestamp: DateTime<Utc>,
    errors: Vec<ValidationError>,
}

impl ErrorSink {
    pub(crate) fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            errors: Vec::new(),
        }
    }

    /// Records `result` against `field` if it failed. Returns whether it passed.
    pub(crate) fn check(&mut self, field: impl Into<String>, result: ValidationResult) -> bool {
        self.check_with(field, result, ErrorContext::None)
    }

    pub(crate) fn check_with(
        &mut self,
        field: impl Into<String>,
        result: ValidationResult,
        context: ErrorContext,
    ) -> bool {
        match ValidationError::from_result(field, &result, self.timestamp) {
            Some(error) => {
                self.errors.push(error.with_context(context));
                false
            }
            None => true,
        }
    }

    pub(crate) fn report(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        context: ErrorContext,
    ) {
        self.errors.push(
            ValidationError::new(field, message, severity, self.timestamp).with_context(context),
        );
    }

    /// Appends another collection, prefixing each field with `prefix.`
    /// and filling in `context` where the error carries none.
    pub(crate) fn absorb_prefixed(
        &mut self,
        prefix: &str,
        collection: ValidationErrorCollection,
        context: ErrorContext,
    ) {
        for mut error in collection {
            error.field = format!("{}.{}", prefix, error.field);
            if error.context == ErrorContext::None {
                error.context = context.clone();
            }
            self.errors.push(error);
        }
    }

    pub(crate) fn absorb(&mut self, collection: ValidationErrorCollection) {
        self.errors.extend(collection);
    }

    pub(crate) fn finish(self) -> ValidationErrorCollection {
        ValidationErrorCollection::new(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap()
    }

    #[test]
    fn test_check_records_only_failures() {
        let mut sink = ErrorSink::new(ts());
        assert!(sink.check("a", ValidationResult::Valid));
        assert!(!sink.check("b", ValidationResult::warning("hmm")));
        let collection = sink.finish();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.errors()[0].field, "b");
        assert_eq!(collection.errors()[0].timestamp, ts());
    }

    #[test]
    fn test_absorb_prefixed_keeps_existing_context() {
        let inner = ValidationErrorCollection::new(vec![
            ValidationError::new("title", "empty", Severity::Error, ts()),
            ValidationError::new("reward_xp", "big", Severity::Error, ts()).with_context(
                ErrorContext::Numeric {
                    value: 1.0,
                    limit: 0.0,
                },
            ),
        ]);
        let mut sink = ErrorSink::new(ts());
        sink.absorb_prefixed(
            "quests[0]",
            inner,
            ErrorContext::Inventory {
                count: 0,
                capacity: 0,
            },
        );
        let collection = sink.finish();
        assert_eq!(collection.errors()[0].field, "quests[0].title");
        assert!(matches!(
            collection.errors()[0].context,
            ErrorContext::Inventory { .. }
        ));
        assert!(matches!(
            collection.errors()[1].context,
            ErrorContext::Numeric { .. }
        ));
    }
}
