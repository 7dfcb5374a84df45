use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Severity, ValidationError, ValidationResult};

/// Count of errors per severity, used for narration and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub critical: usize,
}

impl SeverityBreakdown {
    pub fn total(&self) -> usize {
        self.info + self.warning + self.error + self.critical
    }

    pub fn blocking(&self) -> usize {
        self.error + self.critical
    }
}

/// Ordered, immutable set of errors produced by one validation call.
///
/// There are no in-place mutators: [`with_error`](Self::with_error) and
/// [`merged`](Self::merged) consume the collection and return a new one, so a
/// caller only ever holds a complete snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorCollection {
    errors: Vec<ValidationError>,
}

impl ValidationErrorCollection {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_error(self, error: ValidationError) -> Self {
        let mut errors = self.errors;
        errors.push(error);
        Self { errors }
    }

    pub fn merged(self, other: ValidationErrorCollection) -> Self {
        let mut errors = self.errors;
        errors.extend(other.errors);
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Any `Error` or `Critical` entry present.
    pub fn has_blocking_errors(&self) -> bool {
        self.errors.iter().any(|e| !e.can_proceed())
    }

    /// Non-empty, and every entry is `Info` or `Warning`.
    pub fn has_only_warnings(&self) -> bool {
        !self.errors.is_empty() && self.errors.iter().all(|e| e.can_proceed())
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.errors.iter().map(|e| e.severity).max()
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.severity == severity)
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn by_severity(&self) -> BTreeMap<Severity, Vec<&ValidationError>> {
        let mut groups: BTreeMap<Severity, Vec<&ValidationError>> = BTreeMap::new();
        for error in &self.errors {
            groups.entry(error.severity).or_default().push(error);
        }
        groups
    }

    pub fn by_field(&self) -> BTreeMap<&str, Vec<&ValidationError>> {
        let mut groups: BTreeMap<&str, Vec<&ValidationError>> = BTreeMap::new();
        for error in &self.errors {
            groups.entry(error.field.as_str()).or_default().push(error);
        }
        groups
    }

    pub fn breakdown(&self) -> SeverityBreakdown {
        self.errors
            .iter()
            .fold(SeverityBreakdown::default(), |mut acc, e| {
                match e.severity {
                    Severity::Info => acc.info += 1,
                    Severity::Warning => acc.warning += 1,
                    Severity::Error => acc.error += 1,
                    Severity::Critical => acc.critical += 1,
                }
                acc
            })
    }

    /// Collapses the collection to its most severe entry.
    pub fn to_result(&self) -> ValidationResult {
        ValidationResult::most_severe(self.errors.iter().map(ValidationError::to_result))
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl FromIterator<ValidationError> for ValidationErrorCollection {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrorCollection {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrorCollection {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn err(field: &str, message: &str, severity: Severity) -> ValidationError {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        ValidationError::new(field, message, severity, ts)
    }

    #[test]
    fn test_empty_collection() {
        let c = ValidationErrorCollection::empty();
        assert!(c.is_empty());
        assert!(!c.has_blocking_errors());
        assert!(!c.has_only_warnings());
        assert_eq!(c.highest_severity(), None);
        assert!(c.to_result().is_valid());
    }

    #[test]
    fn test_only_warnings() {
        let c = ValidationErrorCollection::new(vec![
            err("name", "double space", Severity::Warning),
            err("steps", "note", Severity::Info),
        ]);
        assert!(c.has_only_warnings());
        assert!(!c.has_blocking_errors());
        assert_eq!(c.highest_severity(), Some(Severity::Warning));
    }

    #[test]
    fn test_blocking_errors() {
        let c = ValidationErrorCollection::empty()
            .with_error(err("name", "double space", Severity::Warning))
            .with_error(err("xp", "over ceiling", Severity::Critical));
        assert!(c.has_blocking_errors());
        assert!(!c.has_only_warnings());
        assert_eq!(c.to_result(), ValidationResult::critical("over ceiling"));
    }

    #[test]
    fn test_merged_preserves_order() {
        let a = ValidationErrorCollection::new(vec![err("a", "1", Severity::Error)]);
        let b = ValidationErrorCollection::new(vec![err("b", "2", Severity::Info)]);
        let merged = a.merged(b);
        let fields: Vec<&str> = merged.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_grouping() {
        let c: ValidationErrorCollection = vec![
            err("name", "empty", Severity::Error),
            err("name", "profane", Severity::Error),
            err("gold", "negative", Severity::Error),
            err("xp", "stale level", Severity::Warning),
        ]
        .into_iter()
        .collect();

        let by_field = c.by_field();
        assert_eq!(by_field["name"].len(), 2);
        assert_eq!(by_field["gold"].len(), 1);

        let by_severity = c.by_severity();
        assert_eq!(by_severity[&Severity::Error].len(), 3);
        assert_eq!(by_severity[&Severity::Warning].len(), 1);
        assert!(!by_severity.contains_key(&Severity::Critical));

        assert_eq!(c.for_field("name").count(), 2);
        assert_eq!(c.with_severity(Severity::Warning).count(), 1);
    }

    #[test]
    fn test_breakdown() {
        let c = ValidationErrorCollection::new(vec![
            err("a", "1", Severity::Info),
            err("b", "2", Severity::Warning),
            err("c", "3", Severity::Error),
            err("d", "4", Severity::Critical),
            err("e", "5", Severity::Critical),
        ]);
        let breakdown = c.breakdown();
        assert_eq!(breakdown.critical, 2);
        assert_eq!(breakdown.blocking(), 3);
        assert_eq!(breakdown.total(), 5);
    }
}
