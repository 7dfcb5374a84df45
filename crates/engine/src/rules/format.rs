//! Format-level fields: dates, identifiers, JSON payloads and enum strings.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use questwalk_domain::common::datetime::{earliest_supported_date, is_in_future};
use questwalk_domain::common::parse_datetime;
use questwalk_domain::ValidationResult;

/// Rejects dates before 2000-01-01 and dates ahead of `now` beyond the
/// tolerated clock skew.
pub fn validate_date(date: DateTime<Utc>, now: DateTime<Utc>) -> ValidationResult {
    if date < earliest_supported_date() {
        return ValidationResult::error("Date is before the earliest supported date");
    }
    if is_in_future(date, now) {
        return ValidationResult::error("Date cannot be in the future");
    }
    ValidationResult::Valid
}

pub fn validate_date_string(value: &str, now: DateTime<Utc>) -> ValidationResult {
    match parse_datetime(value.trim()) {
        Ok(date) => validate_date(date, now),
        Err(_) => ValidationResult::error("Invalid date format: expected RFC3339"),
    }
}

pub fn validate_uuid(value: &str) -> ValidationResult {
    match Uuid::parse_str(value.trim()) {
        Ok(uuid) if uuid.is_nil() => ValidationResult::error("UUID cannot be nil"),
        Ok(_) => ValidationResult::Valid,
        Err(_) => ValidationResult::error("Invalid UUID format"),
    }
}

pub fn validate_json(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::error("JSON payload cannot be empty");
    }
    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(_) => ValidationResult::Valid,
        Err(e) => ValidationResult::error(format!("Invalid JSON: {}", e)),
    }
}

/// Accepts any string that parses as `T` (hero class, activity type, rarity...).
pub fn validate_enum<T: FromStr>(value: &str, type_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::error(format!("{} cannot be empty", type_name));
    }
    match value.parse::<T>() {
        Ok(_) => ValidationResult::Valid,
        Err(_) => ValidationResult::error(format!("'{}' is not a valid {}", value, type_name)),
    }
}
