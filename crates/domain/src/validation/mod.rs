//! Severity & Result model shared by every validation rule.
//!
//! Rule violations are values, never panics: a rule returns a
//! [`ValidationResult`], a composite validator returns a
//! [`ValidationErrorCollection`]. [`Severity::can_proceed`] is the single
//! gate callers use to decide whether an operation is blocked.

mod collection;
mod error;
mod result;
mod severity;

pub use collection::{SeverityBreakdown, ValidationErrorCollection};
pub use error::{ErrorContext, ValidationError};
pub use result::ValidationResult;
pub use severity::Severity;
