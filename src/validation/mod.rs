//! Validation toolkit shared by every domain object.
//!
//! - [`Validated`] / [`ValidatedNel`]: results that accumulate errors
//! - [`NonEmptyVec`]: error container guaranteed to hold at least one error
//! - [`FormatRule`] / [`FormatRules`]: pluggable per-type format checks
//! - [`ValidationError`]: trait implemented by every per-type error enum
//! - [`constrained_type`]: generic helpers for string value objects

pub mod constrained_type;
mod error;
mod non_empty;
mod rule;
mod validated;

pub use error::ValidationError;
pub use non_empty::NonEmptyVec;
pub use rule::{FormatRule, FormatRules, PLACEHOLDER_PATTERN};
pub use validated::{Validated, ValidatedNel};
