//! `StoreId` value object.

use std::fmt;

use thiserror::Error;

use crate::validation::constrained_type::{self, Violation};
use crate::validation::{FormatRule, ValidatedNel, ValidationError};

/// Reasons a `StoreId` cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum StoreIdError {
    /// Input was absent or blank.
    #[error("StoreId is required")]
    Required,
    /// Input did not satisfy the `StoreId` format rule.
    #[error("StoreId '{0}' does not satisfy the required format")]
    InvalidFormat(String),
}

impl From<Violation> for StoreIdError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::Required => Self::Required,
            Violation::InvalidFormat(value) => Self::InvalidFormat(value),
        }
    }
}

impl ValidationError for StoreIdError {
    fn field_name(&self) -> &'static str {
        StoreId::FIELD_NAME
    }
}

/// Identifier of a store.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::{StoreId, StoreIdError};
///
/// let raw = "a".repeat(32);
/// let store_id = StoreId::new(Some(raw.as_str())).unwrap();
/// assert_eq!(store_id.value(), raw);
///
/// let missing = StoreId::new(None);
/// assert_eq!(missing.err().unwrap().into_vec(), vec![StoreIdError::Required]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StoreId(String);

impl StoreId {
    /// Name used in error messages and log events.
    pub const FIELD_NAME: &'static str = "StoreId";

    /// Creates a `StoreId` from raw input, checked against the default rule.
    ///
    /// # Returns
    ///
    /// * `Valid(StoreId)` - On successful validation
    /// * `Invalid([Required])` - When the input is absent or blank
    /// * `Invalid([InvalidFormat(input)])` - When the format rule rejects the input
    pub fn new(value: Option<&str>) -> ValidatedNel<StoreIdError, Self> {
        Self::new_with_rule(value, &FormatRule::placeholder())
    }

    /// Creates a `StoreId` from raw input, checked against `rule`.
    pub fn new_with_rule(value: Option<&str>, rule: &FormatRule) -> ValidatedNel<StoreIdError, Self> {
        constrained_type::create_formatted(
            Self::FIELD_NAME,
            StoreId,
            StoreIdError::from,
            rule,
            value,
        )
    }

    /// Creates a `StoreId` without any validation.
    ///
    /// Only for trusted sources, such as rows read back from storage that
    /// were validated when written. Never call this with user input.
    pub fn new_not_validated(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns a reference to the inner ID string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consumes the `StoreId`, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
