//! `StoreAddress` value object.
//!
//! The address rule is still a placeholder; swap it through
//! [`FormatRules`](crate::validation::FormatRules) once the address format
//! is decided.

use std::fmt;

use thiserror::Error;

use crate::validation::constrained_type::{self, Violation};
use crate::validation::{FormatRule, ValidatedNel, ValidationError};

/// Reasons a `StoreAddress` cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum StoreAddressError {
    #[error("StoreAddress is required")]
    Required,
    #[error("StoreAddress '{0}' does not satisfy the required format")]
    InvalidFormat(String),
}

impl From<Violation> for StoreAddressError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::Required => Self::Required,
            Violation::InvalidFormat(value) => Self::InvalidFormat(value),
        }
    }
}

impl ValidationError for StoreAddressError {
    fn field_name(&self) -> &'static str {
        StoreAddress::FIELD_NAME
    }
}

/// Postal address of a store.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::{StoreAddress, StoreAddressError};
///
/// let invalid = StoreAddress::new(Some("1-2-3 Shibuya"));
/// assert_eq!(
///     invalid.err().unwrap().into_vec(),
///     vec![StoreAddressError::InvalidFormat("1-2-3 Shibuya".to_string())]
/// );
///
/// // Rows read back from storage skip validation.
/// let stored = StoreAddress::new_not_validated("1-2-3 Shibuya");
/// assert_eq!(stored.value(), "1-2-3 Shibuya");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StoreAddress(String);

impl StoreAddress {
    /// Name used in error messages and log events.
    pub const FIELD_NAME: &'static str = "StoreAddress";

    /// Creates a `StoreAddress` from raw input, checked against the default rule.
    ///
    /// # Returns
    ///
    /// * `Valid(StoreAddress)` - On successful validation
    /// * `Invalid([Required])` - When the input is absent or blank
    /// * `Invalid([InvalidFormat(input)])` - When the format rule rejects the input
    pub fn new(value: Option<&str>) -> ValidatedNel<StoreAddressError, Self> {
        Self::new_with_rule(value, &FormatRule::placeholder())
    }

    /// Creates a `StoreAddress` from raw input, checked against `rule`.
    pub fn new_with_rule(
        value: Option<&str>,
        rule: &FormatRule,
    ) -> ValidatedNel<StoreAddressError, Self> {
        constrained_type::create_formatted(
            Self::FIELD_NAME,
            StoreAddress,
            StoreAddressError::from,
            rule,
            value,
        )
    }

    /// Creates a `StoreAddress` without any validation.
    ///
    /// Only for trusted sources, such as rows read back from storage that
    /// were validated when written.
    pub fn new_not_validated(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns a reference to the inner address string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consumes the `StoreAddress`, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreAddress {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for StoreAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
