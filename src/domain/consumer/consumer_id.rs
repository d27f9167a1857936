//! `ConsumerId` value object.

use std::fmt;

use thiserror::Error;

use crate::validation::constrained_type::{self, Violation};
use crate::validation::{FormatRule, ValidatedNel, ValidationError};

/// Reasons a `ConsumerId` cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ConsumerIdError {
    /// Input was absent or blank.
    #[error("ConsumerId is required")]
    Required,
    /// Input did not satisfy the `ConsumerId` format rule.
    #[error("ConsumerId '{0}' does not satisfy the required format")]
    InvalidFormat(String),
}

impl From<Violation> for ConsumerIdError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::Required => Self::Required,
            Violation::InvalidFormat(value) => Self::InvalidFormat(value),
        }
    }
}

impl ValidationError for ConsumerIdError {
    fn field_name(&self) -> &'static str {
        ConsumerId::FIELD_NAME
    }
}

/// Identifier of a consumer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConsumerId(String);

impl ConsumerId {
    /// Name used in error messages and log events.
    pub const FIELD_NAME: &'static str = "ConsumerId";

    /// Creates a `ConsumerId` from raw input, checked against the default rule.
    pub fn new(value: Option<&str>) -> ValidatedNel<ConsumerIdError, Self> {
        Self::new_with_rule(value, &FormatRule::placeholder())
    }

    /// Creates a `ConsumerId` from raw input, checked against `rule`.
    pub fn new_with_rule(
        value: Option<&str>,
        rule: &FormatRule,
    ) -> ValidatedNel<ConsumerIdError, Self> {
        constrained_type::create_formatted(
            Self::FIELD_NAME,
            ConsumerId,
            ConsumerIdError::from,
            rule,
            value,
        )
    }

    /// Creates a `ConsumerId` without validation. Trusted sources only.
    pub fn new_not_validated(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ConsumerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for ConsumerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
