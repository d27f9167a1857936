//! `StoreName` value object.

use std::fmt;

use thiserror::Error;

use crate::validation::constrained_type::{self, Violation};
use crate::validation::{FormatRule, ValidatedNel, ValidationError};

/// Reasons a `StoreName` cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum StoreNameError {
    /// Input was absent or blank.
    #[error("StoreName is required")]
    Required,
    /// Input did not satisfy the `StoreName` format rule.
    #[error("StoreName '{0}' does not satisfy the required format")]
    InvalidFormat(String),
}

impl From<Violation> for StoreNameError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::Required => Self::Required,
            Violation::InvalidFormat(value) => Self::InvalidFormat(value),
        }
    }
}

impl ValidationError for StoreNameError {
    fn field_name(&self) -> &'static str {
        StoreName::FIELD_NAME
    }
}

/// Display name of a store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StoreName(String);

impl StoreName {
    /// Name used in error messages and log events.
    pub const FIELD_NAME: &'static str = "StoreName";

    /// Creates a `StoreName` from raw input, checked against the default rule.
    pub fn new(value: Option<&str>) -> ValidatedNel<StoreNameError, Self> {
        Self::new_with_rule(value, &FormatRule::placeholder())
    }

    /// Creates a `StoreName` from raw input, checked against `rule`.
    pub fn new_with_rule(
        value: Option<&str>,
        rule: &FormatRule,
    ) -> ValidatedNel<StoreNameError, Self> {
        constrained_type::create_formatted(
            Self::FIELD_NAME,
            StoreName,
            StoreNameError::from,
            rule,
            value,
        )
    }

    /// Creates a `StoreName` without validation. Trusted sources only.
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

impl fmt::Display for StoreName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_valid() {
        let raw = "n".repeat(32);

        assert_eq!(StoreName::new(Some(raw.as_str())).unwrap().value(), raw);
    }

    #[rstest]
    #[case(None, StoreNameError::Required)]
    #[case(Some(""), StoreNameError::Required)]
    #[case(Some("Cafe Stella"), StoreNameError::InvalidFormat("Cafe Stella".to_string()))]
    fn new_invalid(#[case] input: Option<&str>, #[case] expected: StoreNameError) {
        let errors = StoreName::new(input).err().unwrap();

        assert_eq!(errors.into_vec(), vec![expected]);
    }

    #[rstest]
    fn new_with_rule_accepts_human_readable_names() {
        let rule = FormatRule::predicate("at most 50 chars", |value| value.chars().count() <= 50);

        let name = StoreName::new_with_rule(Some("Cafe Stella 渋谷店"), &rule).unwrap();
        assert_eq!(name.value(), "Cafe Stella 渋谷店");
    }

    #[rstest]
    fn new_not_validated_keeps_value() {
        let name = StoreName::new_not_validated(String::from("Cafe Stella"));

        assert_eq!(name.to_string(), "Cafe Stella");
        assert_eq!(name.into_inner(), "Cafe Stella");
    }

    #[rstest]
    fn error_field_name() {
        assert_eq!(StoreNameError::Required.field_name(), "StoreName");
        assert_eq!(StoreNameError::Required.error_message(), "StoreName is required");
    }
}
