//! Consumer domain.
//!
//! A consumer currently carries only its identifier.

mod consumer_id;

pub use consumer_id::{ConsumerId, ConsumerIdError};

use crate::validation::{FormatRules, ValidatedNel};

/// A consumer of the web application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Consumer {
    consumer_id: ConsumerId,
}

impl Consumer {
    #[must_use]
    pub const fn new(consumer_id: ConsumerId) -> Self {
        Self { consumer_id }
    }

    /// Rebuilds a `Consumer` from a trusted raw identifier without validation.
    pub fn new_not_validated(consumer_id: impl Into<String>) -> Self {
        Self::new(ConsumerId::new_not_validated(consumer_id))
    }

    #[must_use]
    pub const fn consumer_id(&self) -> &ConsumerId {
        &self.consumer_id
    }
}

/// Creates a [`Consumer`] from raw input using the default rule.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::consumer::{ConsumerIdError, create_consumer};
///
/// let raw = "0".repeat(32);
/// assert_eq!(create_consumer(Some(raw.as_str())).unwrap().consumer_id().value(), raw);
/// assert_eq!(
///     create_consumer(None).err().unwrap().into_vec(),
///     vec![ConsumerIdError::Required]
/// );
/// ```
pub fn create_consumer(consumer_id: Option<&str>) -> ValidatedNel<ConsumerIdError, Consumer> {
    create_consumer_with(&FormatRules::default(), consumer_id)
}

/// Creates a [`Consumer`] from raw input using the given rules.
pub fn create_consumer_with(
    rules: &FormatRules,
    consumer_id: Option<&str>,
) -> ValidatedNel<ConsumerIdError, Consumer> {
    ConsumerId::new_with_rule(consumer_id, rules.consumer_id()).map(Consumer::new)
}
