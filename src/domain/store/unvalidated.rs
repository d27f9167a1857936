//! Unvalidated store input.
//!
//! Raw data received from outside the domain (request bodies, imports).
//! Every field is optional so that absent values reach validation and are
//! reported as `Required` instead of failing deserialization.
//!
//! This type intentionally contains no validation logic; validation converts
//! it into a [`Store`] in a separate step.

use crate::validation::{FormatRules, ValidatedNel};

use super::{Store, StoreError, create_store_with};

/// Unvalidated store input.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::UnvalidatedStore;
///
/// let input = UnvalidatedStore::new(None, Some("short".to_string()), None);
/// let errors = input.validate().err().unwrap();
/// assert_eq!(errors.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UnvalidatedStore {
    store_id: Option<String>,
    store_name: Option<String>,
    store_address: Option<String>,
}

impl UnvalidatedStore {
    /// Creates a new `UnvalidatedStore`. No validation is performed.
    #[must_use]
    pub const fn new(
        store_id: Option<String>,
        store_name: Option<String>,
        store_address: Option<String>,
    ) -> Self {
        Self {
            store_id,
            store_name,
            store_address,
        }
    }

    #[must_use]
    pub fn store_id(&self) -> Option<&str> {
        self.store_id.as_deref()
    }

    #[must_use]
    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    #[must_use]
    pub fn store_address(&self) -> Option<&str> {
        self.store_address.as_deref()
    }

    /// Validates the input with the default rules.
    pub fn validate(&self) -> ValidatedNel<StoreError, Store> {
        self.validate_with(&FormatRules::default())
    }

    /// Validates the input with the given rules.
    pub fn validate_with(&self, rules: &FormatRules) -> ValidatedNel<StoreError, Store> {
        create_store_with(
            rules,
            self.store_id(),
            self.store_name(),
            self.store_address(),
        )
    }
}

impl From<&Store> for UnvalidatedStore {
    fn from(store: &Store) -> Self {
        Self::new(
            Some(store.store_id().value().to_string()),
            Some(store.store_name().value().to_string()),
            Some(store.store_address().value().to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{StoreAddressError, StoreIdError};
    use rstest::rstest;

    #[rstest]
    fn accessors_return_raw_values() {
        let input = UnvalidatedStore::new(Some("id".to_string()), None, Some(String::new()));

        assert_eq!(input.store_id(), Some("id"));
        assert_eq!(input.store_name(), None);
        assert_eq!(input.store_address(), Some(""));
    }

    #[rstest]
    fn validate_default_input_reports_every_field() {
        let errors = UnvalidatedStore::default().validate().err().unwrap();

        assert_eq!(errors.len(), 3);
    }

    #[rstest]
    fn validate_round_trips_a_valid_store() {
        let raw = "z".repeat(32);
        let store = Store::new_not_validated(raw.clone(), raw.clone(), raw);

        let revalidated = UnvalidatedStore::from(&store).validate().unwrap();
        assert_eq!(revalidated, store);
    }

    #[rstest]
    fn validate_keeps_raw_input_in_errors() {
        let raw = "q".repeat(32);
        let input = UnvalidatedStore::new(
            Some("legacy".to_string()),
            Some(raw),
            Some("  ".to_string()),
        );

        let errors = input.validate().err().unwrap();
        assert_eq!(
            errors.into_vec(),
            vec![
                StoreError::StoreId(StoreIdError::InvalidFormat("legacy".to_string())),
                StoreError::StoreAddress(StoreAddressError::Required),
            ]
        );
    }
}
