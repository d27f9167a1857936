//! The `Store` aggregate and its composite constructor.
//!
//! A `Store` is used across the web application: repositories persist it,
//! services pass it around and controllers return it in responses.

use thiserror::Error;

use crate::validation::{FormatRules, ValidatedNel, ValidationError};

use super::{StoreAddress, StoreAddressError, StoreId, StoreIdError, StoreName, StoreNameError};

/// Any field-level failure raised while creating a [`Store`].
///
/// Wrapping the per-field enums lets failures from different fields share
/// one accumulated list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum StoreError {
    #[error(transparent)]
    StoreId(#[from] StoreIdError),
    #[error(transparent)]
    StoreName(#[from] StoreNameError),
    #[error(transparent)]
    StoreAddress(#[from] StoreAddressError),
}

impl ValidationError for StoreError {
    fn field_name(&self) -> &'static str {
        match self {
            Self::StoreId(error) => error.field_name(),
            Self::StoreName(error) => error.field_name(),
            Self::StoreAddress(error) => error.field_name(),
        }
    }
}

/// A store, built from three individually valid value objects.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::{StoreId, StoreAddress, StoreName, Store};
///
/// let store = Store::new(
///     StoreId::new_not_validated("0123456789abcdef0123456789abcdef"),
///     StoreName::new_not_validated("Cafe Stella"),
///     StoreAddress::new_not_validated("1-2-3 Shibuya"),
/// );
/// assert_eq!(store.store_name().value(), "Cafe Stella");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Store {
    store_id: StoreId,
    store_name: StoreName,
    store_address: StoreAddress,
}

impl Store {
    /// Assembles a `Store` from value objects that already exist.
    ///
    /// Whether the parts were validated is decided by how they were built.
    #[must_use]
    pub const fn new(store_id: StoreId, store_name: StoreName, store_address: StoreAddress) -> Self {
        Self {
            store_id,
            store_name,
            store_address,
        }
    }

    /// Rebuilds a `Store` from trusted raw values without validation.
    ///
    /// Intended for repositories reading rows that were validated when
    /// written.
    pub fn new_not_validated(
        store_id: impl Into<String>,
        store_name: impl Into<String>,
        store_address: impl Into<String>,
    ) -> Self {
        Self::new(
            StoreId::new_not_validated(store_id),
            StoreName::new_not_validated(store_name),
            StoreAddress::new_not_validated(store_address),
        )
    }

    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    #[must_use]
    pub const fn store_name(&self) -> &StoreName {
        &self.store_name
    }

    #[must_use]
    pub const fn store_address(&self) -> &StoreAddress {
        &self.store_address
    }

    /// Splits the store into its value objects.
    #[must_use]
    pub fn into_parts(self) -> (StoreId, StoreName, StoreAddress) {
        (self.store_id, self.store_name, self.store_address)
    }
}

/// Creates a [`Store`] from raw input using the default rules.
///
/// Every field is validated independently. If any field fails, the result
/// holds the failures of all failing fields in the order id, name, address.
///
/// # Examples
///
/// ```
/// use stella_domain::domain::store::create_store;
///
/// let raw = "a".repeat(32);
/// assert!(create_store(Some(raw.as_str()), Some(raw.as_str()), Some(raw.as_str())).is_valid());
///
/// let errors = create_store(None, Some("short"), None).err().unwrap();
/// assert_eq!(errors.len(), 3);
/// ```
pub fn create_store(
    store_id: Option<&str>,
    store_name: Option<&str>,
    store_address: Option<&str>,
) -> ValidatedNel<StoreError, Store> {
    create_store_with(&FormatRules::default(), store_id, store_name, store_address)
}

/// Creates a [`Store`] from raw input using the given rules.
pub fn create_store_with(
    rules: &FormatRules,
    store_id: Option<&str>,
    store_name: Option<&str>,
    store_address: Option<&str>,
) -> ValidatedNel<StoreError, Store> {
    let store_id = StoreId::new_with_rule(store_id, rules.store_id()).map_errors(StoreError::from);
    let store_name =
        StoreName::new_with_rule(store_name, rules.store_name()).map_errors(StoreError::from);
    let store_address = StoreAddress::new_with_rule(store_address, rules.store_address())
        .map_errors(StoreError::from);

    let store = store_id.map3(store_name, store_address, Store::new);
    if let Some(errors) = store.errors() {
        tracing::debug!(error_count = errors.len(), "store rejected");
    }
    store
}

static_assertions::assert_impl_all!(Store: Send, Sync, Clone);
static_assertions::assert_impl_all!(StoreError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormatRule;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_raw() -> String {
        "abcdefghijklmnopqrstuvwxyz012345".to_string()
    }

    #[rstest]
    fn create_store_all_valid(valid_raw: String) {
        let raw = Some(valid_raw.as_str());
        let store = create_store(raw, raw, raw).unwrap();

        assert_eq!(store.store_id().value(), valid_raw);
        assert_eq!(store.store_name().value(), valid_raw);
        assert_eq!(store.store_address().value(), valid_raw);
    }

    #[rstest]
    fn create_store_all_invalid_accumulates_in_field_order() {
        let errors = create_store(None, Some("bad name"), Some(" ")).err().unwrap();

        assert_eq!(
            errors.into_vec(),
            vec![
                StoreError::StoreId(StoreIdError::Required),
                StoreError::StoreName(StoreNameError::InvalidFormat("bad name".to_string())),
                StoreError::StoreAddress(StoreAddressError::Required),
            ]
        );
    }

    #[rstest]
    fn create_store_one_invalid_reports_only_that_field(valid_raw: String) {
        let errors = create_store(Some(valid_raw.as_str()), None, Some(valid_raw.as_str()))
            .err()
            .unwrap();

        assert_eq!(
            errors.into_vec(),
            vec![StoreError::StoreName(StoreNameError::Required)]
        );
    }

    #[rstest]
    fn create_store_with_custom_rules() {
        let rules = FormatRules::default()
            .with_store_id(FormatRule::pattern(r"^S\d{4}$").unwrap())
            .with_store_name(FormatRule::predicate("any", |_| true))
            .with_store_address(FormatRule::predicate("any", |_| true));

        let store = create_store_with(&rules, Some("S0042"), Some("Cafe Stella"), Some("Shibuya"))
            .unwrap();
        assert_eq!(store.store_id().value(), "S0042");

        let errors = create_store_with(&rules, Some("0042"), Some("Cafe Stella"), Some("Shibuya"))
            .err()
            .unwrap();
        assert_eq!(
            errors.into_vec(),
            vec![StoreError::StoreId(StoreIdError::InvalidFormat("0042".to_string()))]
        );
    }

    #[rstest]
    fn new_not_validated_accepts_anything() {
        let store = Store::new_not_validated("id", "name", "address");

        let (store_id, store_name, store_address) = store.into_parts();
        assert_eq!(store_id.value(), "id");
        assert_eq!(store_name.value(), "name");
        assert_eq!(store_address.value(), "address");
    }

    #[rstest]
    #[case(StoreError::StoreId(StoreIdError::Required), "StoreId", "StoreId is required")]
    #[case(StoreError::StoreName(StoreNameError::Required), "StoreName", "StoreName is required")]
    #[case(
        StoreError::StoreAddress(StoreAddressError::InvalidFormat("x".to_string())),
        "StoreAddress",
        "StoreAddress 'x' does not satisfy the required format"
    )]
    fn store_error_delegates_to_field_error(
        #[case] error: StoreError,
        #[case] field_name: &str,
        #[case] message: &str,
    ) {
        assert_eq!(error.field_name(), field_name);
        assert_eq!(error.error_message(), message);
    }
}
