//! # stella-domain
//!
//! Domain model of the Stella web application.
//!
//! ## Overview
//!
//! Every domain primitive is a value object built by a smart constructor.
//! Validation failures are data, not panics, and failures of independent
//! fields are accumulated so a caller can report every problem at once.
//!
//! ## Module Structure
//!
//! - `domain`: the `Store` aggregate, its value objects, and `Consumer`
//! - `validation`: `Validated`, `NonEmptyVec`, `FormatRule`, `ValidationError`
//! - `typeclass`: the `Semigroup` abstraction used to accumulate errors
//! - `config`: format rules loaded from the environment
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize` for domain types, `Deserialize` for
//!   unvalidated input
//! - `rayon`: parallel batch validation
//!
//! ## Example
//!
//! ```rust
//! use stella_domain::domain::store::create_store;
//!
//! let raw = "0123456789abcdef0123456789abcdef";
//! let store = create_store(Some(raw), Some(raw), Some(raw));
//! assert!(store.is_valid());
//!
//! let rejected = create_store(None, Some("short"), Some(raw));
//! assert_eq!(rejected.err().map(|errors| errors.len()), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod domain;
pub mod typeclass;
pub mod validation;

/// Re-exports commonly used types and traits.
pub mod prelude {
    pub use crate::domain::consumer::{Consumer, ConsumerId, ConsumerIdError, create_consumer};
    pub use crate::domain::store::{
        Store, StoreAddress, StoreAddressError, StoreError, StoreId, StoreIdError, StoreName,
        StoreNameError, UnvalidatedStore, create_store, create_store_with,
    };
    pub use crate::typeclass::Semigroup;
    pub use crate::validation::{
        FormatRule, FormatRules, NonEmptyVec, Validated, ValidatedNel, ValidationError,
    };
}
