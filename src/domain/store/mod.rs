//! Store domain: the `Store` aggregate and its value objects.
//!
//! Every value object offers two construction paths:
//!
//! - `new` / `new_with_rule`: validating construction for untrusted input,
//!   returning a [`ValidatedNel`](crate::validation::ValidatedNel)
//! - `new_not_validated`: trusted construction for data that was validated
//!   earlier (for example rows read from storage)
//!
//! Both paths produce the same type; which one a call site uses is a
//! construction-time discipline.
//!
//! # Example
//!
//! ```
//! use stella_domain::domain::store::{StoreError, create_store};
//! use stella_domain::validation::ValidationError;
//!
//! let result = create_store(None, Some("short"), None);
//! let messages: Vec<String> = result
//!     .err()
//!     .unwrap()
//!     .iter()
//!     .map(StoreError::error_message)
//!     .collect();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "StoreId is required",
//!         "StoreName 'short' does not satisfy the required format",
//!         "StoreAddress is required",
//!     ]
//! );
//! ```

mod aggregate;
mod batch;
mod store_address;
mod store_id;
mod store_name;
mod unvalidated;

pub use aggregate::{Store, StoreError, create_store, create_store_with};
#[cfg(feature = "rayon")]
pub use batch::validate_stores_par;
pub use batch::{StoreValidation, partition_results, validate_stores};
pub use store_address::{StoreAddress, StoreAddressError};
pub use store_id::{StoreId, StoreIdError};
pub use store_name::{StoreName, StoreNameError};
pub use unvalidated::UnvalidatedStore;
