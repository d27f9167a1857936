//! Type class traits used by the validation toolkit.
//!
//! - [`Semigroup`]: Associative binary operations, used to accumulate
//!   validation errors from independent fields.

mod semigroup;

pub use semigroup::Semigroup;
