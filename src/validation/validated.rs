//! Validated type for parallel error accumulation.
//!
//! Unlike `Result`, `Validated` accumulates all errors when combining
//! validations with [`Validated::map2`] or [`Validated::map3`].
//!
//! # Examples
//!
//! ```rust
//! use stella_domain::validation::ValidatedNel;
//!
//! let valid1: ValidatedNel<&str, i32> = ValidatedNel::valid(1);
//! let valid2: ValidatedNel<&str, i32> = ValidatedNel::valid(2);
//! let result = valid1.map2(valid2, |a, b| a + b);
//! assert_eq!(result.ok(), Some(3));
//!
//! let invalid1: ValidatedNel<&str, i32> = ValidatedNel::invalid_nel("error 1");
//! let invalid2: ValidatedNel<&str, i32> = ValidatedNel::invalid_nel("error 2");
//! let result = invalid1.map2(invalid2, |a, b| a + b);
//! // Both errors are accumulated
//! assert_eq!(result.errors().map(|errors| errors.len()), Some(2));
//! ```

use crate::typeclass::Semigroup;

use super::NonEmptyVec;

/// A validation result that accumulates errors.
///
/// `Validated<E, A>` is either:
/// - `Valid(A)` - a successful validation with a value
/// - `Invalid(E)` - a failed validation with its errors
///
/// When `E` is a [`Semigroup`], combining two `Invalid` values keeps the
/// errors of both sides instead of stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Validated<E, A> {
    /// A successful validation result.
    Valid(A),
    /// A failed validation.
    Invalid(E),
}

/// `Validated` whose error side is a non-empty list of errors.
pub type ValidatedNel<E, A> = Validated<NonEmptyVec<E>, A>;

impl<E, A> Validated<E, A> {
    /// Creates a valid result.
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result.
    pub const fn invalid(errors: E) -> Self {
        Self::Invalid(errors)
    }

    /// Returns true if this is a valid result.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if this is an invalid result.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the errors if this is invalid.
    #[must_use]
    pub const fn errors(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Returns a reference to the valid value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Converts to an Option, discarding errors.
    #[must_use]
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Converts to an Option of the errors, discarding the value.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts to a Result.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` if this is an invalid result.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Creates a `Validated` from a `Result`.
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }

    /// Maps the valid value, leaving errors untouched.
    pub fn map<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Maps the error side, leaving the valid value untouched.
    pub fn map_err<G, F>(self, function: F) -> Validated<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(function(errors)),
        }
    }

    /// Chains a dependent validation step.
    ///
    /// This short-circuits: `function` only runs when `self` is valid, so
    /// it cannot accumulate errors. Use it for checks on the same field that
    /// depend on earlier checks passing.
    pub fn and_then<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> Validated<E, B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Unwraps the valid value, panicking if invalid.
    ///
    /// # Panics
    ///
    /// Panics if this is an invalid result.
    pub fn unwrap(self) -> A
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => {
                panic!("called `Validated::unwrap()` on an Invalid value: {errors:?}")
            }
        }
    }
}

// =============================================================================
// Applicative combination
// =============================================================================

impl<E: Semigroup, A> Validated<E, A> {
    /// Combines two independent validations.
    ///
    /// If both are valid, `function` builds the result. Otherwise the errors
    /// of every invalid side are combined, left before right.
    pub fn map2<B, C, F>(self, other: Validated<E, B>, function: F) -> Validated<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Combines three independent validations, accumulating every error.
    pub fn map3<B, C, D, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        function: F,
    ) -> Validated<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.product(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// Pairs two independent validations.
    pub fn product<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Non-empty error list helpers
// =============================================================================

impl<E, A> Validated<NonEmptyVec<E>, A> {
    /// Creates a valid result.
    pub const fn valid_nel(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result holding a single error.
    pub fn invalid_nel(error: E) -> Self {
        Self::Invalid(NonEmptyVec::singleton(error))
    }

    /// Converts every accumulated error, keeping their order.
    ///
    /// Used to lift field-level errors into an aggregate error type before
    /// combining fields.
    pub fn map_errors<G, F>(self, function: F) -> ValidatedNel<G, A>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(|errors| errors.map(function))
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, E> {
    fn from(validated: Validated<E, A>) -> Self {
        validated.into_result()
    }
}
