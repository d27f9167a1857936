//! Semigroup type class - types with an associative binary operation.
//!
//! Validation failures are accumulated through this trait: when two
//! independent validations both fail, their error collections are
//! combined with [`Semigroup::combine`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use stella_domain::typeclass::Semigroup;
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use stella_domain::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stella_domain::typeclass::Semigroup;
    ///
    /// let parts = vec![vec![1], vec![2, 3], vec![4]];
    /// assert_eq!(Vec::reduce_all(parts), Some(vec![1, 2, 3, 4]));
    ///
    /// let empty: Vec<Vec<i32>> = vec![];
    /// assert_eq!(Vec::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
