//! Non-empty vector used as the error container of [`ValidatedNel`].
//!
//! [`ValidatedNel`]: super::ValidatedNel

use std::fmt;

use crate::typeclass::Semigroup;

/// A vector guaranteed to hold at least one element.
///
/// A failed validation always carries at least one reason, so the error
/// side of [`ValidatedNel`](super::ValidatedNel) uses this type instead of a
/// plain `Vec`.
///
/// # Examples
///
/// ```rust
/// use stella_domain::validation::NonEmptyVec;
/// use stella_domain::typeclass::Semigroup;
///
/// let errors = NonEmptyVec::singleton("first").combine(NonEmptyVec::singleton("second"));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(*errors.head(), "first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NonEmptyVec<T> {
    elements: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a collection holding exactly one element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Creates a collection from a vector, returning `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stella_domain::validation::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::<i32>::from_vec(vec![]).is_none());
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Option<Self> {
        if elements.is_empty() {
            None
        } else {
            Some(Self { elements })
        }
    }

    /// Returns the first element.
    #[must_use]
    pub fn head(&self) -> &T {
        &self.elements[0]
    }

    /// Returns the number of elements (always at least one).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`; present for API symmetry with `Vec`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Appends an element to the end.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Applies `function` to every element, keeping the order.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }

    /// Converts into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.elements.iter().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(non_empty: NonEmptyVec<T>) -> Self {
        non_empty.elements
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
