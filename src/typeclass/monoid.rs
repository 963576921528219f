//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a [`Semigroup`] with a distinguished `empty` value that is
//! neutral with respect to `combine`. The practical payoff over
//! `Semigroup::reduce_all` is total folding: a collection of error values can
//! be collapsed without special-casing emptiness.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use vetted::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
///
/// let errors = vec![vec!["a"], vec![], vec!["b"]];
/// assert_eq!(Vec::combine_all(errors), vec!["a", "b"]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element of the monoid.
    #[must_use]
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// Unlike [`Semigroup::reduce_all`], this is total: an empty iterator
    /// yields `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: Sized + PartialEq,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity of the lifted semigroup.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}
