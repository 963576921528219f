//! Phantom-tagged values - compile-time discrimination of same-typed values.
//!
//! This module provides [`Tagged<Marker, Value>`], a wrapper that pairs a raw
//! value with a marker type that exists only at compile time. Two `Tagged`
//! values with the same underlying `Value` but different markers are distinct
//! types, so an id can never be passed where an email is expected even when
//! both are plain integers or strings underneath.
//!
//! Markers are usually uninhabited enums: they cost nothing, cannot be
//! constructed, and exist purely to name a meaning.
//!
//! # Stacking tags
//!
//! Tags nest. `Tagged<User, Tagged<Id, i64>>` is simultaneously "belongs to
//! User" and "is an id-shaped integer". [`Untag`] unwraps through any number
//! of layers back to the innermost raw value.
//!
//! # Zero cost
//!
//! `Tagged<M, V>` stores exactly one field of type `V`; the marker is a
//! `PhantomData`. The wrapper compiles to the same representation as `V`
//! for every marker.
//!
//! # Examples
//!
//! ```rust
//! use vetted::tagged::{Tagged, Untag};
//!
//! enum Celsius {}
//!
//! let temperature: Tagged<Celsius, f64> = Tagged::new(21.5);
//! assert_eq!(temperature.untag(), 21.5);
//! ```
//!
//! Markers are not interchangeable:
//!
//! ```compile_fail
//! use vetted::tagged::Tagged;
//!
//! enum Celsius {}
//! enum Fahrenheit {}
//!
//! fn freezing(temperature: Tagged<Celsius, f64>) -> bool {
//!     temperature.into_inner() <= 0.0
//! }
//!
//! let sample: Tagged<Fahrenheit, f64> = Tagged::new(32.0);
//! freezing(sample); // mismatched marker types
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::typeclass::{Functor, TypeConstructor};

/// A value paired with a compile-time marker.
///
/// The marker participates only in type checking; it is never constructed
/// and adds no runtime data. The phantom is held as `PhantomData<fn() ->
/// Marker>` so `Tagged` stays `Send`/`Sync`/`Copy` according to `Value`
/// alone, and uninhabited marker enums work.
///
/// # Type Parameters
///
/// * `Marker` - The compile-time discriminator; by convention an uninhabited
///   enum.
/// * `Value` - The stored value.
///
/// # Examples
///
/// ```rust
/// use vetted::tagged::Tagged;
///
/// enum AccountNumber {}
/// enum RoutingNumber {}
///
/// let account: Tagged<AccountNumber, u64> = Tagged::new(12_345);
/// let routing: Tagged<RoutingNumber, u64> = Tagged::new(67_890);
///
/// // Same representation, different types: the two cannot be swapped.
/// assert_eq!(account.into_inner(), 12_345);
/// assert_eq!(routing.into_inner(), 67_890);
/// ```
pub struct Tagged<Marker, Value> {
    value: Value,
    marker: PhantomData<fn() -> Marker>,
}

impl<Marker, Value> Tagged<Marker, Value> {
    /// Wraps a raw value under the marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::tagged::Tagged;
    ///
    /// enum Id {}
    ///
    /// let id: Tagged<Id, i64> = Tagged::new(7);
    /// assert_eq!(id.into_inner(), 7);
    /// ```
    #[inline]
    pub const fn new(value: Value) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the stored value, peeling exactly
    /// one tag layer.
    ///
    /// For nested tags, see [`Untag::untag`] which unwraps all layers.
    #[inline]
    pub fn into_inner(self) -> Value {
        self.value
    }

    /// Returns a reference to the stored value, one layer down.
    #[inline]
    pub const fn as_inner(&self) -> &Value {
        &self.value
    }
}

// =============================================================================
// Recursive Unwrapping
// =============================================================================

/// Recursive unwrapping through nested [`Tagged`] layers.
///
/// `untag` walks through any number of tag layers and returns the innermost
/// non-tagged value; on a non-tagged type it is the identity. Base instances
/// are provided for the primitive scalars, `String`, `&str`, `()`, and
/// `Vec<T>`; a newtype that should act as a raw value can implement the
/// identity instance the same way.
///
/// # Examples
///
/// ```rust
/// use vetted::tagged::{Tagged, Untag};
///
/// enum User {}
/// enum Id {}
///
/// let id: Tagged<User, Tagged<Id, i64>> = Tagged::new(Tagged::new(42));
/// assert_eq!(id.untag(), 42);
/// assert_eq!(*id.untag_ref(), 42);
/// ```
pub trait Untag {
    /// The innermost non-tagged value type.
    type Raw;

    /// Consumes the value and returns the innermost raw value.
    fn untag(self) -> Self::Raw;

    /// Returns a reference to the innermost raw value.
    fn untag_ref(&self) -> &Self::Raw;
}

macro_rules! untag_identity {
    ($($type:ty),* $(,)?) => {
        $(
            impl Untag for $type {
                type Raw = Self;

                #[inline]
                fn untag(self) -> Self {
                    self
                }

                #[inline]
                fn untag_ref(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

untag_identity!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    (),
);

impl Untag for &str {
    type Raw = Self;

    #[inline]
    fn untag(self) -> Self {
        self
    }

    #[inline]
    fn untag_ref(&self) -> &Self {
        self
    }
}

impl<T> Untag for Vec<T> {
    type Raw = Self;

    #[inline]
    fn untag(self) -> Self {
        self
    }

    #[inline]
    fn untag_ref(&self) -> &Self {
        self
    }
}

impl<Marker, Value: Untag> Untag for Tagged<Marker, Value> {
    type Raw = Value::Raw;

    #[inline]
    fn untag(self) -> Self::Raw {
        self.value.untag()
    }

    #[inline]
    fn untag_ref(&self) -> &Self::Raw {
        self.value.untag_ref()
    }
}

// =============================================================================
// Standard Trait Implementations
//
// Written by hand: a derive would bound the marker type, and markers are
// usually uninhabited.
// =============================================================================

impl<Marker, Value: Clone> Clone for Tagged<Marker, Value> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Marker, Value: Copy> Copy for Tagged<Marker, Value> {}

impl<Marker, Value: PartialEq> PartialEq for Tagged<Marker, Value> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Marker, Value: Eq> Eq for Tagged<Marker, Value> {}

impl<Marker, Value: PartialOrd> PartialOrd for Tagged<Marker, Value> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<Marker, Value: Ord> Ord for Tagged<Marker, Value> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<Marker, Value: Hash> Hash for Tagged<Marker, Value> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<Marker, Value: Default> Default for Tagged<Marker, Value> {
    #[inline]
    fn default() -> Self {
        Self::new(Value::default())
    }
}

impl<Marker, Value: fmt::Debug> fmt::Debug for Tagged<Marker, Value> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Tagged").field(&self.value).finish()
    }
}

impl<Marker, Value: fmt::Display> fmt::Display for Tagged<Marker, Value> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(formatter)
    }
}

impl<Marker, Value> From<Value> for Tagged<Marker, Value> {
    #[inline]
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<Marker, Value> TypeConstructor for Tagged<Marker, Value> {
    type Inner = Value;
    type WithType<B> = Tagged<Marker, B>;
}

/// Mapping transforms the stored value and keeps the marker.
impl<Marker, Value> Functor for Tagged<Marker, Value> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Tagged<Marker, B>
    where
        F: FnOnce(Value) -> B,
    {
        Tagged::new(function(self.value))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Tagged<Marker, B>
    where
        F: FnOnce(&Value) -> B,
    {
        Tagged::new(function(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_eq_size, assert_impl_all};

    enum Id {}
    enum Email {}
    enum User {}

    // The marker adds no runtime data, and an uninhabited marker does not
    // poison the wrapper's auto traits.
    assert_eq_size!(Tagged<Id, i64>, i64);
    assert_eq_size!(Tagged<User, Tagged<Id, i64>>, i64);
    assert_eq_size!(Tagged<Email, String>, String);
    assert_impl_all!(Tagged<Id, i64>: Send, Sync, Copy);

    #[rstest]
    fn new_then_into_inner_roundtrips() {
        let id: Tagged<Id, i64> = Tagged::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[rstest]
    fn as_inner_borrows_one_layer() {
        let email: Tagged<Email, String> = Tagged::new(String::from("a@b"));
        assert_eq!(email.as_inner(), "a@b");
    }

    #[rstest]
    fn untag_is_identity_on_raw_values() {
        assert_eq!(42_i64.untag(), 42);
        assert_eq!(String::from("x").untag(), "x");
    }

    #[rstest]
    fn untag_unwraps_single_layer() {
        let id: Tagged<Id, i64> = Tagged::new(42);
        assert_eq!(id.untag(), 42);
    }

    #[rstest]
    fn untag_unwraps_nested_layers() {
        let id: Tagged<User, Tagged<Id, i64>> = Tagged::new(Tagged::new(42));
        assert_eq!(id.untag(), 42);
    }

    #[rstest]
    fn untag_ref_reaches_innermost_value() {
        let email: Tagged<User, Tagged<Email, String>> =
            Tagged::new(Tagged::new(String::from("a@b")));
        assert!(email.untag_ref().contains('@'));
    }

    #[rstest]
    fn equality_compares_values_under_same_marker() {
        let first: Tagged<Id, i64> = Tagged::new(1);
        let second: Tagged<Id, i64> = Tagged::new(1);
        let third: Tagged<Id, i64> = Tagged::new(2);

        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[rstest]
    fn ordering_follows_the_value() {
        let smaller: Tagged<Id, i64> = Tagged::new(1);
        let larger: Tagged<Id, i64> = Tagged::new(2);
        assert!(smaller < larger);
    }

    #[rstest]
    fn clone_and_copy_work_with_uninhabited_marker() {
        let id: Tagged<Id, i64> = Tagged::new(7);
        let copied = id;
        assert_eq!(id, copied);

        let email: Tagged<Email, String> = Tagged::new(String::from("a@b"));
        assert_eq!(email.clone(), email);
    }

    #[rstest]
    fn debug_and_display_delegate_to_value() {
        let id: Tagged<Id, i64> = Tagged::new(7);
        assert_eq!(format!("{id}"), "7");
        assert_eq!(format!("{id:?}"), "Tagged(7)");
    }

    #[rstest]
    fn from_wraps_a_raw_value() {
        let id: Tagged<Id, i64> = 7.into();
        assert_eq!(id.into_inner(), 7);
    }

    #[rstest]
    fn fmap_keeps_the_marker() {
        let id: Tagged<Id, i64> = Tagged::new(7);
        let shifted: Tagged<Id, i64> = id.fmap(|n| n + 1);
        assert_eq!(shifted.into_inner(), 8);
    }

    #[rstest]
    fn fmap_can_change_the_value_type() {
        let id: Tagged<Id, i64> = Tagged::new(7);
        let rendered: Tagged<Id, String> = id.fmap(|n| n.to_string());
        assert_eq!(rendered.into_inner(), "7");
    }
}
