//! Validated outcome type - success or failure as plain data.
//!
//! This module provides [`Validated<E, A>`], a two-variant outcome carrying
//! either a valid payload or an error value. Failure is never thrown; it is a
//! first-class value threaded through every combinator, and the caller
//! inspects only the final outcome.
//!
//! Two combination policies are available when assembling a result from
//! several independently validated parts:
//!
//! - **Fail-fast** (the [`Applicative`] impl): the first failure encountered
//!   wins, reading left to right, and the other side is discarded. This is
//!   the behavior consistent with [`Monad::flat_map`] sequencing.
//! - **Accumulating** ([`Validated::apply_accumulating`] and friends): every
//!   failure is kept, merged through the error type's [`Semigroup`]
//!   instance in encounter order. Strictly more informative when all
//!   problems should be surfaced to the end user at once, and it only asks
//!   that errors be combinable - the shape of the computation is unchanged.
//!
//! # Examples
//!
//! ```rust
//! use vetted::validated::Validated;
//!
//! fn positive(n: i64) -> Validated<String, i64> {
//!     if n > 0 {
//!         Validated::Valid(n)
//!     } else {
//!         Validated::Invalid(String::from("must be positive"))
//!     }
//! }
//!
//! assert_eq!(positive(3).map(|n| n * 2), Validated::Valid(6));
//! assert!(positive(-3).is_invalid());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// A two-variant validation outcome.
///
/// `Validated<E, A>` holds exactly one of a valid payload `A` or an error
/// value `E` - never both, never neither.
///
/// # Type Parameters
///
/// * `E` - The error representation. A single message, an ordered list of
///   messages, or any other type; error accumulation additionally requires
///   `E: Semigroup`.
/// * `A` - The valid payload.
///
/// # Examples
///
/// ```rust
/// use vetted::validated::Validated;
///
/// let good: Validated<String, i64> = Validated::Valid(42);
/// let bad: Validated<String, i64> = Validated::Invalid(String::from("oops"));
///
/// assert_eq!(good.valid(), Some(42));
/// assert_eq!(bad.invalid(), Some(String::from("oops")));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Validated<E, A> {
    /// The failure variant, holding the error value.
    Invalid(E),
    /// The success variant, holding the payload.
    Valid(A),
}

impl<E, A> Validated<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs an invalid outcome from a message, letting the error
    /// representation decide how to wrap it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::validated::Validated;
    ///
    /// let single: Validated<String, ()> = Validated::invalid_message("oops");
    /// assert_eq!(single.invalid(), Some(String::from("oops")));
    ///
    /// let listed: Validated<Vec<String>, ()> = Validated::invalid_message("oops");
    /// assert_eq!(listed.invalid(), Some(vec![String::from("oops")]));
    /// ```
    #[inline]
    pub fn invalid_message(message: impl Into<String>) -> Self
    where
        E: FromMessage,
    {
        Self::Invalid(E::from_message(message))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Valid` value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is an `Invalid` value.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option` of the payload, consuming the outcome.
    #[inline]
    pub fn valid(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Converts into an `Option` of the error, consuming the outcome.
    #[inline]
    pub fn invalid(self) -> Option<E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Returns a reference to the payload if present.
    #[inline]
    pub const fn valid_ref(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns a reference to the error if present.
    #[inline]
    pub const fn invalid_ref(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Returns the payload, or the given fallback if invalid.
    #[inline]
    pub fn valid_or(self, fallback: A) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => fallback,
        }
    }

    /// Returns the payload, or computes a fallback from the error.
    #[inline]
    pub fn valid_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(error) => fallback(error),
        }
    }

    /// Returns the payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Invalid` value.
    #[inline]
    pub fn unwrap_valid(self) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => panic!("called `Validated::unwrap_valid()` on an `Invalid` value"),
        }
    }

    /// Returns the error, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Valid` value.
    #[inline]
    pub fn unwrap_invalid(self) -> E {
        match self {
            Self::Valid(_) => panic!("called `Validated::unwrap_invalid()` on a `Valid` value"),
            Self::Invalid(error) => error,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the payload, passing an error through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::validated::Validated;
    ///
    /// let good: Validated<String, i64> = Validated::Valid(21);
    /// assert_eq!(good.map(|n| n * 2), Validated::Valid(42));
    ///
    /// let bad: Validated<String, i64> = Validated::Invalid(String::from("oops"));
    /// assert_eq!(bad.map(|n| n * 2), Validated::Invalid(String::from("oops")));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// Transforms the error, passing a valid payload through unchanged.
    #[inline]
    pub fn map_invalid<F2, F>(self, function: F) -> Validated<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(error) => Validated::Invalid(function(error)),
        }
    }

    /// Applies one of two transformations depending on the variant.
    #[inline]
    pub fn bimap<F2, B, F, G>(self, on_invalid: F, on_valid: G) -> Validated<F2, B>
    where
        F: FnOnce(E) -> F2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(on_valid(value)),
            Self::Invalid(error) => Validated::Invalid(on_invalid(error)),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::validated::Validated;
    ///
    /// let good: Validated<String, i64> = Validated::Valid(42);
    /// let report = good.fold(|error| error, |n| format!("got {n}"));
    /// assert_eq!(report, "got 42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_invalid: F, on_valid: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(error) => on_invalid(error),
        }
    }

    // =========================================================================
    // Accumulating Combination
    //
    // The function-side error always comes first in the combined value, so
    // chaining left-to-right over record fields reports errors in field
    // order.
    // =========================================================================

    /// Applies a wrapped function to a wrapped argument, accumulating
    /// errors.
    ///
    /// Where the fail-fast [`Applicative::apply`] discards the second error,
    /// this combines both through the error type's [`Semigroup`]:
    ///
    /// - `Valid(f).apply_accumulating(x)` behaves as `x.map(f)`.
    /// - `Invalid(e).apply_accumulating(Valid(_))` is `Invalid(e)`.
    /// - `Invalid(e1).apply_accumulating(Invalid(e2))` is
    ///   `Invalid(e1.combine(e2))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::validated::Validated;
    ///
    /// let function: Validated<Vec<String>, fn(i64) -> i64> =
    ///     Validated::Invalid(vec![String::from("first")]);
    /// let argument: Validated<Vec<String>, i64> =
    ///     Validated::Invalid(vec![String::from("second")]);
    ///
    /// assert_eq!(
    ///     function.apply_accumulating(argument),
    ///     Validated::Invalid(vec![String::from("first"), String::from("second")])
    /// );
    /// ```
    #[inline]
    pub fn apply_accumulating<B, Output>(self, other: Validated<E, B>) -> Validated<E, Output>
    where
        E: Semigroup,
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Valid(function), other) => other.map(function),
            (Self::Invalid(error), Validated::Valid(_)) => Validated::Invalid(error),
            (Self::Invalid(first), Validated::Invalid(second)) => {
                Validated::Invalid(first.combine(second))
            }
        }
    }

    /// Combines two outcomes with a binary function, accumulating errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::validated::Validated;
    ///
    /// let a: Validated<Vec<String>, i64> = Validated::Valid(1);
    /// let b: Validated<Vec<String>, i64> = Validated::Valid(2);
    /// assert_eq!(a.map2_accumulating(b, |x, y| x + y), Validated::Valid(3));
    /// ```
    #[inline]
    pub fn map2_accumulating<B, C, F>(
        self,
        other: Validated<E, B>,
        function: F,
    ) -> Validated<E, C>
    where
        E: Semigroup,
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(first), Validated::Invalid(second)) => {
                Validated::Invalid(first.combine(second))
            }
            (Self::Invalid(error), _) | (_, Validated::Invalid(error)) => {
                Validated::Invalid(error)
            }
        }
    }

    /// Pairs two outcomes, accumulating errors.
    ///
    /// Equivalent to `map2_accumulating(other, |a, b| (a, b))`.
    #[inline]
    pub fn zip_accumulating<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)>
    where
        E: Semigroup,
    {
        self.map2_accumulating(other, |a, b| (a, b))
    }
}

// =============================================================================
// Error Representation Strategy
// =============================================================================

/// Strategy for wrapping a validation message into an error representation.
///
/// The same predicate logic serves both combination policies: a validator is
/// written once against `E: FromMessage` and the caller picks the error
/// shape. `String` keeps a single message (fail-fast reporting); to
/// accumulate, `Vec<String>` wraps each message as a one-element list that
/// the [`Semigroup`] instance concatenates in order.
pub trait FromMessage {
    /// Wraps a single descriptive message.
    fn from_message(message: impl Into<String>) -> Self;
}

impl FromMessage for String {
    #[inline]
    fn from_message(message: impl Into<String>) -> Self {
        message.into()
    }
}

impl FromMessage for Vec<String> {
    #[inline]
    fn from_message(message: impl Into<String>) -> Self {
        vec![message.into()]
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Validated<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => formatter.debug_tuple("Valid").field(value).finish(),
            Self::Invalid(error) => formatter.debug_tuple("Invalid").field(error).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    /// `Ok(a)` becomes `Valid(a)`, and `Err(e)` becomes `Invalid(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, E> {
    /// `Valid(a)` becomes `Ok(a)`, and `Invalid(e)` becomes `Err(e)`.
    #[inline]
    fn from(validated: Validated<E, A>) -> Self {
        match validated {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(error) => Err(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
//
// The Applicative instance is fail-fast and left-biased, consistent with the
// Monad instance; accumulation is the inherent `*_accumulating` family.
// =============================================================================

impl<E, A> TypeConstructor for Validated<E, A> {
    type Inner = A;
    type WithType<B> = Validated<E, B>;
}

impl<E: Clone, A> Functor for Validated<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validated<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(error) => Validated::Invalid(error.clone()),
        }
    }
}

impl<E: Clone, A> Applicative for Validated<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validated<E, B> {
        Validated::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validated<E, B>, function: F) -> Validated<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(error), _) | (_, Validated::Invalid(error)) => {
                Validated::Invalid(error)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        function: F,
    ) -> Validated<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Valid(a), Validated::Valid(b), Validated::Valid(c)) => {
                Validated::Valid(function(a, b, c))
            }
            (Self::Invalid(error), _, _)
            | (_, Validated::Invalid(error), _)
            | (_, _, Validated::Invalid(error)) => Validated::Invalid(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Validated<E, B>) -> Validated<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Valid(function), Validated::Valid(b)) => Validated::Valid(function(b)),
            (Self::Invalid(error), _) | (_, Validated::Invalid(error)) => {
                Validated::Invalid(error)
            }
        }
    }
}

impl<E: Clone, A> Monad for Validated<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> Validated<E, B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn positive(n: i64) -> Validated<String, i64> {
        if n > 0 {
            Validated::Valid(n)
        } else {
            Validated::Invalid(String::from("must be positive"))
        }
    }

    #[rstest]
    fn valid_construction() {
        let outcome: Validated<String, i64> = Validated::Valid(42);
        assert!(outcome.is_valid());
        assert!(!outcome.is_invalid());
        assert_eq!(outcome.valid(), Some(42));
    }

    #[rstest]
    fn invalid_construction() {
        let outcome: Validated<String, i64> = Validated::Invalid(String::from("oops"));
        assert!(outcome.is_invalid());
        assert_eq!(outcome.invalid(), Some(String::from("oops")));
    }

    #[rstest]
    fn invalid_message_picks_the_representation() {
        let single: Validated<String, ()> = Validated::invalid_message("oops");
        assert_eq!(single.invalid(), Some(String::from("oops")));

        let listed: Validated<Vec<String>, ()> = Validated::invalid_message("oops");
        assert_eq!(listed.invalid(), Some(vec![String::from("oops")]));
    }

    #[rstest]
    fn references_do_not_consume() {
        let outcome: Validated<String, i64> = Validated::Valid(42);
        assert_eq!(outcome.valid_ref(), Some(&42));
        assert_eq!(outcome.invalid_ref(), None);
        assert!(outcome.is_valid());
    }

    #[rstest]
    fn valid_or_falls_back() {
        assert_eq!(positive(5).valid_or(0), 5);
        assert_eq!(positive(-5).valid_or(0), 0);
        assert_eq!(positive(-5).valid_or_else(|error| error.len() as i64), 16);
    }

    #[rstest]
    #[should_panic(expected = "called `Validated::unwrap_valid()` on an `Invalid` value")]
    fn unwrap_valid_panics_on_invalid() {
        let outcome: Validated<String, i64> = Validated::Invalid(String::from("oops"));
        let _ = outcome.unwrap_valid();
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    #[rstest]
    fn map_transforms_valid_payload() {
        assert_eq!(positive(21).map(|n| n * 2), Validated::Valid(42));
    }

    #[rstest]
    fn map_passes_error_through() {
        assert_eq!(
            positive(-1).map(|n| n * 2),
            Validated::Invalid(String::from("must be positive"))
        );
    }

    #[rstest]
    fn map_invalid_transforms_only_the_error() {
        let outcome: Validated<String, i64> = Validated::Invalid(String::from("oops"));
        assert_eq!(
            outcome.map_invalid(|error| vec![error]),
            Validated::Invalid(vec![String::from("oops")])
        );

        let outcome: Validated<String, i64> = Validated::Valid(42);
        assert_eq!(
            outcome.map_invalid(|error| vec![error]),
            Validated::Valid(42)
        );
    }

    #[rstest]
    fn fold_eliminates_both_variants() {
        let report = positive(42).fold(|error| error, |n| format!("got {n}"));
        assert_eq!(report, "got 42");

        let report = positive(-1).fold(|error| error, |n| format!("got {n}"));
        assert_eq!(report, "must be positive");
    }

    // =========================================================================
    // Fail-Fast Combination
    // =========================================================================

    #[rstest]
    fn apply_valid_function_to_valid_argument() {
        let function: Validated<String, fn(i64) -> i64> = Validated::Valid(|n| n + 1);
        assert_eq!(function.apply(Validated::Valid(5)), Validated::Valid(6));
    }

    #[rstest]
    fn apply_is_left_biased_on_double_failure() {
        let function: Validated<String, fn(i64) -> i64> =
            Validated::Invalid(String::from("first"));
        let argument: Validated<String, i64> = Validated::Invalid(String::from("second"));
        assert_eq!(
            function.apply(argument),
            Validated::Invalid(String::from("first"))
        );
    }

    #[rstest]
    fn flat_map_chains_and_short_circuits() {
        let outcome = positive(4).flat_map(|n| positive(n - 10));
        assert_eq!(outcome, Validated::Invalid(String::from("must be positive")));

        let outcome = positive(4).flat_map(|n| positive(n + 10));
        assert_eq!(outcome, Validated::Valid(14));
    }

    // =========================================================================
    // Accumulating Combination
    // =========================================================================

    #[rstest]
    fn apply_accumulating_combines_both_errors_in_order() {
        let function: Validated<Vec<String>, fn(i64) -> i64> =
            Validated::Invalid(vec![String::from("first")]);
        let argument: Validated<Vec<String>, i64> =
            Validated::Invalid(vec![String::from("second")]);

        assert_eq!(
            function.apply_accumulating(argument),
            Validated::Invalid(vec![String::from("first"), String::from("second")])
        );
    }

    #[rstest]
    fn apply_accumulating_with_valid_function_maps() {
        let function: Validated<Vec<String>, fn(i64) -> i64> = Validated::Valid(|n| n + 1);
        assert_eq!(
            function.apply_accumulating(Validated::Valid(5)),
            Validated::Valid(6)
        );

        let function: Validated<Vec<String>, fn(i64) -> i64> = Validated::Valid(|n| n + 1);
        assert_eq!(
            function.apply_accumulating(Validated::Invalid(vec![String::from("oops")])),
            Validated::Invalid(vec![String::from("oops")])
        );
    }

    #[rstest]
    fn apply_accumulating_keeps_single_error_as_is() {
        let function: Validated<Vec<String>, fn(i64) -> i64> =
            Validated::Invalid(vec![String::from("oops")]);
        assert_eq!(
            function.apply_accumulating(Validated::Valid(5)),
            Validated::Invalid(vec![String::from("oops")])
        );
    }

    #[rstest]
    fn map2_accumulating_combines_errors() {
        let a: Validated<Vec<String>, i64> = Validated::Invalid(vec![String::from("a")]);
        let b: Validated<Vec<String>, i64> = Validated::Invalid(vec![String::from("b")]);
        assert_eq!(
            a.map2_accumulating(b, |x, y| x + y),
            Validated::Invalid(vec![String::from("a"), String::from("b")])
        );
    }

    #[rstest]
    fn map2_accumulating_combines_values_when_both_valid() {
        let a: Validated<Vec<String>, i64> = Validated::Valid(1);
        let b: Validated<Vec<String>, i64> = Validated::Valid(2);
        assert_eq!(a.map2_accumulating(b, |x, y| x + y), Validated::Valid(3));
    }

    #[rstest]
    fn zip_accumulating_pairs_values() {
        let a: Validated<Vec<String>, i64> = Validated::Valid(1);
        let b: Validated<Vec<String>, &str> = Validated::Valid("x");
        assert_eq!(a.zip_accumulating(b), Validated::Valid((1, "x")));
    }

    #[rstest]
    fn string_errors_accumulate_by_concatenation() {
        let function: Validated<String, fn(i64) -> i64> =
            Validated::Invalid(String::from("first "));
        let argument: Validated<String, i64> = Validated::Invalid(String::from("second"));
        assert_eq!(
            function.apply_accumulating(argument),
            Validated::Invalid(String::from("first second"))
        );
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    #[rstest]
    fn result_roundtrip() {
        let ok: Result<i64, String> = Ok(42);
        let validated: Validated<String, i64> = ok.into();
        assert_eq!(validated, Validated::Valid(42));
        let back: Result<i64, String> = validated.into();
        assert_eq!(back, Ok(42));

        let err: Result<i64, String> = Err(String::from("oops"));
        let validated: Validated<String, i64> = err.into();
        assert_eq!(validated, Validated::Invalid(String::from("oops")));
    }

    #[rstest]
    fn debug_formats_variant_names() {
        let outcome: Validated<String, i64> = Validated::Valid(42);
        assert_eq!(format!("{outcome:?}"), "Valid(42)");

        let outcome: Validated<String, i64> = Validated::Invalid(String::from("oops"));
        assert_eq!(format!("{outcome:?}"), "Invalid(\"oops\")");
    }
}
