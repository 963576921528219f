//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`](super::Functor) with the ability to lift
//! pure values into the context (`pure`) and to combine multiple independent
//! computations (`map2`, `map3`, `apply`).
//!
//! The combination policy of the trait itself is **fail-fast**: the first
//! failure encountered (reading left to right) wins and the other side is
//! discarded. This is the behavior consistent with monadic sequencing. The
//! error-accumulating alternative lives on
//! [`Validated`](crate::validated::Validated) directly, because it
//! additionally requires the error type to be a
//! [`Semigroup`](super::Semigroup).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vetted::typeclass::Applicative;
//!
//! let a = Some(1);
//! let b = Some(2);
//! assert_eq!(a.map2(b, |x, y| x + y), Some(3));
//!
//! let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(function.apply(Some(5)), Some(6));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is a failure (in the sense appropriate to the specific
    /// applicative), the result is the first failure encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b: Option<i32> = None;
    /// assert_eq!(a.map2(b, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It is
    /// the workhorse of applicative-style record assembly: a curried
    /// constructor is lifted with `pure` and fed one validated field at a
    /// time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// let value = Some(5);
    /// assert_eq!(function.apply(value), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
//
// Fail-fast and left-biased: when both operands are errors, the first is
// returned and the second is discarded.
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_creates_some() {
        let result: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(result, Some(42));
    }

    #[rstest]
    fn option_map2_requires_both() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
        assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
        assert_eq!(None::<i32>.map2(Some(2), |x, y| x + y), None);
    }

    #[rstest]
    fn option_product_pairs_values() {
        assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
        assert_eq!(Some(1).product(None::<&str>), None);
    }

    #[rstest]
    fn result_map2_err_err_returns_first() {
        let a: Result<i32, &str> = Err("first");
        let b: Result<i32, &str> = Err("second");
        assert_eq!(a.map2(b, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_apply_with_function() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x + 1);
        let value: Result<i32, &str> = Ok(5);
        assert_eq!(function.apply(value), Ok(6));
    }

    #[rstest]
    fn result_apply_is_left_biased() {
        let function: Result<fn(i32) -> i32, &str> = Err("function side");
        let value: Result<i32, &str> = Err("value side");
        assert_eq!(function.apply(value), Err("function side"));
    }

    #[rstest]
    fn box_apply_with_function() {
        let function: Box<fn(i32) -> i32> = Box::new(|x| x + 1);
        assert_eq!(*function.apply(Box::new(5)), 6);
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    #[rstest]
    fn option_homomorphism_law() {
        let function = |x: i32| x + 1;
        let value = 5;

        let left: Option<i32> = <Option<()>>::pure(function).apply(<Option<()>>::pure(value));
        let right: Option<i32> = <Option<()>>::pure(function(value));

        assert_eq!(left, right);
        assert_eq!(left, Some(6));
    }

    #[rstest]
    fn result_homomorphism_law() {
        let function = |x: i32| x + 1;
        let value = 5;

        let left: Result<i32, ()> =
            <Result<(), ()>>::pure(function).apply(<Result<(), ()>>::pure(value));
        let right: Result<i32, ()> = <Result<(), ()>>::pure(function(value));

        assert_eq!(left, right);
    }

    #[rstest]
    fn map3_agrees_with_chained_map2() {
        let a = Some(1);
        let b = Some(2);
        let c = Some(3);

        let chained = a
            .map2(b, |x, y| (x, y))
            .map2(c, |(x, y), z| x + y + z);
        let direct = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);

        assert_eq!(chained, direct);
    }
}
