//! # vetted
//!
//! A functional validation library for Rust providing phantom-tagged values,
//! applicative validation with semigroup error accumulation, and function
//! composition utilities.
//!
//! ## Overview
//!
//! This library demonstrates how far Rust's type system carries classic
//! functional validation patterns without any runtime cost:
//!
//! - **Tagged Values**: `Tagged<Marker, Value>` wraps a raw value with a
//!   compile-time marker so that two values of the same underlying type but
//!   different meaning cannot be confused.
//! - **Validated Outcomes**: `Validated<E, A>` carries either a valid payload
//!   or an error value, with `map`/`flat_map` sequencing and two applicative
//!   combination policies (fail-fast and error-accumulating).
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid in the
//!   GAT-based higher-kinded-type emulation style.
//! - **Function Composition**: compose!, pipe!, curry2!, curry3! macros plus
//!   the identity/constant/flip combinators.
//! - **Domain Example**: a `User` record with tagged id/email fields and
//!   validators parameterized over the error representation.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Semigroup, etc.)
//! - `tagged`: The phantom-tagged value wrapper
//! - `validated`: The validation outcome type
//! - `compose`: Function composition and currying utilities
//! - `domain`: The illustrative `user` module
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use vetted::prelude::*;
//! use vetted::user::{validate_user_all, User};
//!
//! // Both fields are invalid; the accumulating policy reports both.
//! let outcome: Validated<Vec<String>, User> = validate_user_all(0, "emailtest.com");
//! assert_eq!(
//!     outcome.invalid(),
//!     Some(vec![
//!         String::from("Invalid code"),
//!         String::from("Invalid email"),
//!     ])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use vetted::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "tagged")]
    pub use crate::tagged::*;

    #[cfg(feature = "validated")]
    pub use crate::validated::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "tagged")]
pub mod tagged;

#[cfg(feature = "validated")]
pub mod validated;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "domain")]
pub mod user;
