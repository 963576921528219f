//! Illustrative user domain - tagged fields validated applicatively.
//!
//! This module is the worked example for the rest of the crate: a two-field
//! `User` record whose id and email are doubly tagged (field kind on the
//! inside, owning record on the outside), validated field by field, and
//! assembled through a curried constructor with either combination policy.
//!
//! The validators are written once against
//! [`FromMessage`](crate::validated::FromMessage); choosing `String` or
//! `Vec<String>` as the error type selects fail-fast or accumulating
//! reporting without touching the predicate logic.
//!
//! # Examples
//!
//! ```rust
//! use vetted::user::{validate_user, validate_user_all};
//!
//! // Fail-fast: only the first problem is reported.
//! let outcome = validate_user(0, "emailtest.com");
//! assert_eq!(outcome.invalid(), Some(String::from("Invalid code")));
//!
//! // Accumulating: every problem is reported, in field order.
//! let outcome = validate_user_all(0, "emailtest.com");
//! assert_eq!(
//!     outcome.invalid(),
//!     Some(vec![
//!         String::from("Invalid code"),
//!         String::from("Invalid email"),
//!     ])
//! );
//! ```

use crate::tagged::{Tagged, Untag};
use crate::typeclass::Applicative;
use crate::validated::{FromMessage, Validated};
use crate::{compose, curry2};

/// Marker types for the user domain.
///
/// Uninhabited enums: they exist only to discriminate tagged values at
/// compile time.
pub mod markers {
    /// Marks a value as belonging to the user record.
    pub enum User {}

    /// Marks an integer as an id.
    pub enum Id {}

    /// Marks a string as an email address.
    pub enum Email {}
}

/// A user id: an integer tagged as id-shaped and as belonging to `User`.
pub type UserId = Tagged<markers::User, Tagged<markers::Id, i64>>;

/// A user email: a string tagged as email-shaped and as belonging to `User`.
pub type UserEmail = Tagged<markers::User, Tagged<markers::Email, String>>;

/// Wraps a raw integer into the nested [`UserId`] shape.
#[inline]
pub const fn user_id(raw: i64) -> UserId {
    Tagged::new(Tagged::new(raw))
}

/// Wraps a raw string into the nested [`UserEmail`] shape.
#[inline]
pub fn user_email(raw: &str) -> UserEmail {
    Tagged::new(Tagged::new(raw.to_owned()))
}

/// The illustrative record: two independently validated tagged fields.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct User {
    /// The user's id.
    pub id: UserId,
    /// The user's email address.
    pub email: UserEmail,
}

impl User {
    /// Assembles a user from already-validated fields.
    #[inline]
    pub const fn new(id: UserId, email: UserEmail) -> Self {
        Self { id, email }
    }
}

// =============================================================================
// Field Validators
//
// One predicate each; the error shape is the caller's choice of E.
// =============================================================================

/// Accepts an id whose underlying integer is strictly positive.
///
/// # Examples
///
/// ```rust
/// use vetted::user::{user_id, validate_id};
/// use vetted::validated::Validated;
///
/// let outcome: Validated<String, _> = validate_id(user_id(1));
/// assert!(outcome.is_valid());
///
/// let outcome: Validated<Vec<String>, _> = validate_id(user_id(0));
/// assert_eq!(outcome.invalid(), Some(vec![String::from("Invalid code")]));
/// ```
pub fn validate_id<E: FromMessage>(id: UserId) -> Validated<E, UserId> {
    if *id.untag_ref() > 0 {
        Validated::Valid(id)
    } else {
        Validated::invalid_message("Invalid code")
    }
}

/// Accepts an email whose underlying string contains an `@`.
pub fn validate_email<E: FromMessage>(email: UserEmail) -> Validated<E, UserEmail> {
    if email.untag_ref().contains('@') {
        Validated::Valid(email)
    } else {
        Validated::invalid_message("Invalid email")
    }
}

/// Wraps and validates a raw id in one step.
///
/// Composed right-to-left: the double wrap runs first, the predicate second.
pub fn checked_id<E: FromMessage>(raw: i64) -> Validated<E, UserId> {
    compose!(validate_id::<E>, user_id)(raw)
}

/// Wraps and validates a raw email in one step.
pub fn checked_email<E: FromMessage>(raw: &str) -> Validated<E, UserEmail> {
    compose!(validate_email::<E>, user_email)(raw)
}

// =============================================================================
// Record Assembly
// =============================================================================

/// Validates both fields and assembles a user, stopping at the first
/// problem.
///
/// The curried constructor is lifted into the outcome and fed one validated
/// field at a time; the fail-fast `apply` keeps only the first error.
pub fn validate_user(raw_id: i64, raw_email: &str) -> Validated<String, User> {
    let construct = curry2!(User::new);
    Validated::Valid(construct)
        .apply(checked_id(raw_id))
        .apply(checked_email(raw_email))
}

/// Validates both fields and assembles a user, reporting every problem.
///
/// Same shape as [`validate_user`]; the accumulating `apply` merges errors
/// through `Vec`'s semigroup, so messages arrive in field order.
pub fn validate_user_all(raw_id: i64, raw_email: &str) -> Validated<Vec<String>, User> {
    let construct = curry2!(User::new);
    Validated::Valid(construct)
        .apply_accumulating(checked_id(raw_id))
        .apply_accumulating(checked_email(raw_email))
}
