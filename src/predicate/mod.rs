//! Predicates behind the validation rules
//!
//! Every rule of [`Validator`](crate::Validator) evaluates one of these pure
//! checks and records a failure when it returns `false`. They are public so
//! callers can reuse them, combine them with `and`, `or` and `not`, and feed
//! them to [`Validator::ensure`](crate::Validator::ensure).
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::*;
//!
//! let username = PredicateExt::<str>::and(char_count_gt(2), char_count_le(20));
//! assert!(username.check("john_doe"));
//! assert!(!username.check("jo"));
//! ```
//!
//! # With a validator
//!
//! ```rust
//! use fieldcheck::{Validator, FieldValidator, ValidationError, predicate::*};
//!
//! let mut v = Validator::new();
//! v.ensure(&-3, gt(0), "quantity", ValidationError::new("quantity must be positive"));
//! assert_eq!(v.messages()["quantity"], "quantity must be positive");
//! ```

mod collection;
mod combinators;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{
    char_count_gt, char_count_le, email, equals, gender, iso8601_datetime, matches, not_blank,
    one_of, CharCount, Email, Equals, Iso8601DateTime, Matches, NotBlank, OneOf,
};

// Re-export number predicates
pub use number::{between, gt, le, ne, non_zero, Between, Gt, Le, Ne, Number};

// Re-export collection predicates
pub use collection::{has_len, is_not_empty, HasLen, IsNotEmpty};
