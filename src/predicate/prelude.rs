//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::prelude::*;
//!
//! let valid_age = gt(0).and(le(150));
//! assert!(valid_age.check(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{And, Not, Or};

// String predicates
pub use super::string::{
    char_count_gt, char_count_le, email, equals, gender, iso8601_datetime, matches, not_blank,
    one_of,
};

// Number predicates
pub use super::number::{between, gt, le, ne, non_zero, Number};

// Collection predicates
pub use super::collection::{has_len, is_not_empty};
