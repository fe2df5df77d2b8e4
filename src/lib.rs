//! # Fieldcheck
//!
//! A validation accumulator for request and form input.
//!
//! Create a [`Validator`], run any sequence of independent rule checks
//! against plain values, then ask it whether anything failed, which message
//! belongs to which field, or what the first error was.
//!
//! - Rules never return errors; a failing rule records a `(field, error)` pair.
//! - Each rule takes an optional override error that replaces its default message.
//! - The error type is pluggable through [`ErrorFactory`]: plain
//!   [`ValidationError`]s or bad-request [`ApiError`]s.
//! - [`testing::MockValidator`] stands in for the validator in consumer tests.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! struct Signup<'a> {
//!     email: &'a str,
//!     password: &'a str,
//!     password_confirmation: &'a str,
//!     age: u32,
//! }
//!
//! fn validate(form: &Signup<'_>) -> Validator {
//!     let mut v = Validator::new();
//!     v.required_email(form.email, "email", None);
//!     v.min_char(form.password, 7, "password", None);
//!     v.confirm(form.password_confirmation, form.password, "password_confirmation", None);
//!     v.min(form.age, 17, "age", Some(ValidationError::new("you must be 18 or older")));
//!     v
//! }
//!
//! let v = validate(&Signup {
//!     email: "user@example",
//!     password: "hunter2",
//!     password_confirmation: "hunter3",
//!     age: 16,
//! });
//!
//! assert!(v.has_error());
//! let messages = v.messages();
//! assert_eq!(messages["email"], "email must be a valid email address");
//! assert_eq!(messages["password"], "password must be at least 7 characters");
//! assert_eq!(messages["password_confirmation"], "password_confirmation does not match");
//! assert_eq!(messages["age"], "you must be 18 or older");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every recorded failure.
//! - `serde`: `Serialize` for the error types, for writing error responses.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod factory;
pub mod predicate;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::{ApiError, ErrorKind, FieldError, FieldErrors, ValidationError};
pub use factory::{ErrorFactory, Plain, Structured};
pub use predicate::Number;
pub use validator::{FieldValidator, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ApiError, ErrorKind, FieldError, FieldErrors, ValidationError};
    pub use crate::factory::{ErrorFactory, Plain, Structured};
    pub use crate::predicate::Number;
    pub use crate::validator::{FieldValidator, Validator};
}
