//! Error construction strategies
//!
//! A [`Validator`](crate::Validator) never builds error values itself. It hands
//! the rendered message to an [`ErrorFactory`], so one rule implementation
//! serves every error flavour.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ErrorFactory, Plain, Structured, ErrorKind};
//!
//! let plain = Plain.build(format_args!("{} is required", "title"));
//! assert_eq!(plain.to_string(), "title is required");
//!
//! let api = Structured.build(format_args!("{} is required", "title"));
//! assert_eq!(api.kind(), ErrorKind::BadRequest);
//! ```
//!
//! Custom factories plug in the same way:
//!
//! ```
//! use std::fmt;
//! use fieldcheck::{ErrorFactory, Validator, FieldValidator};
//!
//! struct Shouting;
//!
//! impl ErrorFactory for Shouting {
//!     type Error = String;
//!
//!     fn build(&self, args: fmt::Arguments<'_>) -> String {
//!         args.to_string().to_uppercase()
//!     }
//! }
//!
//! let mut v = Validator::with_factory(Shouting);
//! v.required_string("", "title", None);
//! assert_eq!(v.get_error(), Some("TITLE IS REQUIRED".to_string()));
//! ```

use std::fmt;

use crate::error::{ApiError, ValidationError};

/// Builds an error value from a message template and its arguments.
pub trait ErrorFactory {
    /// The error value stored for each failure.
    type Error: fmt::Display + Clone;

    /// Render `args` into an error value.
    fn build(&self, args: fmt::Arguments<'_>) -> Self::Error;
}

impl<F: ErrorFactory + ?Sized> ErrorFactory for &F {
    type Error = F::Error;

    #[inline]
    fn build(&self, args: fmt::Arguments<'_>) -> Self::Error {
        (**self).build(args)
    }
}

/// Produces [`ValidationError`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl ErrorFactory for Plain {
    type Error = ValidationError;

    #[inline]
    fn build(&self, args: fmt::Arguments<'_>) -> ValidationError {
        ValidationError::new(args.to_string())
    }
}

/// Produces bad-request [`ApiError`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structured;

impl ErrorFactory for Structured {
    type Error = ApiError;

    #[inline]
    fn build(&self, args: fmt::Arguments<'_>) -> ApiError {
        ApiError::bad_request(args.to_string())
    }
}
