//! Error values recorded by a validation pass
//!
//! A failed rule produces one error value. Which concrete type that is depends
//! on the [`ErrorFactory`](crate::ErrorFactory) the validator was built with:
//!
//! - [`ValidationError`] is a plain message, produced by [`Plain`](crate::Plain).
//! - [`ApiError`] carries a fixed [`ErrorKind::BadRequest`] category so the first
//!   failure can be returned straight from an API handler. It is produced by
//!   [`Structured`](crate::Structured).
//!
//! Every recorded failure is stored as a [`FieldError`], pairing the error with
//! the field name it was reported under (possibly empty).
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ApiError, ErrorKind, ValidationError};
//!
//! let plain = ValidationError::new("age must be at least 18");
//! assert_eq!(plain.to_string(), "age must be at least 18");
//!
//! let api = ApiError::bad_request("age must be at least 18");
//! assert_eq!(api.kind(), ErrorKind::BadRequest);
//! assert_eq!(api.status_code(), 400);
//! ```

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

/// A plain validation message.
///
/// # Examples
///
/// ```
/// use fieldcheck::ValidationError;
///
/// let err = ValidationError::new("title is required");
/// assert_eq!(err.message(), "title is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    /// The caller-displayable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::new(message)
    }
}

/// Category attached to an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request carried invalid input.
    BadRequest,
}

impl ErrorKind {
    /// HTTP status code conventionally paired with this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadRequest => f.write_str("bad request"),
        }
    }
}

/// Validation failure wrapped in an API error envelope.
///
/// Displays as the bare message so it can be shown to the caller unchanged.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ApiError, ErrorKind};
///
/// let err = ApiError::bad_request("email must be a valid email address");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.to_string(), "email must be a valid email address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ApiError {
            kind,
            message: message.into(),
        }
    }

    /// Create a [`ErrorKind::BadRequest`] error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorKind::BadRequest, message)
    }

    /// The error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The caller-displayable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.message)
    }
}

/// One recorded rule violation.
///
/// Created when a rule's predicate fails and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError<E> {
    name: String,
    error: E,
}

impl<E> FieldError<E> {
    /// Pair an error with the field it was reported under.
    pub fn new(name: impl Into<String>, error: E) -> Self {
        FieldError {
            name: name.into(),
            error,
        }
    }

    /// Field name, empty when the failure is not tied to a single field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The recorded error value.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consume and return the error value.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for FieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.name, self.error)
        }
    }
}

impl<E: StdError + 'static> StdError for FieldError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// Every failure of a finished validation pass, in the order recorded.
///
/// Returned by [`Validator::into_result`](crate::Validator::into_result). Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors<E>(Vec<FieldError<E>>);

impl<E> FieldErrors<E> {
    pub(crate) fn new(errors: Vec<FieldError<E>>) -> Self {
        debug_assert!(!errors.is_empty());
        FieldErrors(errors)
    }

    /// The first recorded failure.
    pub fn first(&self) -> &FieldError<E> {
        &self.0[0]
    }

    /// Number of recorded failures.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failures in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError<E>> {
        self.0.iter()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<FieldError<E>> {
        self.0
    }
}

impl<E: fmt::Display> FieldErrors<E> {
    /// Field name to message, skipping unnamed failures. Later failures win.
    pub fn messages(&self) -> BTreeMap<String, String> {
        collect_messages(&self.0)
    }
}

impl<E> IntoIterator for FieldErrors<E> {
    type Item = FieldError<E>;
    type IntoIter = std::vec::IntoIter<FieldError<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a FieldErrors<E> {
    type Item = &'a FieldError<E>;
    type IntoIter = std::slice::Iter<'a, FieldError<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: fmt::Display> fmt::Display for FieldErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for err in &self.0 {
            write!(f, "\n  -> {}", err)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> StdError for FieldErrors<E> {}

pub(crate) fn collect_messages<E: fmt::Display>(errors: &[FieldError<E>]) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    for err in errors {
        if !err.name.is_empty() {
            messages.insert(err.name.clone(), err.error.to_string());
        }
    }
    messages
}
