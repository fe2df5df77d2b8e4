//! Testing utilities for code that validates input
//!
//! [`MockValidator`] is a test double for [`FieldValidator`]: query methods
//! return whatever the test programmed, and every rule call is recorded so the
//! test can assert which rules ran with which arguments. No predicate logic runs.
//!
//! The assertion macros work against any [`FieldValidator`].
//!
//! # Examples
//!
//! ## Mocking the validator
//!
//! ```rust
//! use fieldcheck::testing::MockValidator;
//! use fieldcheck::{FieldValidator, ValidationError};
//!
//! fn validate_signup<V: FieldValidator>(v: &mut V, email: &str, age: u32) -> bool {
//!     v.required_email(email, "email", None);
//!     v.min(age, 17, "age", None);
//!     !v.has_error()
//! }
//!
//! let mut mock = MockValidator::<ValidationError>::new().returning_has_error(true);
//! assert!(!validate_signup(&mut mock, "a@b.co", 30));
//!
//! mock.assert_called_with("required_email", &[&"a@b.co"], "email");
//! mock.assert_called_with("min", &[&30, &17], "age");
//! mock.assert_not_called("max");
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use fieldcheck::{assert_field_message, assert_invalid, assert_valid};
//! use fieldcheck::{FieldValidator, Validator};
//!
//! let mut v = Validator::new();
//! v.max(3, 5, "rating", None);
//! assert_valid!(v);
//!
//! v.required_string("", "title", None);
//! assert_invalid!(v);
//! assert_field_message!(v, "title", "title is required");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::predicate::Number;
use crate::validator::FieldValidator;

/// One recorded call on a [`MockValidator`].
///
/// `args` holds the `Debug` rendering of each value and rule parameter, in
/// signature order. Values that are not `Debug` are recorded by shape:
/// `not_none` records whether the option was `Some` (`true`/`false`), and
/// `len_array` / `required_array` record the slice length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Method name, e.g. `"required_string"`.
    pub method: &'static str,
    /// `Debug`-rendered arguments before the field name.
    pub args: Vec<String>,
    /// Field name passed to the call.
    pub name: String,
    /// `Display`-rendered override error, if one was passed.
    pub err: Option<String>,
}

/// Programmable stand-in for a [`FieldValidator`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::MockValidator;
/// use fieldcheck::{FieldValidator, ValidationError};
///
/// let mock = MockValidator::new()
///     .returning_has_error(true)
///     .returning_messages([("age", "too young")])
///     .returning_error(ValidationError::new("too young"));
///
/// assert!(mock.has_error());
/// assert_eq!(mock.messages()["age"], "too young");
/// assert_eq!(mock.get_error(), Some(ValidationError::new("too young")));
/// ```
#[derive(Debug, Clone)]
pub struct MockValidator<E> {
    has_error: bool,
    messages: BTreeMap<String, String>,
    error: Option<E>,
    calls: Vec<Call>,
}

impl<E> MockValidator<E> {
    /// Create a mock whose queries report a clean pass.
    pub fn new() -> Self {
        MockValidator {
            has_error: false,
            messages: BTreeMap::new(),
            error: None,
            calls: Vec::new(),
        }
    }

    /// Program the return value of `has_error`.
    pub fn returning_has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Program the return value of `messages`.
    pub fn returning_messages<I, K, V>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages = messages
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Program the return value of `get_error`.
    pub fn returning_error(mut self, error: E) -> Self {
        self.error = Some(error);
        self
    }

    /// Every recorded call, in call order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Recorded calls of one method.
    pub fn calls_to(&self, method: &str) -> Vec<&Call> {
        self.calls.iter().filter(|c| c.method == method).collect()
    }

    /// How many times `method` was called.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls.iter().filter(|c| c.method == method).count()
    }

    /// Panic unless `method` was called at least once.
    #[track_caller]
    pub fn assert_called(&self, method: &str) {
        if self.call_count(method) == 0 {
            panic!(
                "Expected call to {}, recorded calls: {:?}",
                method,
                self.method_names()
            );
        }
    }

    /// Panic if `method` was called.
    #[track_caller]
    pub fn assert_not_called(&self, method: &str) {
        let count = self.call_count(method);
        if count > 0 {
            panic!("Expected no call to {}, got {}", method, count);
        }
    }

    /// Panic unless `method` was called with these arguments and field name.
    ///
    /// Expected arguments are compared by their `Debug` rendering, so `&30`
    /// matches a recorded `30_u32`.
    #[track_caller]
    pub fn assert_called_with(&self, method: &str, args: &[&dyn fmt::Debug], name: &str) {
        let expected: Vec<String> = args.iter().map(|a| format!("{:?}", a)).collect();
        let found = self
            .calls
            .iter()
            .any(|c| c.method == method && c.args == expected && c.name == name);
        if !found {
            panic!(
                "Expected call {}({}, {:?}), recorded calls to {}: {:?}",
                method,
                expected.join(", "),
                name,
                method,
                self.calls_to(method)
            );
        }
    }

    fn method_names(&self) -> Vec<&'static str> {
        self.calls.iter().map(|c| c.method).collect()
    }
}

impl<E: fmt::Display> MockValidator<E> {
    fn record(&mut self, method: &'static str, args: Vec<String>, name: &str, err: Option<&E>) {
        self.calls.push(Call {
            method,
            args,
            name: name.to_string(),
            err: err.map(|e| e.to_string()),
        });
    }
}

impl<E> Default for MockValidator<E> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! debug_args {
    ($($arg:expr),* $(,)?) => {
        vec![$(format!("{:?}", $arg)),*]
    };
}

impl<E: Clone + fmt::Display> FieldValidator for MockValidator<E> {
    type Error = E;

    fn has_error(&self) -> bool {
        self.has_error
    }

    fn messages(&self) -> BTreeMap<String, String> {
        self.messages.clone()
    }

    fn get_error(&self) -> Option<E> {
        self.error.clone()
    }

    fn add_error(&mut self, name: &str, err: E) {
        self.record("add_error", Vec::new(), name, Some(&err));
    }

    fn add_error_fmt(&mut self, name: &str, args: fmt::Arguments<'_>) {
        self.record("add_error_fmt", debug_args![args.to_string()], name, None);
    }

    fn required_string(&mut self, value: &str, name: &str, err: Option<E>) {
        self.record("required_string", debug_args![value], name, err.as_ref());
    }

    fn required_bytes(&mut self, value: &[u8], name: &str, err: Option<E>) {
        self.record("required_bytes", debug_args![value], name, err.as_ref());
    }

    fn required_number<N: Number>(&mut self, value: N, name: &str, err: Option<E>) {
        self.record("required_number", debug_args![value], name, err.as_ref());
    }

    fn required_bool(&mut self, value: bool, name: &str, err: Option<E>) {
        self.record("required_bool", debug_args![value], name, err.as_ref());
    }

    fn required_time(&mut self, value: DateTime<Utc>, name: &str, err: Option<E>) {
        self.record("required_time", debug_args![value], name, err.as_ref());
    }

    fn required_email(&mut self, value: &str, name: &str, err: Option<E>) {
        self.record("required_email", debug_args![value], name, err.as_ref());
    }

    fn not_none<T: ?Sized>(&mut self, value: Option<&T>, name: &str, err: Option<E>) {
        self.record("not_none", debug_args![value.is_some()], name, err.as_ref());
    }

    fn required_opt_string(&mut self, value: Option<&str>, name: &str, err: Option<E>) {
        self.record("required_opt_string", debug_args![value], name, err.as_ref());
    }

    fn required_opt_number<N: Number>(&mut self, value: Option<N>, name: &str, err: Option<E>) {
        self.record("required_opt_number", debug_args![value], name, err.as_ref());
    }

    fn required_opt_bool(&mut self, value: Option<bool>, name: &str, err: Option<E>) {
        self.record("required_opt_bool", debug_args![value], name, err.as_ref());
    }

    fn required_opt_time(&mut self, value: Option<DateTime<Utc>>, name: &str, err: Option<E>) {
        self.record("required_opt_time", debug_args![value], name, err.as_ref());
    }

    fn min<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<E>) {
        self.record("min", debug_args![value, n], name, err.as_ref());
    }

    fn max<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<E>) {
        self.record("max", debug_args![value, n], name, err.as_ref());
    }

    fn min_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<E>) {
        self.record("min_opt", debug_args![value, n], name, err.as_ref());
    }

    fn max_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<E>) {
        self.record("max_opt", debug_args![value, n], name, err.as_ref());
    }

    fn range<N: Number>(&mut self, value: N, min: N, max: N, name: &str, err: Option<E>) {
        self.record("range", debug_args![value, min, max], name, err.as_ref());
    }

    fn range_opt<N: Number>(
        &mut self,
        value: Option<N>,
        min: N,
        max: N,
        name: &str,
        err: Option<E>,
    ) {
        self.record("range_opt", debug_args![value, min, max], name, err.as_ref());
    }

    fn min_char(&mut self, value: &str, n: usize, name: &str, err: Option<E>) {
        self.record("min_char", debug_args![value, n], name, err.as_ref());
    }

    fn max_char(&mut self, value: &str, n: usize, name: &str, err: Option<E>) {
        self.record("max_char", debug_args![value, n], name, err.as_ref());
    }

    fn length(&mut self, value: usize, atleast: usize, name: &str, err: Option<E>) {
        self.record("length", debug_args![value, atleast], name, err.as_ref());
    }

    fn email(&mut self, value: &str, name: &str, err: Option<E>) {
        self.record("email", debug_args![value], name, err.as_ref());
    }

    fn gender(&mut self, value: &str, name: &str, err: Option<E>) {
        self.record("gender", debug_args![value], name, err.as_ref());
    }

    fn confirm(&mut self, value: &str, confirmation: &str, name: &str, err: Option<E>) {
        self.record("confirm", debug_args![value, confirmation], name, err.as_ref());
    }

    fn iso8601_datetime(&mut self, value: &str, name: &str, err: Option<E>) {
        self.record("iso8601_datetime", debug_args![value], name, err.as_ref());
    }

    fn in_string<S: AsRef<str> + Sync + fmt::Debug>(
        &mut self,
        value: &str,
        candidates: &[S],
        name: &str,
        err: Option<E>,
    ) {
        self.record("in_string", debug_args![value, candidates], name, err.as_ref());
    }

    fn len_array<T>(&mut self, values: &[T], count: usize, name: &str, err: Option<E>) {
        self.record("len_array", debug_args![values.len(), count], name, err.as_ref());
    }

    fn required_array<T>(&mut self, values: &[T], name: &str, err: Option<E>) {
        self.record("required_array", debug_args![values.len()], name, err.as_ref());
    }
}

/// Assert that a validator recorded no failures.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_valid, Validator};
///
/// let v = Validator::new();
/// assert_valid!(v);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr) => {
        if $crate::FieldValidator::has_error(&$validator) {
            panic!(
                "Expected no validation errors, got: {:?}",
                $crate::FieldValidator::messages(&$validator)
            );
        }
    };
}

/// Assert that a validator recorded at least one failure.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_invalid, FieldValidator, Validator};
///
/// let mut v = Validator::new();
/// v.gender("unknown", "gender", None);
/// assert_invalid!(v);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr) => {
        if !$crate::FieldValidator::has_error(&$validator) {
            panic!("Expected validation errors, got none");
        }
    };
}

/// Assert the message reported for one field.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_field_message, FieldValidator, Validator};
///
/// let mut v = Validator::new();
/// v.min(5, 5, "age", None);
/// assert_field_message!(v, "age", "age must be at least 5");
/// ```
#[macro_export]
macro_rules! assert_field_message {
    ($validator:expr, $name:expr, $expected:expr) => {
        match $crate::FieldValidator::messages(&$validator).get($name) {
            Some(message) => assert_eq!(message.as_str(), $expected),
            None => panic!("Expected a message for field {:?}, got none", $name),
        }
    };
}
