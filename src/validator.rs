//! The validation accumulator
//!
//! A [`Validator`] collects named failures across a sequence of independent
//! rule checks. Each rule evaluates a pure predicate; when the predicate fails
//! the rule records the caller's override error, or a default message naming
//! the field and the rule's parameters. Passing rules record nothing.
//!
//! Create one validator per validation pass (for example per request), run the
//! rules, then query it. There is no reset: start a fresh validator instead.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{FieldValidator, ValidationError, Validator};
//!
//! let mut v = Validator::new();
//! v.required_string("   ", "title", None);
//! v.min(16, 18, "age", None);
//! v.max(3, 5, "rating", None);
//! v.email("someone@example.com", "contact", None);
//! v.gender("robot", "gender", Some(ValidationError::new("pick male or female")));
//!
//! assert!(v.has_error());
//!
//! let messages = v.messages();
//! assert_eq!(messages.len(), 3);
//! assert_eq!(messages["title"], "title is required");
//! assert_eq!(messages["age"], "age must be at least 18");
//! assert_eq!(messages["gender"], "pick male or female");
//!
//! // The first recorded failure
//! assert_eq!(v.get_error(), Some(ValidationError::new("title is required")));
//! ```
//!
//! ## Structured errors
//!
//! ```
//! use fieldcheck::{ErrorKind, FieldValidator, Validator};
//!
//! let mut v = Validator::structured();
//! v.in_string("green", &["red", "blue"], "color", None);
//!
//! let err = v.get_error().unwrap();
//! assert_eq!(err.kind(), ErrorKind::BadRequest);
//! assert_eq!(err.status_code(), 400);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{collect_messages, FieldError, FieldErrors};
use crate::factory::{ErrorFactory, Plain, Structured};
use crate::predicate::{
    between, char_count_gt, char_count_le, email, equals, gender, gt, has_len,
    iso8601_datetime, is_not_empty, le, non_zero, not_blank, one_of, Number, Predicate,
};

/// The rule-engine interface.
///
/// Implemented by [`Validator`] and by the
/// [`MockValidator`](crate::testing::MockValidator) test double, so code that
/// validates input can be written against `impl FieldValidator` and tested
/// without running real predicates.
///
/// Every rule takes the value, the rule's parameters, the field name (may be
/// empty) and an optional override error. On failure the override is recorded
/// if given, otherwise a default message.
///
/// # Zero values
///
/// `required_number` and `required_bool` cannot tell a legitimate `0` or
/// `false` from an absent value; both fail. Use the `required_opt_*` rules
/// where absence is modelled with `Option`.
pub trait FieldValidator {
    /// Error value recorded for each failure.
    type Error;

    /// True iff at least one failure was recorded.
    fn has_error(&self) -> bool;

    /// Field name to message for every named failure.
    ///
    /// Unnamed failures are skipped. When a field failed more than once, the
    /// message of the later failure wins.
    fn messages(&self) -> BTreeMap<String, String>;

    /// The error of the first recorded failure.
    fn get_error(&self) -> Option<Self::Error>;

    /// Record a failure unconditionally.
    fn add_error(&mut self, name: &str, err: Self::Error);

    /// Record a failure whose message is rendered from `args`.
    ///
    /// Usually called through the [`add_error!`](crate::add_error) macro.
    fn add_error_fmt(&mut self, name: &str, args: fmt::Arguments<'_>);

    /// Fails on empty or whitespace-only strings.
    fn required_string(&mut self, value: &str, name: &str, err: Option<Self::Error>);

    /// Fails on an empty byte slice.
    fn required_bytes(&mut self, value: &[u8], name: &str, err: Option<Self::Error>);

    /// Fails on zero.
    fn required_number<N: Number>(&mut self, value: N, name: &str, err: Option<Self::Error>);

    /// Fails on `false`.
    fn required_bool(&mut self, value: bool, name: &str, err: Option<Self::Error>);

    /// Fails on the Unix epoch, the default (uninitialized) instant.
    fn required_time(&mut self, value: DateTime<Utc>, name: &str, err: Option<Self::Error>);

    /// Fails on an empty string, otherwise applies [`email`](Self::email).
    fn required_email(&mut self, value: &str, name: &str, err: Option<Self::Error>);

    /// Fails on `None`.
    fn not_none<T: ?Sized>(&mut self, value: Option<&T>, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`required_string`](Self::required_string).
    fn required_opt_string(&mut self, value: Option<&str>, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`required_number`](Self::required_number).
    fn required_opt_number<N: Number>(
        &mut self,
        value: Option<N>,
        name: &str,
        err: Option<Self::Error>,
    );

    /// `None` passes; `Some` is checked with [`required_bool`](Self::required_bool).
    fn required_opt_bool(&mut self, value: Option<bool>, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`required_time`](Self::required_time).
    fn required_opt_time(
        &mut self,
        value: Option<DateTime<Utc>>,
        name: &str,
        err: Option<Self::Error>,
    );

    /// Passes when `value > n`. The bound itself fails.
    fn min<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<Self::Error>);

    /// Passes when `value <= n`.
    fn max<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`min`](Self::min).
    fn min_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`max`](Self::max).
    fn max_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<Self::Error>);

    /// Passes when `min <= value <= max`.
    fn range<N: Number>(&mut self, value: N, min: N, max: N, name: &str, err: Option<Self::Error>);

    /// `None` passes; `Some` is checked with [`range`](Self::range).
    fn range_opt<N: Number>(
        &mut self,
        value: Option<N>,
        min: N,
        max: N,
        name: &str,
        err: Option<Self::Error>,
    );

    /// Passes when the string has more than `n` code points.
    fn min_char(&mut self, value: &str, n: usize, name: &str, err: Option<Self::Error>);

    /// Passes when the string has at most `n` code points.
    fn max_char(&mut self, value: &str, n: usize, name: &str, err: Option<Self::Error>);

    /// Passes when `value > atleast`.
    fn length(&mut self, value: usize, atleast: usize, name: &str, err: Option<Self::Error>);

    /// Empty passes; anything else must look like `local@domain.tld`.
    fn email(&mut self, value: &str, name: &str, err: Option<Self::Error>);

    /// Passes for exactly `"male"` or `"female"`.
    fn gender(&mut self, value: &str, name: &str, err: Option<Self::Error>);

    /// Passes when both strings are identical.
    fn confirm(&mut self, value: &str, confirmation: &str, name: &str, err: Option<Self::Error>);

    /// Empty passes; anything else must be `YYYY-MM-DDTHH:MM:SS` plus `Z` or an offset.
    fn iso8601_datetime(&mut self, value: &str, name: &str, err: Option<Self::Error>);

    /// Passes when `value` equals one of `candidates`.
    ///
    /// The default message lists the candidates and does not mention the field.
    fn in_string<S: AsRef<str> + Sync + fmt::Debug>(
        &mut self,
        value: &str,
        candidates: &[S],
        name: &str,
        err: Option<Self::Error>,
    );

    /// Passes when the slice has exactly `count` elements.
    fn len_array<T>(&mut self, values: &[T], count: usize, name: &str, err: Option<Self::Error>);

    /// Fails on an empty slice.
    fn required_array<T>(&mut self, values: &[T], name: &str, err: Option<Self::Error>);
}

/// Record a failure with a formatted message.
///
/// # Example
///
/// ```
/// use fieldcheck::{add_error, FieldValidator, Validator};
///
/// let mut v = Validator::new();
/// add_error!(v, "sku", "unknown sku {}", "X-1");
/// assert_eq!(v.messages()["sku"], "unknown sku X-1");
/// ```
#[macro_export]
macro_rules! add_error {
    ($validator:expr, $name:expr, $($arg:tt)+) => {
        $crate::FieldValidator::add_error_fmt(&mut $validator, $name, format_args!($($arg)+))
    };
}

/// Accumulates named validation failures.
///
/// The type parameter picks how error values are built; see [`ErrorFactory`].
pub struct Validator<F: ErrorFactory = Plain> {
    errors: Vec<FieldError<F::Error>>,
    factory: F,
}

impl Validator<Plain> {
    /// Create an empty validator recording [`ValidationError`](crate::ValidationError)s.
    pub fn new() -> Self {
        Validator::with_factory(Plain)
    }
}

impl Validator<Structured> {
    /// Create an empty validator recording bad-request [`ApiError`](crate::ApiError)s.
    pub fn structured() -> Self {
        Validator::with_factory(Structured)
    }
}

impl<F: ErrorFactory + Default> Default for Validator<F> {
    fn default() -> Self {
        Validator::with_factory(F::default())
    }
}

impl<F: ErrorFactory> Validator<F> {
    /// Create an empty validator using a custom error factory.
    pub fn with_factory(factory: F) -> Self {
        Validator {
            errors: Vec::new(),
            factory,
        }
    }

    /// Every recorded failure, in recording order.
    pub fn errors(&self) -> &[FieldError<F::Error>] {
        &self.errors
    }

    /// The first recorded failure, with its field name.
    pub fn first_error(&self) -> Option<&FieldError<F::Error>> {
        self.errors.first()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when nothing has failed yet.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish the pass.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldcheck::{FieldValidator, Validator};
    ///
    /// fn check_age(age: u8) -> Result<(), fieldcheck::FieldErrors<fieldcheck::ValidationError>> {
    ///     let mut v = Validator::new();
    ///     v.range(age, 18, 130, "age", None);
    ///     v.into_result()
    /// }
    ///
    /// assert!(check_age(30).is_ok());
    /// let errors = check_age(12).unwrap_err();
    /// assert_eq!(errors.messages()["age"], "age must be between 18 and 130");
    /// ```
    pub fn into_result(self) -> Result<(), FieldErrors<F::Error>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(failures = self.errors.len(), "validation pass failed");
            Err(FieldErrors::new(self.errors))
        }
    }

    /// Record `err` when `predicate` rejects `value`.
    ///
    /// For rules outside the built-in catalogue.
    pub fn ensure<T: ?Sized, P: Predicate<T>>(
        &mut self,
        value: &T,
        predicate: P,
        name: &str,
        err: F::Error,
    ) {
        if !predicate.check(value) {
            self.push(name, err);
        }
    }

    fn push(&mut self, name: &str, error: F::Error) {
        #[cfg(feature = "tracing")]
        tracing::debug!(field = name, error = %error, "validation failure recorded");
        self.errors.push(FieldError::new(name, error));
    }

    fn apply(&mut self, passed: bool, name: &str, err: Option<F::Error>, default: fmt::Arguments<'_>) {
        if passed {
            return;
        }
        let error = match err {
            Some(error) => error,
            None => self.factory.build(default),
        };
        self.push(name, error);
    }
}

impl<F: ErrorFactory> FieldValidator for Validator<F> {
    type Error = F::Error;

    fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    fn messages(&self) -> BTreeMap<String, String> {
        collect_messages(&self.errors)
    }

    fn get_error(&self) -> Option<F::Error> {
        self.errors.first().map(|failure| failure.error().clone())
    }

    fn add_error(&mut self, name: &str, err: F::Error) {
        self.push(name, err);
    }

    fn add_error_fmt(&mut self, name: &str, args: fmt::Arguments<'_>) {
        let error = self.factory.build(args);
        self.push(name, error);
    }

    fn required_string(&mut self, value: &str, name: &str, err: Option<F::Error>) {
        self.apply(
            not_blank().check(value),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_bytes(&mut self, value: &[u8], name: &str, err: Option<F::Error>) {
        self.apply(
            is_not_empty().check(value),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_number<N: Number>(&mut self, value: N, name: &str, err: Option<F::Error>) {
        self.apply(
            non_zero::<N>().check(&value),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_bool(&mut self, value: bool, name: &str, err: Option<F::Error>) {
        self.apply(
            non_zero::<bool>().check(&value),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_time(&mut self, value: DateTime<Utc>, name: &str, err: Option<F::Error>) {
        self.apply(
            non_zero::<DateTime<Utc>>().check(&value),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_email(&mut self, value: &str, name: &str, err: Option<F::Error>) {
        if value.is_empty() {
            self.apply(false, name, err, format_args!("{} is required", name));
            return;
        }
        self.email(value, name, err);
    }

    fn not_none<T: ?Sized>(&mut self, value: Option<&T>, name: &str, err: Option<F::Error>) {
        self.apply(
            value.is_some(),
            name,
            err,
            format_args!("{} is required", name),
        );
    }

    fn required_opt_string(&mut self, value: Option<&str>, name: &str, err: Option<F::Error>) {
        match value {
            None => {}
            Some(value) => self.required_string(value, name, err),
        }
    }

    fn required_opt_number<N: Number>(
        &mut self,
        value: Option<N>,
        name: &str,
        err: Option<F::Error>,
    ) {
        match value {
            None => {}
            Some(value) => self.required_number(value, name, err),
        }
    }

    fn required_opt_bool(&mut self, value: Option<bool>, name: &str, err: Option<F::Error>) {
        match value {
            None => {}
            Some(value) => self.required_bool(value, name, err),
        }
    }

    fn required_opt_time(
        &mut self,
        value: Option<DateTime<Utc>>,
        name: &str,
        err: Option<F::Error>,
    ) {
        match value {
            None => {}
            Some(value) => self.required_time(value, name, err),
        }
    }

    fn min<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<F::Error>) {
        self.apply(
            gt(n).check(&value),
            name,
            err,
            format_args!("{} must be at least {}", name, n),
        );
    }

    fn max<N: Number>(&mut self, value: N, n: N, name: &str, err: Option<F::Error>) {
        self.apply(
            le(n).check(&value),
            name,
            err,
            format_args!("{} must be at most {}", name, n),
        );
    }

    fn min_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<F::Error>) {
        match value {
            None => {}
            Some(value) => self.min(value, n, name, err),
        }
    }

    fn max_opt<N: Number>(&mut self, value: Option<N>, n: N, name: &str, err: Option<F::Error>) {
        match value {
            None => {}
            Some(value) => self.max(value, n, name, err),
        }
    }

    fn range<N: Number>(&mut self, value: N, min: N, max: N, name: &str, err: Option<F::Error>) {
        self.apply(
            between(min, max).check(&value),
            name,
            err,
            format_args!("{} must be between {} and {}", name, min, max),
        );
    }

    fn range_opt<N: Number>(
        &mut self,
        value: Option<N>,
        min: N,
        max: N,
        name: &str,
        err: Option<F::Error>,
    ) {
        match value {
            None => {}
            Some(value) => self.range(value, min, max, name, err),
        }
    }

    fn min_char(&mut self, value: &str, n: usize, name: &str, err: Option<F::Error>) {
        self.apply(
            char_count_gt(n).check(value),
            name,
            err,
            format_args!("{} must be at least {} characters", name, n),
        );
    }

    fn max_char(&mut self, value: &str, n: usize, name: &str, err: Option<F::Error>) {
        self.apply(
            char_count_le(n).check(value),
            name,
            err,
            format_args!("{} must be at most {} characters", name, n),
        );
    }

    fn length(&mut self, value: usize, atleast: usize, name: &str, err: Option<F::Error>) {
        self.apply(
            gt(atleast).check(&value),
            name,
            err,
            format_args!("{} must have a length of at least {}", name, atleast),
        );
    }

    fn email(&mut self, value: &str, name: &str, err: Option<F::Error>) {
        self.apply(
            email().check(value),
            name,
            err,
            format_args!("{} must be a valid email address", name),
        );
    }

    fn gender(&mut self, value: &str, name: &str, err: Option<F::Error>) {
        self.apply(
            gender().check(value),
            name,
            err,
            format_args!("{} must be either male or female", name),
        );
    }

    fn confirm(&mut self, value: &str, confirmation: &str, name: &str, err: Option<F::Error>) {
        self.apply(
            equals(confirmation).check(value),
            name,
            err,
            format_args!("{} does not match", name),
        );
    }

    fn iso8601_datetime(&mut self, value: &str, name: &str, err: Option<F::Error>) {
        self.apply(
            iso8601_datetime().check(value),
            name,
            err,
            format_args!("{} must be an ISO8601 datetime", name),
        );
    }

    fn in_string<S: AsRef<str> + Sync + fmt::Debug>(
        &mut self,
        value: &str,
        candidates: &[S],
        name: &str,
        err: Option<F::Error>,
    ) {
        self.apply(
            one_of(candidates).check(value),
            name,
            err,
            format_args!("value must be one of {}", CandidateList(candidates)),
        );
    }

    fn len_array<T>(&mut self, values: &[T], count: usize, name: &str, err: Option<F::Error>) {
        self.apply(
            has_len(count).check(values),
            name,
            err,
            format_args!("{} must contain exactly {} items", name, count),
        );
    }

    fn required_array<T>(&mut self, values: &[T], name: &str, err: Option<F::Error>) {
        self.apply(
            is_not_empty().check(values),
            name,
            err,
            format_args!("{} is required", name),
        );
    }
}

impl<F> fmt::Debug for Validator<F>
where
    F: ErrorFactory + fmt::Debug,
    F::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("errors", &self.errors)
            .field("factory", &self.factory)
            .finish()
    }
}

/// Renders candidates as `[red, blue]`.
struct CandidateList<'a, S>(&'a [S]);

impl<S: AsRef<str>> fmt::Display for CandidateList<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, candidate) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(candidate.as_ref())?;
        }
        f.write_str("]")
    }
}
